//! Row to entity mappers
//!
//! - `From<Model> for Entity` where every column maps infallibly
//! - `TryFrom<Model> for Entity` where a TEXT column holds a closed enum;
//!   an unrecognised value surfaces as `DomainError::DatabaseError`

mod calendar_event;
mod custom_banner;
mod dismissed_banner;
mod participant;

pub use participant::team_snapshot;

use hackportal_core::{DomainError, UnknownVariant};

fn corrupt_column(err: UnknownVariant) -> DomainError {
    DomainError::DatabaseError(format!("corrupt row: {err}"))
}
