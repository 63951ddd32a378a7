//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path/query parsing, and validation.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AuthUser, OrganizerUser};
pub use path::{
    ApiPath, BannerTypePath, CalendarEventPath, CustomBannerPath, EventIdPath,
    HackathonCustomBannerPath, HackathonPath,
};
pub use query::ApiQuery;
pub use validated::ValidatedJson;
