//! Database models - SQLx-compatible structs for PostgreSQL tables

mod calendar_event;
mod custom_banner;
mod dismissed_banner;
mod participant;

pub use calendar_event::CalendarEventModel;
pub use custom_banner::CustomBannerModel;
pub use dismissed_banner::DismissedBannerModel;
pub use participant::{ParticipantModel, TeamModel};
