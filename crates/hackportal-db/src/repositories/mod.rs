//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in hackportal-core.

mod calendar_event;
mod custom_banner;
mod dismissed_banner;
mod error;
mod participant;

pub use calendar_event::PgCalendarEventRepository;
pub use custom_banner::PgCustomBannerRepository;
pub use dismissed_banner::PgDismissedBannerRepository;
pub use participant::PgParticipantRepository;
