//! Domain entities - core business objects

mod banner;
mod calendar_event;
mod custom_banner;
mod participant;
mod variant;

pub use banner::{Banner, BannerType, BannerVariant, DismissedBanner};
pub use calendar_event::{CalendarEvent, CalendarEventDismissal, CalendarEventType};
pub use custom_banner::{CustomBanner, CustomBannerDismissal, CustomBannerType};
pub use participant::{ParticipantSnapshot, TeamLevel, TeamSnapshot};
pub use variant::UnknownVariant;
