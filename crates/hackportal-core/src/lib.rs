//! # hackportal-core
//!
//! Domain layer containing entities, value objects, the banner rule evaluator,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod rules;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Banner, BannerType, BannerVariant, CalendarEvent, CalendarEventDismissal, CalendarEventType,
    CustomBanner, CustomBannerDismissal, CustomBannerType, DismissedBanner, ParticipantSnapshot,
    TeamLevel, TeamSnapshot, UnknownVariant,
};
pub use error::DomainError;
pub use rules::{evaluate, MIN_TEAM_SIZE};
pub use traits::{
    CalendarEventRepository, CustomBannerRepository, DismissedBannerRepository,
    ParticipantRepository, RepoResult,
};
pub use value_objects::{
    CalendarEventId, CustomBannerId, HackathonId, IdParseError, ParticipantId, TeamId,
};
