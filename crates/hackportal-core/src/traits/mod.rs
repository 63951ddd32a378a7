//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CalendarEventRepository, CustomBannerRepository, DismissedBannerRepository,
    ParticipantRepository, RepoResult,
};
