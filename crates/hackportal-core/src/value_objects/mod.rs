//! Value objects - immutable types that represent domain concepts

mod ids;

pub use ids::{CalendarEventId, CustomBannerId, HackathonId, IdParseError, ParticipantId, TeamId};
