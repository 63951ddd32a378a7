//! Calendar event entity - scheduled hackathon milestones shown as notices

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::variant::UnknownVariant;
use crate::value_objects::{CalendarEventId, HackathonId, ParticipantId, TeamId};

/// Urgency of a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarEventType {
    #[default]
    Info,
    Warning,
    Deadline,
}

impl CalendarEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Deadline => "DEADLINE",
        }
    }
}

impl fmt::Display for CalendarEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarEventType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "DEADLINE" => Ok(Self::Deadline),
            other => Err(UnknownVariant::new("calendar event type", other)),
        }
    }
}

/// Calendar event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: CalendarEventId,
    pub hackathon_id: HackathonId,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub link: Option<String>,
    pub event_type: CalendarEventType,
    /// `None` for events shown to every participant
    pub team_id: Option<TeamId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Create an active, hackathon-wide INFO event with a generated ID
    pub fn new(
        hackathon_id: HackathonId,
        title: String,
        description: String,
        event_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CalendarEventId::generate(),
            hackathon_id,
            title,
            description,
            event_date,
            event_end_date: None,
            link: None,
            event_type: CalendarEventType::default(),
            team_id: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// End date, when set, is not before the start
    pub fn has_valid_range(&self) -> bool {
        self.event_end_date
            .map_or(true, |end| end >= self.event_date)
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.team_id.is_none()
    }

    /// Event starts at or after `now`
    #[inline]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.event_date >= now
    }
}

/// A participant's dismissal of one calendar event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventDismissal {
    pub event_id: CalendarEventId,
    pub participant_id: ParticipantId,
    pub hackathon_id: HackathonId,
    pub dismissed_at: DateTime<Utc>,
}

impl CalendarEventDismissal {
    pub fn new(event_id: CalendarEventId, participant_id: ParticipantId, hackathon_id: HackathonId) -> Self {
        Self {
            event_id,
            participant_id,
            hackathon_id,
            dismissed_at: Utc::now(),
        }
    }
}
