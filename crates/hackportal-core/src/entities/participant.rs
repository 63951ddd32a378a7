//! Participant snapshot - the read-only view the banner rules evaluate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::variant::UnknownVariant;
use crate::value_objects::{ParticipantId, TeamId};

/// Team difficulty level chosen by the team leader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamLevel {
    Beginner,
    Advanced,
}

impl TeamLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for TeamLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINNER" => Ok(Self::Beginner),
            "ADVANCED" => Ok(Self::Advanced),
            other => Err(UnknownVariant::new("team level", other)),
        }
    }
}

/// Team as seen from one of its participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub id: TeamId,
    pub name: String,
    pub level: Option<TeamLevel>,
    pub members: Vec<ParticipantId>,
}

impl TeamSnapshot {
    /// Create a team snapshot with no level and no members
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            level: None,
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn has_level(&self) -> bool {
        self.level.is_some()
    }
}

/// Profile and team state of a participant at request time.
///
/// `team` is the team the participant belongs to as a rank-and-file member,
/// `led_team` the one they lead. The portal normally populates at most one of
/// them, but nothing here relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    pub id: ParticipantId,
    pub telegram_handle: Option<String>,
    pub github_url: Option<String>,
    pub team: Option<TeamSnapshot>,
    pub led_team: Option<TeamSnapshot>,
}

impl ParticipantSnapshot {
    /// Create a snapshot with an empty profile and no team
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            telegram_handle: None,
            github_url: None,
            team: None,
            led_team: None,
        }
    }

    /// Telegram handle is present and non-empty
    pub fn has_telegram(&self) -> bool {
        is_filled(self.telegram_handle.as_deref())
    }

    /// GitHub URL is present and non-empty
    pub fn has_github(&self) -> bool {
        is_filled(self.github_url.as_deref())
    }

    /// Participant is neither a member nor a leader of any team
    pub fn is_teamless(&self) -> bool {
        self.team.is_none() && self.led_team.is_none()
    }

    /// The team the participant belongs to in any role, leadership first
    pub fn any_team(&self) -> Option<&TeamSnapshot> {
        self.led_team.as_ref().or(self.team.as_ref())
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
