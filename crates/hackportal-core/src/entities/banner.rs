//! System banners and their dismissal records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::value_objects::{HackathonId, ParticipantId};

/// Kind of system banner.
///
/// The evaluator only ever produces the named variants. `Other` carries types
/// the dismissal store received but this build does not know about; they are
/// stored and listed like any other type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BannerType {
    TelegramProfile,
    GithubProfile,
    FindTeam,
    TeamNeedsMembers,
    SetTeamLevel,
    Other(String),
}

impl BannerType {
    /// Types the rule evaluator knows, in evaluation order
    pub const KNOWN: [BannerType; 5] = [
        BannerType::TelegramProfile,
        BannerType::GithubProfile,
        BannerType::FindTeam,
        BannerType::TeamNeedsMembers,
        BannerType::SetTeamLevel,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::TelegramProfile => "TELEGRAM_PROFILE",
            Self::GithubProfile => "GITHUB_PROFILE",
            Self::FindTeam => "FIND_TEAM",
            Self::TeamNeedsMembers => "TEAM_NEEDS_MEMBERS",
            Self::SetTeamLevel => "SET_TEAM_LEVEL",
            Self::Other(raw) => raw,
        }
    }

    /// Whether the rule evaluator can produce this type
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for BannerType {
    fn from(s: &str) -> Self {
        match s {
            "TELEGRAM_PROFILE" => Self::TelegramProfile,
            "GITHUB_PROFILE" => Self::GithubProfile,
            "FIND_TEAM" => Self::FindTeam,
            "TEAM_NEEDS_MEMBERS" => Self::TeamNeedsMembers,
            "SET_TEAM_LEVEL" => Self::SetTeamLevel,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BannerType {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl fmt::Display for BannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BannerType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BannerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(BannerType::from)
    }
}

/// Severity hint for rendering; carries no control-flow weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerVariant {
    Info,
    Warning,
    Error,
}

/// A computed, non-persisted notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub banner_type: BannerType,
    pub title: String,
    pub message: String,
    pub action_text: String,
    pub action_url: String,
    pub variant: BannerVariant,
}

/// Acknowledgment of a banner type by a participant within one hackathon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissedBanner {
    pub participant_id: ParticipantId,
    pub hackathon_id: HackathonId,
    pub banner_type: BannerType,
    pub dismissed_at: DateTime<Utc>,
}

impl DismissedBanner {
    /// Create a dismissal stamped with the current time
    pub fn new(participant_id: ParticipantId, hackathon_id: HackathonId, banner_type: BannerType) -> Self {
        Self {
            participant_id,
            hackathon_id,
            banner_type,
            dismissed_at: Utc::now(),
        }
    }
}
