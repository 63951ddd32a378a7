//! Custom banner entity - operator-authored, time-windowed announcements

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::variant::UnknownVariant;
use crate::value_objects::{CustomBannerId, HackathonId, ParticipantId};

/// Presentation kind of a custom banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomBannerType {
    Info,
    Warn,
}

impl CustomBannerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
        }
    }
}

impl fmt::Display for CustomBannerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomBannerType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "WARN" => Ok(Self::Warn),
            other => Err(UnknownVariant::new("custom banner type", other)),
        }
    }
}

/// Custom banner entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBanner {
    pub id: CustomBannerId,
    pub hackathon_id: HackathonId,
    pub title: String,
    pub description: String,
    pub banner_type: CustomBannerType,
    pub display_start: DateTime<Utc>,
    pub display_end: DateTime<Utc>,
    pub allow_dismiss: bool,
    pub action_text: Option<String>,
    pub action_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomBanner {
    /// Create a new active, dismissible banner with a generated ID
    pub fn new(
        hackathon_id: HackathonId,
        title: String,
        description: String,
        banner_type: CustomBannerType,
        display_start: DateTime<Utc>,
        display_end: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CustomBannerId::generate(),
            hackathon_id,
            title,
            description,
            banner_type,
            display_start,
            display_end,
            allow_dismiss: true,
            action_text: None,
            action_url: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Active and inside its display window (both bounds inclusive)
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.display_start <= now && now <= self.display_end
    }

    /// Display window is well-formed
    pub fn has_valid_window(&self) -> bool {
        self.display_start <= self.display_end
    }

    /// Bump the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A participant's dismissal of one custom banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBannerDismissal {
    pub custom_banner_id: CustomBannerId,
    pub participant_id: ParticipantId,
    pub hackathon_id: HackathonId,
    pub dismissed_at: DateTime<Utc>,
}

impl CustomBannerDismissal {
    pub fn new(
        custom_banner_id: CustomBannerId,
        participant_id: ParticipantId,
        hackathon_id: HackathonId,
    ) -> Self {
        Self {
            custom_banner_id,
            participant_id,
            hackathon_id,
            dismissed_at: Utc::now(),
        }
    }
}
