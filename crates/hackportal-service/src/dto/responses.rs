//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use hackportal_core::{BannerType, BannerVariant, CalendarEventType, CustomBannerType};
use serde::Serialize;

// ============================================================================
// Banner Responses
// ============================================================================

/// A system banner computed from the participant's profile
#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    #[serde(rename = "type")]
    pub banner_type: BannerType,
    pub title: String,
    pub message: String,
    pub action_text: String,
    pub action_url: String,
    pub variant: BannerVariant,
}

/// Operator-authored banner
#[derive(Debug, Clone, Serialize)]
pub struct CustomBannerResponse {
    pub id: String,
    pub hackathon_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub banner_type: CustomBannerType,
    pub display_start: DateTime<Utc>,
    pub display_end: DateTime<Utc>,
    pub allow_dismiss: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Calendar Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CalendarEventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub event_type: CalendarEventType,
    /// `null` for hackathon-wide events
    pub team_id: Option<String>,
    pub is_dismissed: bool,
}

/// Organizer view of a calendar event
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEventDetailResponse {
    pub id: String,
    pub hackathon_id: String,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub link: Option<String>,
    pub event_type: CalendarEventType,
    pub team_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Notification Feed
// ============================================================================

/// Everything a participant should currently see, in display order
#[derive(Debug, Clone, Serialize)]
pub struct NotificationFeedResponse {
    pub banners: Vec<BannerResponse>,
    pub custom_banners: Vec<CustomBannerResponse>,
    pub next_event: Option<CalendarEventResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health of each backing dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
