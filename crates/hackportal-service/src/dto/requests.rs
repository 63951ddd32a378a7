//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use hackportal_core::{CalendarEventType, CustomBannerType};
use serde::{Deserialize, Deserializer};
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Create custom banner request (organizer)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomBannerRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,

    #[serde(default = "default_banner_type")]
    pub banner_type: CustomBannerType,

    pub display_start: DateTime<Utc>,

    pub display_end: DateTime<Utc>,

    #[serde(default = "default_true")]
    pub allow_dismiss: bool,

    #[validate(length(max = 100, message = "Action text must be at most 100 characters"))]
    pub action_text: Option<String>,

    #[validate(length(max = 500, message = "Action URL must be at most 500 characters"))]
    pub action_url: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_banner_type() -> CustomBannerType {
    CustomBannerType::Info
}

/// Partial update of a custom banner (organizer)
///
/// Omitted fields keep their value. An empty `action_text`/`action_url` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCustomBannerRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: Option<String>,

    pub banner_type: Option<CustomBannerType>,

    pub display_start: Option<DateTime<Utc>>,

    pub display_end: Option<DateTime<Utc>>,

    pub allow_dismiss: Option<bool>,

    #[validate(length(max = 100, message = "Action text must be at most 100 characters"))]
    pub action_text: Option<String>,

    #[validate(length(max = 500, message = "Action URL must be at most 500 characters"))]
    pub action_url: Option<String>,

    pub is_active: Option<bool>,
}

/// Query string for the organizer banner list
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CustomBannerListQuery {
    #[serde(default)]
    pub active_only: bool,
}

/// Present-but-null becomes `Some(None)`; an absent field stays `None`
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Create calendar event request (organizer)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCalendarEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    pub event_date: DateTime<Utc>,

    pub event_end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 500, message = "Link must be at most 500 characters"))]
    pub link: Option<String>,

    #[serde(default)]
    pub event_type: CalendarEventType,

    /// Absent or blank for a hackathon-wide event
    pub team_id: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial update of a calendar event (organizer)
///
/// Omitted fields keep their value. `event_end_date`, `link` and `team_id`
/// are cleared by an explicit `null`; blank `link`/`team_id` clear them too.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCalendarEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: Option<String>,

    pub event_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "nullable")]
    pub event_end_date: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "nullable")]
    pub link: Option<Option<String>>,

    pub event_type: Option<CalendarEventType>,

    #[serde(default, deserialize_with = "nullable")]
    pub team_id: Option<Option<String>>,

    pub is_active: Option<bool>,
}

/// Query string for the organizer calendar list
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CalendarEventListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}
