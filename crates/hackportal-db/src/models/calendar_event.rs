//! Calendar event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for calendar_events table
#[derive(Debug, Clone, FromRow)]
pub struct CalendarEventModel {
    pub id: String,
    pub hackathon_id: String,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub link: Option<String>,
    pub event_type: String,
    pub team_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

