//! Custom banner database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for custom_banners table
#[derive(Debug, Clone, FromRow)]
pub struct CustomBannerModel {
    pub id: String,
    pub hackathon_id: String,
    pub title: String,
    pub description: String,
    pub banner_type: String,
    pub display_start: DateTime<Utc>,
    pub display_end: DateTime<Utc>,
    pub allow_dismiss: bool,
    pub action_text: Option<String>,
    pub action_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
