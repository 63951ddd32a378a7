//! Dismissed banner database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for dismissed_banners table
#[derive(Debug, Clone, FromRow)]
pub struct DismissedBannerModel {
    pub participant_id: String,
    pub banner_type: String,
    pub hackathon_id: String,
    pub dismissed_at: DateTime<Utc>,
}
