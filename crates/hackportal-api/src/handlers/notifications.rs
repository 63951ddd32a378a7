//! Notification feed handler

use axum::{extract::State, Json};
use chrono::Utc;
use hackportal_service::dto::NotificationFeedResponse;
use hackportal_service::NotificationService;

use crate::extractors::{ApiPath, AuthUser, HackathonPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// System banners, custom banners and the next event in one response
///
/// GET /hackathons/{hackathon_id}/notifications
pub async fn get_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<HackathonPath>,
) -> ApiResult<Json<NotificationFeedResponse>> {
    let hackathon_id = path.hackathon_id()?;

    let feed = NotificationService::new(state.service_context())
        .feed(&auth.participant_id, &hackathon_id, Utc::now())
        .await?;

    Ok(Json(feed.into()))
}
