//! System banner handlers

use axum::{extract::State, Json};
use hackportal_service::dto::BannerResponse;
use hackportal_service::BannerService;

use crate::extractors::{ApiPath, AuthUser, BannerTypePath, HackathonPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Active system banners for the caller, in rule order
///
/// GET /hackathons/{hackathon_id}/banners
pub async fn get_active_banners(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<HackathonPath>,
) -> ApiResult<Json<Vec<BannerResponse>>> {
    let hackathon_id = path.hackathon_id()?;

    let banners = BannerService::new(state.service_context())
        .active_for_participant(&auth.participant_id, &hackathon_id)
        .await?;

    Ok(Json(banners.into_iter().map(BannerResponse::from).collect()))
}

/// Dismiss a banner type for the caller
///
/// POST /hackathons/{hackathon_id}/banners/{banner_type}/dismiss
pub async fn dismiss_banner(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<BannerTypePath>,
) -> ApiResult<NoContent> {
    let hackathon_id = path.hackathon_id()?;

    BannerService::new(state.service_context())
        .dismiss(&auth.participant_id, &hackathon_id, path.banner_type())
        .await?;

    Ok(NoContent)
}
