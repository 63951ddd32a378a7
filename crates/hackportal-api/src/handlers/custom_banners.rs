//! Custom banner handlers
//!
//! CRUD is organizer-only; dismissal is open to any participant.

use axum::{extract::State, Json};
use chrono::Utc;
use hackportal_service::dto::{
    CreateCustomBannerRequest, CustomBannerListQuery, CustomBannerResponse,
    UpdateCustomBannerRequest,
};
use hackportal_service::CustomBannerService;

use crate::extractors::{
    ApiPath, ApiQuery, AuthUser, CustomBannerPath, HackathonCustomBannerPath, HackathonPath,
    OrganizerUser, ValidatedJson,
};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /hackathons/{hackathon_id}/custom-banners?active_only=
pub async fn list_custom_banners(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<HackathonPath>,
    ApiQuery(query): ApiQuery<CustomBannerListQuery>,
) -> ApiResult<Json<Vec<CustomBannerResponse>>> {
    let hackathon_id = path.hackathon_id()?;

    let banners = CustomBannerService::new(state.service_context())
        .list(&hackathon_id, query.active_only, Utc::now())
        .await?;

    Ok(Json(banners.into_iter().map(CustomBannerResponse::from).collect()))
}

/// POST /hackathons/{hackathon_id}/custom-banners
pub async fn create_custom_banner(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<HackathonPath>,
    ValidatedJson(request): ValidatedJson<CreateCustomBannerRequest>,
) -> ApiResult<Created<Json<CustomBannerResponse>>> {
    let hackathon_id = path.hackathon_id()?;

    let banner = CustomBannerService::new(state.service_context())
        .create(&hackathon_id, request)
        .await?;

    Ok(Created(Json(banner.into())))
}

/// GET /custom-banners/{banner_id}
pub async fn get_custom_banner(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<CustomBannerPath>,
) -> ApiResult<Json<CustomBannerResponse>> {
    let banner_id = path.banner_id()?;

    let banner = CustomBannerService::new(state.service_context())
        .get(&banner_id)
        .await?;

    Ok(Json(banner.into()))
}

/// PUT /custom-banners/{banner_id}
pub async fn update_custom_banner(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<CustomBannerPath>,
    ValidatedJson(request): ValidatedJson<UpdateCustomBannerRequest>,
) -> ApiResult<Json<CustomBannerResponse>> {
    let banner_id = path.banner_id()?;

    let banner = CustomBannerService::new(state.service_context())
        .update(&banner_id, request)
        .await?;

    Ok(Json(banner.into()))
}

/// DELETE /custom-banners/{banner_id}
pub async fn delete_custom_banner(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<CustomBannerPath>,
) -> ApiResult<NoContent> {
    let banner_id = path.banner_id()?;

    CustomBannerService::new(state.service_context())
        .delete(&banner_id)
        .await?;

    Ok(NoContent)
}

/// POST /hackathons/{hackathon_id}/custom-banners/{banner_id}/dismiss
pub async fn dismiss_custom_banner(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<HackathonCustomBannerPath>,
) -> ApiResult<NoContent> {
    let hackathon_id = path.hackathon_id()?;
    let banner_id = path.banner_id()?;

    CustomBannerService::new(state.service_context())
        .dismiss(&auth.participant_id, &hackathon_id, &banner_id)
        .await?;

    Ok(NoContent)
}
