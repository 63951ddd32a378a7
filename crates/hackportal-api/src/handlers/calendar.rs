//! Calendar event handlers
//!
//! Authoring is organizer-only; listing and dismissal are per participant.

use axum::{extract::State, Json};
use hackportal_service::dto::{
    CalendarEventDetailResponse, CalendarEventListQuery, CalendarEventResponse,
    CreateCalendarEventRequest, UpdateCalendarEventRequest,
};
use hackportal_service::CalendarService;

use crate::extractors::{
    ApiPath, ApiQuery, AuthUser, CalendarEventPath, EventIdPath, HackathonPath, OrganizerUser,
    ValidatedJson,
};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /hackathons/{hackathon_id}/calendar-events/manage?include_inactive=
pub async fn list_managed_events(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<HackathonPath>,
    ApiQuery(query): ApiQuery<CalendarEventListQuery>,
) -> ApiResult<Json<Vec<CalendarEventDetailResponse>>> {
    let hackathon_id = path.hackathon_id()?;

    let events = CalendarService::new(state.service_context())
        .list(&hackathon_id, query.include_inactive)
        .await?;

    Ok(Json(events.into_iter().map(CalendarEventDetailResponse::from).collect()))
}

/// POST /hackathons/{hackathon_id}/calendar-events
pub async fn create_event(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<HackathonPath>,
    ValidatedJson(request): ValidatedJson<CreateCalendarEventRequest>,
) -> ApiResult<Created<Json<CalendarEventDetailResponse>>> {
    let hackathon_id = path.hackathon_id()?;

    let event = CalendarService::new(state.service_context())
        .create(&hackathon_id, request)
        .await?;

    Ok(Created(Json(event.into())))
}

/// GET /calendar-events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<EventIdPath>,
) -> ApiResult<Json<CalendarEventDetailResponse>> {
    let event_id = path.event_id()?;

    let event = CalendarService::new(state.service_context())
        .get(&event_id)
        .await?;

    Ok(Json(event.into()))
}

/// PUT /calendar-events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<EventIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCalendarEventRequest>,
) -> ApiResult<Json<CalendarEventDetailResponse>> {
    let event_id = path.event_id()?;

    let event = CalendarService::new(state.service_context())
        .update(&event_id, request)
        .await?;

    Ok(Json(event.into()))
}

/// DELETE /calendar-events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    _organizer: OrganizerUser,
    ApiPath(path): ApiPath<EventIdPath>,
) -> ApiResult<NoContent> {
    let event_id = path.event_id()?;

    CalendarService::new(state.service_context())
        .delete(&event_id)
        .await?;

    Ok(NoContent)
}

/// Events visible to the caller, earliest first, with dismissal state
///
/// GET /hackathons/{hackathon_id}/calendar-events
pub async fn get_calendar_events(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<HackathonPath>,
) -> ApiResult<Json<Vec<CalendarEventResponse>>> {
    let hackathon_id = path.hackathon_id()?;

    let entries = CalendarService::new(state.service_context())
        .events_for_participant(&auth.participant_id, &hackathon_id)
        .await?;

    Ok(Json(entries.into_iter().map(CalendarEventResponse::from).collect()))
}

/// POST /hackathons/{hackathon_id}/calendar-events/{event_id}/dismiss
pub async fn dismiss_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<CalendarEventPath>,
) -> ApiResult<NoContent> {
    let hackathon_id = path.hackathon_id()?;
    let event_id = path.event_id()?;

    CalendarService::new(state.service_context())
        .dismiss(&auth.participant_id, &hackathon_id, &event_id)
        .await?;

    Ok(NoContent)
}

/// DELETE /hackathons/{hackathon_id}/calendar-events/{event_id}/dismiss
pub async fn undismiss_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<CalendarEventPath>,
) -> ApiResult<NoContent> {
    let hackathon_id = path.hackathon_id()?;
    let event_id = path.event_id()?;

    CalendarService::new(state.service_context())
        .undismiss(&auth.participant_id, &hackathon_id, &event_id)
        .await?;

    Ok(NoContent)
}
