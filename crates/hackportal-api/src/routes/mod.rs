//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{banners, calendar, custom_banners, health, notifications};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(banner_routes())
        .merge(custom_banner_routes())
        .merge(calendar_routes())
        .route(
            "/hackathons/:hackathon_id/notifications",
            get(notifications::get_notifications),
        )
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// System banner routes
fn banner_routes() -> Router<AppState> {
    Router::new()
        .route("/hackathons/:hackathon_id/banners", get(banners::get_active_banners))
        .route(
            "/hackathons/:hackathon_id/banners/:banner_type/dismiss",
            post(banners::dismiss_banner),
        )
}

/// Custom banner routes
fn custom_banner_routes() -> Router<AppState> {
    Router::new()
        // Organizer CRUD
        .route(
            "/hackathons/:hackathon_id/custom-banners",
            get(custom_banners::list_custom_banners).post(custom_banners::create_custom_banner),
        )
        .route(
            "/custom-banners/:banner_id",
            get(custom_banners::get_custom_banner)
                .put(custom_banners::update_custom_banner)
                .delete(custom_banners::delete_custom_banner),
        )
        // Participant dismissal
        .route(
            "/hackathons/:hackathon_id/custom-banners/:banner_id/dismiss",
            post(custom_banners::dismiss_custom_banner),
        )
}

/// Calendar event routes
fn calendar_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hackathons/:hackathon_id/calendar-events",
            get(calendar::get_calendar_events).post(calendar::create_event),
        )
        // Organizer management
        .route(
            "/hackathons/:hackathon_id/calendar-events/manage",
            get(calendar::list_managed_events),
        )
        .route(
            "/calendar-events/:event_id",
            get(calendar::get_event)
                .put(calendar::update_event)
                .delete(calendar::delete_event),
        )
        // Participant dismissal
        .route(
            "/hackathons/:hackathon_id/calendar-events/:event_id/dismiss",
            post(calendar::dismiss_event).delete(calendar::undismiss_event),
        )
}
