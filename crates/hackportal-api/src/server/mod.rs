//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use hackportal_common::{AppConfig, AppError, JwtService};
use hackportal_db::{
    apply_schema, create_pool, PgCalendarEventRepository, PgCustomBannerRepository,
    PgDismissedBannerRepository, PgParticipantRepository, PoolConfig,
};
use hackportal_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), state.config());
    router.with_state(state)
}

/// Connect to PostgreSQL, apply the schema and wire the repositories
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    apply_schema(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to apply schema: {e}")))?;
    info!("Database schema is up to date");

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    let service_context = ServiceContextBuilder::new()
        .participant_repo(Arc::new(PgParticipantRepository::new(pool.clone())))
        .dismissed_banner_repo(Arc::new(PgDismissedBannerRepository::new(pool.clone())))
        .custom_banner_repo(Arc::new(PgCustomBannerRepository::new(pool.clone())))
        .calendar_event_repo(Arc::new(PgCalendarEventRepository::new(pool.clone())))
        .pool(pool)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &address).await
}
