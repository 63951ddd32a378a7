//! Service context - dependency container for services
//!
//! Holds the repositories and the JWT service. Constructed once per process
//! and shared behind an `Arc`; services borrow it per request.

use std::sync::Arc;

use hackportal_common::JwtService;
use hackportal_core::traits::{
    CalendarEventRepository, CustomBannerRepository, DismissedBannerRepository,
    ParticipantRepository,
};
use hackportal_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    /// Absent when repositories are not Postgres-backed (tests)
    pool: Option<PgPool>,

    participant_repo: Arc<dyn ParticipantRepository>,
    dismissed_banner_repo: Arc<dyn DismissedBannerRepository>,
    custom_banner_repo: Arc<dyn CustomBannerRepository>,
    calendar_event_repo: Arc<dyn CalendarEventRepository>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool, if one is configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    pub fn dismissed_banner_repo(&self) -> &dyn DismissedBannerRepository {
        self.dismissed_banner_repo.as_ref()
    }

    pub fn custom_banner_repo(&self) -> &dyn CustomBannerRepository {
        self.custom_banner_repo.as_ref()
    }

    pub fn calendar_event_repo(&self) -> &dyn CalendarEventRepository {
        self.calendar_event_repo.as_ref()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    dismissed_banner_repo: Option<Arc<dyn DismissedBannerRepository>>,
    custom_banner_repo: Option<Arc<dyn CustomBannerRepository>>,
    calendar_event_repo: Option<Arc<dyn CalendarEventRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn dismissed_banner_repo(mut self, repo: Arc<dyn DismissedBannerRepository>) -> Self {
        self.dismissed_banner_repo = Some(repo);
        self
    }

    pub fn custom_banner_repo(mut self, repo: Arc<dyn CustomBannerRepository>) -> Self {
        self.custom_banner_repo = Some(repo);
        self
    }

    pub fn calendar_event_repo(mut self, repo: Arc<dyn CalendarEventRepository>) -> Self {
        self.calendar_event_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            participant_repo: required(self.participant_repo, "participant_repo")?,
            dismissed_banner_repo: required(self.dismissed_banner_repo, "dismissed_banner_repo")?,
            custom_banner_repo: required(self.custom_banner_repo, "custom_banner_repo")?,
            calendar_event_repo: required(self.calendar_event_repo, "calendar_event_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
        })
    }
}
