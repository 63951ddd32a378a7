//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Storage failures surface as
//! `DomainError::DatabaseError` and are never swallowed here.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    BannerType, CalendarEvent, CalendarEventDismissal, CustomBanner, CustomBannerDismissal,
    DismissedBanner, ParticipantSnapshot,
};
use crate::error::DomainError;
use crate::value_objects::{CalendarEventId, CustomBannerId, HackathonId, ParticipantId, TeamId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Load the profile and team state the banner rules evaluate
    async fn find_snapshot(&self, id: &ParticipantId) -> RepoResult<Option<ParticipantSnapshot>>;
}

// ============================================================================
// Dismissed Banner Repository
// ============================================================================

#[async_trait]
pub trait DismissedBannerRepository: Send + Sync {
    /// Banner types the participant dismissed within a hackathon
    async fn list_types(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<HashSet<BannerType>>;

    /// Find a single dismissal record
    async fn find(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        banner_type: &BannerType,
    ) -> RepoResult<Option<DismissedBanner>>;

    /// Insert the dismissal, or refresh `dismissed_at` if the
    /// (participant, type, hackathon) triple already exists
    async fn upsert(&self, dismissal: &DismissedBanner) -> RepoResult<()>;
}

// ============================================================================
// Custom Banner Repository
// ============================================================================

#[async_trait]
pub trait CustomBannerRepository: Send + Sync {
    /// Find banner by ID
    async fn find_by_id(&self, id: &CustomBannerId) -> RepoResult<Option<CustomBanner>>;

    /// List all banners of a hackathon, newest first
    async fn find_by_hackathon(&self, hackathon_id: &HackathonId) -> RepoResult<Vec<CustomBanner>>;

    /// List banners visible at `now` (active and inside the display window), newest first
    async fn find_visible(
        &self,
        hackathon_id: &HackathonId,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<CustomBanner>>;

    /// Create a new banner
    async fn create(&self, banner: &CustomBanner) -> RepoResult<()>;

    /// Update an existing banner
    async fn update(&self, banner: &CustomBanner) -> RepoResult<()>;

    /// Delete a banner together with its dismissals
    async fn delete(&self, id: &CustomBannerId) -> RepoResult<()>;

    /// Insert or refresh a participant's dismissal
    async fn upsert_dismissal(&self, dismissal: &CustomBannerDismissal) -> RepoResult<()>;

    /// IDs of banners the participant dismissed within a hackathon
    async fn dismissed_ids(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<HashSet<CustomBannerId>>;
}

// ============================================================================
// Calendar Event Repository
// ============================================================================

#[async_trait]
pub trait CalendarEventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: &CalendarEventId) -> RepoResult<Option<CalendarEvent>>;

    /// Active events of a hackathon that are global or belong to `team_id`,
    /// ordered by event date. With `team_id == None` only global events match.
    async fn find_for_team(
        &self,
        hackathon_id: &HackathonId,
        team_id: Option<&TeamId>,
    ) -> RepoResult<Vec<CalendarEvent>>;

    /// Every event of a hackathon across all teams, ordered by event date.
    /// Inactive events are skipped unless `include_inactive` is set.
    async fn find_by_hackathon(
        &self,
        hackathon_id: &HackathonId,
        include_inactive: bool,
    ) -> RepoResult<Vec<CalendarEvent>>;

    /// Create a new event
    async fn create(&self, event: &CalendarEvent) -> RepoResult<()>;

    /// Update an existing event
    async fn update(&self, event: &CalendarEvent) -> RepoResult<()>;

    /// Delete an event together with its dismissals
    async fn delete(&self, id: &CalendarEventId) -> RepoResult<()>;

    /// Insert or refresh a participant's dismissal
    async fn upsert_dismissal(&self, dismissal: &CalendarEventDismissal) -> RepoResult<()>;

    /// Remove a participant's dismissal; no-op if none exists
    async fn delete_dismissal(
        &self,
        event_id: &CalendarEventId,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<()>;

    /// IDs of events the participant dismissed within a hackathon
    async fn dismissed_ids(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<HashSet<CalendarEventId>>;
}
