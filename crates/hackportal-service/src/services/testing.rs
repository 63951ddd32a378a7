//! In-memory repository doubles for service tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hackportal_common::JwtService;
use hackportal_core::traits::{
    CalendarEventRepository, CustomBannerRepository, DismissedBannerRepository,
    ParticipantRepository, RepoResult,
};
use hackportal_core::{
    BannerType, CalendarEvent, CalendarEventDismissal, CalendarEventId, CustomBanner,
    CustomBannerDismissal, CustomBannerId, DismissedBanner, DomainError, HackathonId,
    ParticipantId, ParticipantSnapshot, TeamId,
};

use super::context::{ServiceContext, ServiceContextBuilder};

type DismissalKey = (ParticipantId, HackathonId, BannerType);

#[derive(Default)]
struct Tables {
    participants: HashMap<ParticipantId, ParticipantSnapshot>,
    dismissed: HashMap<DismissalKey, DismissedBanner>,
    custom_banners: Vec<CustomBanner>,
    custom_dismissals: HashMap<(CustomBannerId, ParticipantId, HackathonId), CustomBannerDismissal>,
    events: Vec<CalendarEvent>,
    event_dismissals: HashMap<(CalendarEventId, ParticipantId, HackathonId), CalendarEventDismissal>,
}

/// One shared store backing all four repository traits
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Make every subsequent call fail with a storage error
    pub fn fail_storage(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn add_participant(&self, snapshot: ParticipantSnapshot) {
        self.lock().participants.insert(snapshot.id.clone(), snapshot);
    }

    pub fn add_custom_banner(&self, banner: CustomBanner) {
        self.lock().custom_banners.push(banner);
    }

    pub fn add_event(&self, event: CalendarEvent) {
        self.lock().events.push(event);
    }

    pub fn dismissal_count(&self) -> usize {
        self.lock().dismissed.len()
    }

    pub fn dismissed_at(&self, key: &DismissalKey) -> Option<DateTime<Utc>> {
        self.lock().dismissed.get(key).map(|d| d.dismissed_at)
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContextBuilder::new()
            .participant_repo(Arc::new(self.clone()))
            .dismissed_banner_repo(Arc::new(self.clone()))
            .custom_banner_repo(Arc::new(self.clone()))
            .calendar_event_repo(Arc::new(self.clone()))
            .jwt_service(Arc::new(JwtService::new("service-test-secret", 60)))
            .build()
            .unwrap()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    fn check(&self) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryStore {
    async fn find_snapshot(&self, id: &ParticipantId) -> RepoResult<Option<ParticipantSnapshot>> {
        self.check()?;
        Ok(self.lock().participants.get(id).cloned())
    }
}

#[async_trait]
impl DismissedBannerRepository for InMemoryStore {
    async fn list_types(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<HashSet<BannerType>> {
        self.check()?;
        Ok(self
            .lock()
            .dismissed
            .keys()
            .filter(|(p, h, _)| p == participant_id && h == hackathon_id)
            .map(|(_, _, t)| t.clone())
            .collect())
    }

    async fn find(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        banner_type: &BannerType,
    ) -> RepoResult<Option<DismissedBanner>> {
        self.check()?;
        let key = (participant_id.clone(), hackathon_id.clone(), banner_type.clone());
        Ok(self.lock().dismissed.get(&key).cloned())
    }

    async fn upsert(&self, dismissal: &DismissedBanner) -> RepoResult<()> {
        self.check()?;
        let key = (
            dismissal.participant_id.clone(),
            dismissal.hackathon_id.clone(),
            dismissal.banner_type.clone(),
        );
        self.lock().dismissed.insert(key, dismissal.clone());
        Ok(())
    }
}

#[async_trait]
impl CustomBannerRepository for InMemoryStore {
    async fn find_by_id(&self, id: &CustomBannerId) -> RepoResult<Option<CustomBanner>> {
        self.check()?;
        Ok(self.lock().custom_banners.iter().find(|b| &b.id == id).cloned())
    }

    async fn find_by_hackathon(&self, hackathon_id: &HackathonId) -> RepoResult<Vec<CustomBanner>> {
        self.check()?;
        let mut banners: Vec<_> = self
            .lock()
            .custom_banners
            .iter()
            .filter(|b| &b.hackathon_id == hackathon_id)
            .cloned()
            .collect();
        banners.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(banners)
    }

    async fn find_visible(
        &self,
        hackathon_id: &HackathonId,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<CustomBanner>> {
        let banners = CustomBannerRepository::find_by_hackathon(self, hackathon_id).await?;
        Ok(banners.into_iter().filter(|b| b.is_visible_at(now)).collect())
    }

    async fn create(&self, banner: &CustomBanner) -> RepoResult<()> {
        self.check()?;
        self.lock().custom_banners.push(banner.clone());
        Ok(())
    }

    async fn update(&self, banner: &CustomBanner) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.lock();
        let slot = tables
            .custom_banners
            .iter_mut()
            .find(|b| b.id == banner.id)
            .ok_or_else(|| DomainError::CustomBannerNotFound(banner.id.clone()))?;
        *slot = banner.clone();
        Ok(())
    }

    async fn delete(&self, id: &CustomBannerId) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.lock();
        let before = tables.custom_banners.len();
        tables.custom_banners.retain(|b| &b.id != id);
        if tables.custom_banners.len() == before {
            return Err(DomainError::CustomBannerNotFound(id.clone()));
        }
        tables.custom_dismissals.retain(|(b, _, _), _| b != id);
        Ok(())
    }

    async fn upsert_dismissal(&self, dismissal: &CustomBannerDismissal) -> RepoResult<()> {
        self.check()?;
        let key = (
            dismissal.custom_banner_id.clone(),
            dismissal.participant_id.clone(),
            dismissal.hackathon_id.clone(),
        );
        self.lock().custom_dismissals.insert(key, dismissal.clone());
        Ok(())
    }

    async fn dismissed_ids(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<HashSet<CustomBannerId>> {
        self.check()?;
        Ok(self
            .lock()
            .custom_dismissals
            .keys()
            .filter(|(_, p, h)| p == participant_id && h == hackathon_id)
            .map(|(b, _, _)| b.clone())
            .collect())
    }
}

#[async_trait]
impl CalendarEventRepository for InMemoryStore {
    async fn find_by_id(&self, id: &CalendarEventId) -> RepoResult<Option<CalendarEvent>> {
        self.check()?;
        Ok(self.lock().events.iter().find(|e| &e.id == id).cloned())
    }

    async fn find_for_team(
        &self,
        hackathon_id: &HackathonId,
        team_id: Option<&TeamId>,
    ) -> RepoResult<Vec<CalendarEvent>> {
        self.check()?;
        let mut events: Vec<_> = self
            .lock()
            .events
            .iter()
            .filter(|e| &e.hackathon_id == hackathon_id && e.is_active)
            .filter(|e| e.is_global() || e.team_id.as_ref() == team_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.event_date);
        Ok(events)
    }

    async fn find_by_hackathon(
        &self,
        hackathon_id: &HackathonId,
        include_inactive: bool,
    ) -> RepoResult<Vec<CalendarEvent>> {
        self.check()?;
        let mut events: Vec<_> = self
            .lock()
            .events
            .iter()
            .filter(|e| &e.hackathon_id == hackathon_id && (include_inactive || e.is_active))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.event_date);
        Ok(events)
    }

    async fn create(&self, event: &CalendarEvent) -> RepoResult<()> {
        self.check()?;
        self.lock().events.push(event.clone());
        Ok(())
    }

    async fn update(&self, event: &CalendarEvent) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.lock();
        let slot = tables
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| DomainError::CalendarEventNotFound(event.id.clone()))?;
        *slot = event.clone();
        Ok(())
    }

    async fn delete(&self, id: &CalendarEventId) -> RepoResult<()> {
        self.check()?;
        let mut tables = self.lock();
        let before = tables.events.len();
        tables.events.retain(|e| &e.id != id);
        if tables.events.len() == before {
            return Err(DomainError::CalendarEventNotFound(id.clone()));
        }
        tables.event_dismissals.retain(|(e, _, _), _| e != id);
        Ok(())
    }

    async fn upsert_dismissal(&self, dismissal: &CalendarEventDismissal) -> RepoResult<()> {
        self.check()?;
        let key = (
            dismissal.event_id.clone(),
            dismissal.participant_id.clone(),
            dismissal.hackathon_id.clone(),
        );
        self.lock().event_dismissals.insert(key, dismissal.clone());
        Ok(())
    }

    async fn delete_dismissal(
        &self,
        event_id: &CalendarEventId,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<()> {
        self.check()?;
        let key = (event_id.clone(), participant_id.clone(), hackathon_id.clone());
        self.lock().event_dismissals.remove(&key);
        Ok(())
    }

    async fn dismissed_ids(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<HashSet<CalendarEventId>> {
        self.check()?;
        Ok(self
            .lock()
            .event_dismissals
            .keys()
            .filter(|(_, p, h)| p == participant_id && h == hackathon_id)
            .map(|(e, _, _)| e.clone())
            .collect())
    }
}
