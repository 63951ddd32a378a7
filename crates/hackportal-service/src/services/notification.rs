//! Notification service - one feed over every notice source

use chrono::{DateTime, Utc};
use hackportal_core::{Banner, CustomBanner, HackathonId, ParticipantId};
use tracing::{debug, instrument};

use super::banner::BannerService;
use super::calendar::{CalendarEntry, CalendarService};
use super::context::ServiceContext;
use super::custom_banner::CustomBannerService;
use super::error::ServiceResult;

/// Everything a participant should currently see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationFeed {
    pub banners: Vec<Banner>,
    pub custom_banners: Vec<CustomBanner>,
    pub next_event: Option<CalendarEntry>,
}

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the feed. The participant is loaded once; a failure in any
    /// source fails the whole feed.
    #[instrument(skip(self))]
    pub async fn feed(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        now: DateTime<Utc>,
    ) -> ServiceResult<NotificationFeed> {
        let banner_service = BannerService::new(self.ctx);
        let participant = banner_service.load_snapshot(participant_id).await?;

        let banners = banner_service
            .get_active_banners(participant_id, hackathon_id, &participant)
            .await?;

        let custom_banners = CustomBannerService::new(self.ctx)
            .active_for_participant(participant_id, hackathon_id, now)
            .await?;

        let team_id = participant.any_team().map(|team| team.id.clone());
        let next_event = CalendarService::new(self.ctx)
            .next_upcoming(participant_id, hackathon_id, team_id.as_ref(), now)
            .await?;

        debug!(
            banners = banners.len(),
            custom_banners = custom_banners.len(),
            has_next_event = next_event.is_some(),
            "Notification feed built"
        );

        Ok(NotificationFeed {
            banners,
            custom_banners,
            next_event,
        })
    }
}
