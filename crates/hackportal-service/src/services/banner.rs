//! Banner service
//!
//! Combines the rule evaluator with the participant's dismissal records.
//! Storage failures propagate unchanged: a failed dismissal lookup never
//! degrades to "no banners".

use std::collections::HashSet;

use hackportal_core::rules;
use hackportal_core::{
    Banner, BannerType, DismissedBanner, DomainError, HackathonId, ParticipantId,
    ParticipantSnapshot,
};
use tracing::{debug, info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Banner service
pub struct BannerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BannerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Candidate banners for a snapshot, before dismissals are applied
    pub fn evaluate(&self, participant: &ParticipantSnapshot) -> Vec<Banner> {
        rules::evaluate(participant)
    }

    /// Load the state the rules run against
    ///
    /// # Errors
    /// `UNKNOWN_PARTICIPANT` if no such participant exists
    #[instrument(skip(self))]
    pub async fn load_snapshot(&self, participant_id: &ParticipantId) -> ServiceResult<ParticipantSnapshot> {
        self.ctx
            .participant_repo()
            .find_snapshot(participant_id)
            .await?
            .ok_or_else(|| DomainError::ParticipantNotFound(participant_id.clone()).into())
    }

    /// Banner types the participant dismissed within a hackathon
    #[instrument(skip(self))]
    pub async fn list_dismissed_types(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> ServiceResult<HashSet<BannerType>> {
        Ok(self
            .ctx
            .dismissed_banner_repo()
            .list_types(participant_id, hackathon_id)
            .await?)
    }

    /// Record a dismissal; repeating it only refreshes the timestamp.
    ///
    /// Any non-blank type is accepted, including ones no rule produces yet.
    #[instrument(skip(self))]
    pub async fn dismiss(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        banner_type: &str,
    ) -> ServiceResult<()> {
        let banner_type = banner_type.trim();
        if banner_type.is_empty() {
            return Err(ServiceError::validation("banner type is required"));
        }

        let dismissal = DismissedBanner::new(
            participant_id.clone(),
            hackathon_id.clone(),
            BannerType::from(banner_type),
        );
        self.ctx.dismissed_banner_repo().upsert(&dismissal).await?;

        info!(
            participant_id = %participant_id,
            hackathon_id = %hackathon_id,
            banner_type = %dismissal.banner_type,
            "Banner dismissed"
        );

        Ok(())
    }

    /// Evaluator output minus dismissed types, in rule order
    #[instrument(skip(self, participant))]
    pub async fn get_active_banners(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        participant: &ParticipantSnapshot,
    ) -> ServiceResult<Vec<Banner>> {
        let candidates = self.evaluate(participant);
        let dismissed = self.list_dismissed_types(participant_id, hackathon_id).await?;
        debug!(candidates = candidates.len(), dismissed = dismissed.len(), "Filtering banners");

        Ok(candidates
            .into_iter()
            .filter(|banner| !dismissed.contains(&banner.banner_type))
            .collect())
    }

    /// Load the participant, then compute their active banners
    #[instrument(skip(self))]
    pub async fn active_for_participant(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> ServiceResult<Vec<Banner>> {
        let participant = self.load_snapshot(participant_id).await?;
        self.get_active_banners(participant_id, hackathon_id, &participant)
            .await
    }
}
