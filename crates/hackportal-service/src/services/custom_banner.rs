//! Custom banner service
//!
//! Organizer CRUD over operator-authored banners, and the participant-side
//! view: visible banners minus the ones the participant dismissed.

use chrono::{DateTime, Utc};
use hackportal_core::{
    CustomBanner, CustomBannerDismissal, CustomBannerId, DomainError, HackathonId, ParticipantId,
};
use tracing::{info, instrument};

use crate::dto::{CreateCustomBannerRequest, UpdateCustomBannerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Custom banner service
pub struct CustomBannerService<'a> {
    ctx: &'a ServiceContext,
}

/// Trimmed, non-blank text or a validation error naming the field
pub(super) fn required_text(field: &str, value: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text is stored as absent
pub(super) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<'a> CustomBannerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Banners of a hackathon, newest first; `active_only` keeps those visible at `now`
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        hackathon_id: &HackathonId,
        active_only: bool,
        now: DateTime<Utc>,
    ) -> ServiceResult<Vec<CustomBanner>> {
        let repo = self.ctx.custom_banner_repo();
        let banners = if active_only {
            repo.find_visible(hackathon_id, now).await?
        } else {
            repo.find_by_hackathon(hackathon_id).await?
        };
        Ok(banners)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, banner_id: &CustomBannerId) -> ServiceResult<CustomBanner> {
        self.ctx
            .custom_banner_repo()
            .find_by_id(banner_id)
            .await?
            .ok_or_else(|| DomainError::CustomBannerNotFound(banner_id.clone()).into())
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        hackathon_id: &HackathonId,
        request: CreateCustomBannerRequest,
    ) -> ServiceResult<CustomBanner> {
        let mut banner = CustomBanner::new(
            hackathon_id.clone(),
            required_text("title", &request.title)?,
            required_text("description", &request.description)?,
            request.banner_type,
            request.display_start,
            request.display_end,
        );
        if !banner.has_valid_window() {
            return Err(DomainError::InvalidDisplayWindow.into());
        }
        banner.allow_dismiss = request.allow_dismiss;
        banner.is_active = request.is_active;
        banner.action_text = optional_text(request.action_text);
        banner.action_url = optional_text(request.action_url);

        self.ctx.custom_banner_repo().create(&banner).await?;

        info!(banner_id = %banner.id, hackathon_id = %hackathon_id, "Custom banner created");

        Ok(banner)
    }

    /// Apply a partial update; the resulting window must still be well-formed
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        banner_id: &CustomBannerId,
        request: UpdateCustomBannerRequest,
    ) -> ServiceResult<CustomBanner> {
        let mut banner = self.get(banner_id).await?;

        if let Some(title) = request.title {
            banner.title = required_text("title", &title)?;
        }
        if let Some(description) = request.description {
            banner.description = required_text("description", &description)?;
        }
        if let Some(banner_type) = request.banner_type {
            banner.banner_type = banner_type;
        }
        if let Some(start) = request.display_start {
            banner.display_start = start;
        }
        if let Some(end) = request.display_end {
            banner.display_end = end;
        }
        if let Some(allow_dismiss) = request.allow_dismiss {
            banner.allow_dismiss = allow_dismiss;
        }
        if request.action_text.is_some() {
            banner.action_text = optional_text(request.action_text);
        }
        if request.action_url.is_some() {
            banner.action_url = optional_text(request.action_url);
        }
        if let Some(is_active) = request.is_active {
            banner.is_active = is_active;
        }

        if !banner.has_valid_window() {
            return Err(DomainError::InvalidDisplayWindow.into());
        }

        banner.touch();
        self.ctx.custom_banner_repo().update(&banner).await?;

        info!(banner_id = %banner.id, "Custom banner updated");

        Ok(banner)
    }

    /// Delete a banner and every dismissal of it
    #[instrument(skip(self))]
    pub async fn delete(&self, banner_id: &CustomBannerId) -> ServiceResult<()> {
        self.ctx.custom_banner_repo().delete(banner_id).await?;

        info!(banner_id = %banner_id, "Custom banner deleted");

        Ok(())
    }

    /// Participant closes a banner. Idempotent.
    ///
    /// # Errors
    /// - `UNKNOWN_CUSTOM_BANNER` if the banner does not exist in this hackathon
    /// - `BANNER_NOT_DISMISSIBLE` if the organizer disabled dismissal
    #[instrument(skip(self))]
    pub async fn dismiss(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        banner_id: &CustomBannerId,
    ) -> ServiceResult<()> {
        let banner = self.get(banner_id).await?;
        if &banner.hackathon_id != hackathon_id {
            return Err(DomainError::CustomBannerNotFound(banner_id.clone()).into());
        }
        if !banner.allow_dismiss {
            return Err(DomainError::BannerNotDismissible.into());
        }

        let dismissal =
            CustomBannerDismissal::new(banner_id.clone(), participant_id.clone(), hackathon_id.clone());
        self.ctx.custom_banner_repo().upsert_dismissal(&dismissal).await?;

        info!(
            participant_id = %participant_id,
            banner_id = %banner_id,
            "Custom banner dismissed"
        );

        Ok(())
    }

    /// Banners visible at `now` that the participant has not dismissed, newest first
    #[instrument(skip(self))]
    pub async fn active_for_participant(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        now: DateTime<Utc>,
    ) -> ServiceResult<Vec<CustomBanner>> {
        let repo = self.ctx.custom_banner_repo();
        let visible = repo.find_visible(hackathon_id, now).await?;
        let dismissed = repo.dismissed_ids(participant_id, hackathon_id).await?;

        Ok(visible
            .into_iter()
            .filter(|banner| !dismissed.contains(&banner.id))
            .collect())
    }
}
