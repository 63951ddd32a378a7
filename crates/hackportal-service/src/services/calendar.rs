//! Calendar service - scheduled events surfaced as dismissible notices
//!
//! Organizers author the events; participants see the global ones plus
//! their team's, and may hide or restore each one.

use chrono::{DateTime, Utc};
use hackportal_core::{
    CalendarEvent, CalendarEventDismissal, CalendarEventId, DomainError, HackathonId,
    ParticipantId, TeamId,
};
use tracing::{info, instrument};

use crate::dto::{CreateCalendarEventRequest, UpdateCalendarEventRequest};

use super::banner::BannerService;
use super::context::ServiceContext;
use super::custom_banner::{optional_text, required_text};
use super::error::ServiceResult;

/// A calendar event as seen by one participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub event: CalendarEvent,
    pub is_dismissed: bool,
}

/// Calendar service
pub struct CalendarService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CalendarService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every event of a hackathon, earliest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        hackathon_id: &HackathonId,
        include_inactive: bool,
    ) -> ServiceResult<Vec<CalendarEvent>> {
        Ok(self
            .ctx
            .calendar_event_repo()
            .find_by_hackathon(hackathon_id, include_inactive)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, event_id: &CalendarEventId) -> ServiceResult<CalendarEvent> {
        self.ctx
            .calendar_event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::CalendarEventNotFound(event_id.clone()).into())
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        hackathon_id: &HackathonId,
        request: CreateCalendarEventRequest,
    ) -> ServiceResult<CalendarEvent> {
        let mut event = CalendarEvent::new(
            hackathon_id.clone(),
            required_text("title", &request.title)?,
            required_text("description", &request.description)?,
            request.event_date,
        );
        event.event_end_date = request.event_end_date;
        event.link = optional_text(request.link);
        event.event_type = request.event_type;
        event.team_id = optional_text(request.team_id).map(TeamId::new);
        event.is_active = request.is_active;

        if !event.has_valid_range() {
            return Err(DomainError::InvalidEventRange.into());
        }

        self.ctx.calendar_event_repo().create(&event).await?;

        info!(
            event_id = %event.id,
            hackathon_id = %hackathon_id,
            team_id = ?event.team_id,
            "Calendar event created"
        );

        Ok(event)
    }

    /// Apply a partial update; the resulting range must still be well-formed
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        event_id: &CalendarEventId,
        request: UpdateCalendarEventRequest,
    ) -> ServiceResult<CalendarEvent> {
        let mut event = self.get(event_id).await?;

        if let Some(title) = request.title {
            event.title = required_text("title", &title)?;
        }
        if let Some(description) = request.description {
            event.description = required_text("description", &description)?;
        }
        if let Some(date) = request.event_date {
            event.event_date = date;
        }
        if let Some(end) = request.event_end_date {
            event.event_end_date = end;
        }
        if let Some(link) = request.link {
            event.link = optional_text(link);
        }
        if let Some(event_type) = request.event_type {
            event.event_type = event_type;
        }
        if let Some(team_id) = request.team_id {
            event.team_id = optional_text(team_id).map(TeamId::new);
        }
        if let Some(is_active) = request.is_active {
            event.is_active = is_active;
        }

        if !event.has_valid_range() {
            return Err(DomainError::InvalidEventRange.into());
        }

        self.ctx.calendar_event_repo().update(&event).await?;

        info!(event_id = %event.id, "Calendar event updated");

        Ok(event)
    }

    /// Delete an event and every dismissal of it
    #[instrument(skip(self))]
    pub async fn delete(&self, event_id: &CalendarEventId) -> ServiceResult<()> {
        self.ctx.calendar_event_repo().delete(event_id).await?;

        info!(event_id = %event_id, "Calendar event deleted");

        Ok(())
    }

    /// Active global events plus the team's own, earliest first
    #[instrument(skip(self))]
    pub async fn list_for_participant(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        team_id: Option<&TeamId>,
    ) -> ServiceResult<Vec<CalendarEntry>> {
        let repo = self.ctx.calendar_event_repo();
        let events = repo.find_for_team(hackathon_id, team_id).await?;
        let dismissed = repo.dismissed_ids(participant_id, hackathon_id).await?;

        Ok(events
            .into_iter()
            .map(|event| CalendarEntry {
                is_dismissed: dismissed.contains(&event.id),
                event,
            })
            .collect())
    }

    /// Resolve the participant's team, then list their events
    #[instrument(skip(self))]
    pub async fn events_for_participant(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> ServiceResult<Vec<CalendarEntry>> {
        let participant = BannerService::new(self.ctx)
            .load_snapshot(participant_id)
            .await?;
        let team_id = participant.any_team().map(|team| team.id.clone());

        self.list_for_participant(participant_id, hackathon_id, team_id.as_ref())
            .await
    }

    /// The first event starting at or after `now` that is not dismissed
    #[instrument(skip(self))]
    pub async fn next_upcoming(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        team_id: Option<&TeamId>,
        now: DateTime<Utc>,
    ) -> ServiceResult<Option<CalendarEntry>> {
        let entries = self
            .list_for_participant(participant_id, hackathon_id, team_id)
            .await?;

        Ok(entries
            .into_iter()
            .find(|entry| !entry.is_dismissed && entry.event.is_upcoming(now)))
    }

    /// Hide an event for the participant. Idempotent.
    #[instrument(skip(self))]
    pub async fn dismiss(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        event_id: &CalendarEventId,
    ) -> ServiceResult<()> {
        let repo = self.ctx.calendar_event_repo();
        let event = repo
            .find_by_id(event_id)
            .await?
            .filter(|event| &event.hackathon_id == hackathon_id)
            .ok_or_else(|| DomainError::CalendarEventNotFound(event_id.clone()))?;

        let dismissal =
            CalendarEventDismissal::new(event.id, participant_id.clone(), hackathon_id.clone());
        repo.upsert_dismissal(&dismissal).await?;

        info!(
            participant_id = %participant_id,
            event_id = %event_id,
            "Calendar event dismissed"
        );

        Ok(())
    }

    /// Show a dismissed event again; succeeds when nothing was dismissed
    #[instrument(skip(self))]
    pub async fn undismiss(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        event_id: &CalendarEventId,
    ) -> ServiceResult<()> {
        self.ctx
            .calendar_event_repo()
            .delete_dismissal(event_id, participant_id, hackathon_id)
            .await?;

        info!(
            participant_id = %participant_id,
            event_id = %event_id,
            "Calendar event restored"
        );

        Ok(())
    }
}
