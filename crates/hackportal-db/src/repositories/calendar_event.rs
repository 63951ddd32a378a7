//! PostgreSQL implementation of CalendarEventRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hackportal_core::traits::{CalendarEventRepository, RepoResult};
use hackportal_core::{
    CalendarEvent, CalendarEventDismissal, CalendarEventId, DomainError, HackathonId,
    ParticipantId, TeamId,
};

use crate::models::CalendarEventModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CalendarEventRepository
#[derive(Clone)]
pub struct PgCalendarEventRepository {
    pool: PgPool,
}

impl PgCalendarEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarEventRepository for PgCalendarEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &CalendarEventId) -> RepoResult<Option<CalendarEvent>> {
        let result = sqlx::query_as::<_, CalendarEventModel>(
            r#"
            SELECT id, hackathon_id, title, description, event_date, event_end_date,
                   link, event_type, team_id, is_active, created_at
            FROM calendar_events
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(CalendarEvent::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_for_team(
        &self,
        hackathon_id: &HackathonId,
        team_id: Option<&TeamId>,
    ) -> RepoResult<Vec<CalendarEvent>> {
        // A NULL $2 makes the team branch match nothing
        let results = sqlx::query_as::<_, CalendarEventModel>(
            r#"
            SELECT id, hackathon_id, title, description, event_date, event_end_date,
                   link, event_type, team_id, is_active, created_at
            FROM calendar_events
            WHERE hackathon_id = $1
              AND is_active = TRUE
              AND (team_id IS NULL OR team_id = $2)
            ORDER BY event_date ASC
            "#,
        )
        .bind(hackathon_id.as_str())
        .bind(team_id.map(TeamId::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(CalendarEvent::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_hackathon(
        &self,
        hackathon_id: &HackathonId,
        include_inactive: bool,
    ) -> RepoResult<Vec<CalendarEvent>> {
        let results = sqlx::query_as::<_, CalendarEventModel>(
            r#"
            SELECT id, hackathon_id, title, description, event_date, event_end_date,
                   link, event_type, team_id, is_active, created_at
            FROM calendar_events
            WHERE hackathon_id = $1
              AND ($2 OR is_active = TRUE)
            ORDER BY event_date ASC
            "#,
        )
        .bind(hackathon_id.as_str())
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(CalendarEvent::try_from).collect()
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn create(&self, event: &CalendarEvent) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO calendar_events (
                id, hackathon_id, title, description, event_date, event_end_date,
                link, event_type, team_id, is_active, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(event.id.as_str())
        .bind(event.hackathon_id.as_str())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_date)
        .bind(event.event_end_date)
        .bind(event.link.as_deref())
        .bind(event.event_type.as_str())
        .bind(event.team_id.as_ref().map(TeamId::as_str))
        .bind(event.is_active)
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, event), fields(event_id = %event.id))]
    async fn update(&self, event: &CalendarEvent) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE calendar_events
            SET title = $2,
                description = $3,
                event_date = $4,
                event_end_date = $5,
                link = $6,
                event_type = $7,
                team_id = $8,
                is_active = $9
            WHERE id = $1
            "#,
        )
        .bind(event.id.as_str())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_date)
        .bind(event.event_end_date)
        .bind(event.link.as_deref())
        .bind(event.event_type.as_str())
        .bind(event.team_id.as_ref().map(TeamId::as_str))
        .bind(event.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CalendarEventNotFound(event.id.clone()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &CalendarEventId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            DELETE FROM calendar_event_dismissals WHERE event_id = $1
            "#,
        )
        .bind(id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            DELETE FROM calendar_events WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CalendarEventNotFound(id.clone()));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn upsert_dismissal(&self, dismissal: &CalendarEventDismissal) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO calendar_event_dismissals (event_id, participant_id, hackathon_id, dismissed_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (event_id, participant_id, hackathon_id)
            DO UPDATE SET dismissed_at = EXCLUDED.dismissed_at
            "#,
        )
        .bind(dismissal.event_id.as_str())
        .bind(dismissal.participant_id.as_str())
        .bind(dismissal.hackathon_id.as_str())
        .bind(dismissal.dismissed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_dismissal(
        &self,
        event_id: &CalendarEventId,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM calendar_event_dismissals
            WHERE event_id = $1 AND participant_id = $2 AND hackathon_id = $3
            "#,
        )
        .bind(event_id.as_str())
        .bind(participant_id.as_str())
        .bind(hackathon_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn dismissed_ids(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<HashSet<CalendarEventId>> {
        let ids = sqlx::query_scalar::<_, String>(
            r#"
            SELECT event_id
            FROM calendar_event_dismissals
            WHERE participant_id = $1 AND hackathon_id = $2
            "#,
        )
        .bind(participant_id.as_str())
        .bind(hackathon_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(CalendarEventId::new).collect())
    }
}
