//! PostgreSQL implementation of ParticipantRepository
//!
//! Reads the portal's participants and teams tables; never writes them.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hackportal_core::traits::{ParticipantRepository, RepoResult};
use hackportal_core::{ParticipantId, ParticipantSnapshot, TeamSnapshot};

use crate::mappers::team_snapshot;
use crate::models::{ParticipantModel, TeamModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_members(&self, team: TeamModel) -> RepoResult<TeamSnapshot> {
        let members = sqlx::query_scalar::<_, String>(
            r#"
            SELECT id FROM participants WHERE team_id = $1 ORDER BY id
            "#,
        )
        .bind(&team.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        team_snapshot(team, members)
    }

    async fn team_by_id(&self, team_id: &str) -> RepoResult<Option<TeamSnapshot>> {
        let team = sqlx::query_as::<_, TeamModel>(
            r#"
            SELECT id, name, level FROM teams WHERE id = $1
            "#,
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match team {
            Some(team) => self.with_members(team).await.map(Some),
            None => Ok(None),
        }
    }

    async fn team_led_by(&self, leader_id: &str) -> RepoResult<Option<TeamSnapshot>> {
        let team = sqlx::query_as::<_, TeamModel>(
            r#"
            SELECT id, name, level FROM teams WHERE leader_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(leader_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match team {
            Some(team) => self.with_members(team).await.map(Some),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn find_snapshot(&self, id: &ParticipantId) -> RepoResult<Option<ParticipantSnapshot>> {
        let row = sqlx::query_as::<_, ParticipantModel>(
            r#"
            SELECT id, telegram, github_url, team_id
            FROM participants
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let team = match row.team_id.as_deref() {
            Some(team_id) => self.team_by_id(team_id).await?,
            None => None,
        };
        let led_team = self.team_led_by(&row.id).await?;

        Ok(Some(ParticipantSnapshot {
            id: ParticipantId::new(row.id),
            telegram_handle: row.telegram,
            github_url: row.github_url,
            team,
            led_team,
        }))
    }
}
