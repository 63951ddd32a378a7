//! PostgreSQL implementation of DismissedBannerRepository

use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hackportal_core::traits::{DismissedBannerRepository, RepoResult};
use hackportal_core::{BannerType, DismissedBanner, HackathonId, ParticipantId};

use crate::models::DismissedBannerModel;

use super::error::map_db_error;

/// PostgreSQL implementation of DismissedBannerRepository
#[derive(Clone)]
pub struct PgDismissedBannerRepository {
    pool: PgPool,
}

impl PgDismissedBannerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DismissedBannerRepository for PgDismissedBannerRepository {
    #[instrument(skip(self))]
    async fn list_types(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
    ) -> RepoResult<HashSet<BannerType>> {
        let types = sqlx::query_scalar::<_, String>(
            r#"
            SELECT banner_type
            FROM dismissed_banners
            WHERE participant_id = $1 AND hackathon_id = $2
            "#,
        )
        .bind(participant_id.as_str())
        .bind(hackathon_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(types.into_iter().map(BannerType::from).collect())
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        participant_id: &ParticipantId,
        hackathon_id: &HackathonId,
        banner_type: &BannerType,
    ) -> RepoResult<Option<DismissedBanner>> {
        let result = sqlx::query_as::<_, DismissedBannerModel>(
            r#"
            SELECT participant_id, banner_type, hackathon_id, dismissed_at
            FROM dismissed_banners
            WHERE participant_id = $1 AND hackathon_id = $2 AND banner_type = $3
            "#,
        )
        .bind(participant_id.as_str())
        .bind(hackathon_id.as_str())
        .bind(banner_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DismissedBanner::from))
    }

    #[instrument(skip(self), fields(banner_type = %dismissal.banner_type))]
    async fn upsert(&self, dismissal: &DismissedBanner) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO dismissed_banners (participant_id, banner_type, hackathon_id, dismissed_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (participant_id, banner_type, hackathon_id)
            DO UPDATE SET dismissed_at = EXCLUDED.dismissed_at
            "#,
        )
        .bind(dismissal.participant_id.as_str())
        .bind(dismissal.banner_type.as_str())
        .bind(dismissal.hackathon_id.as_str())
        .bind(dismissal.dismissed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
