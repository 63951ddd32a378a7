//! PostgreSQL implementation of CustomBannerRepository

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use hackportal_core::traits::{CustomBannerRepository, RepoResult};
use hackportal_core::{
    CustomBanner, CustomBannerDismissal, CustomBannerId, DomainError, HackathonId, ParticipantId,
};

use crate::models::CustomBannerModel;

use super::error::map_db_error;

const SELECT_COLUMNS: &str = r#"
    SELECT id, hackathon_id, title, description, banner_type, display_start, display_end,
           allow_dismiss, action_text, action_url, is_active, created_at, updated_at
    FROM custom_banners
"#;

/// PostgreSQL implementation of CustomBannerRepository
#[derive(Clone)]
pub struct PgCustomBannerRepository {
    pool: PgPool,
}

impl PgCustomBannerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_entities(models: Vec<CustomBannerModel>) -> RepoResult<Vec<CustomBanner>> {
    models.into_iter().map(CustomBanner::try_from).collect()
}

#[async_trait]
impl CustomBannerRepository for PgCustomBannerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &CustomBannerId) -> RepoResult<Option<CustomBanner>> {
        let query = format!("{SELECT_COLUMNS} WHERE id = $1");
        let result = sqlx::query_as::<_, CustomBannerModel>(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(CustomBanner::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_hackathon(&self, hackathon_id: &HackathonId) -> RepoResult<Vec<CustomBanner>> {
        let query = format!("{SELECT_COLUMNS} WHERE hackathon_id = $1 ORDER BY created_at DESC");
        let results = sqlx::query_as::<_, CustomBannerModel>(&query)
            .bind(hackathon_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_entities(results)
    }

    #[instrument(skip(self))]
    async fn find_visible(
        &self,
        hackathon_id: &HackathonId,
        now: DateTime<Utc>,
    ) -> RepoResult<Vec<CustomBanner>> {
        let query = format!(
            "{SELECT_COLUMNS}
             WHERE hackathon_id = $1
               AND is_active = TRUE
               AND display_start <= $2
               AND display_end >= $2
             ORDER BY created_at DESC"
        );
        let results = sqlx::query_as::<_, CustomBannerModel>(&query)
            .bind(hackathon_id.as_str())
            .bind(now)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        into_entities(results)
    }

    #[instrument(skip(self, banner), fields(banner_id = %banner.id))]
    async fn create(&self, banner: &CustomBanner) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO custom_banners (
                id, hackathon_id, title, description, banner_type, display_start, display_end,
                allow_dismiss, action_text, action_url, is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(banner.id.as_str())
        .bind(banner.hackathon_id.as_str())
        .bind(&banner.title)
        .bind(&banner.description)
        .bind(banner.banner_type.as_str())
        .bind(banner.display_start)
        .bind(banner.display_end)
        .bind(banner.allow_dismiss)
        .bind(banner.action_text.as_deref())
        .bind(banner.action_url.as_deref())
        .bind(banner.is_active)
        .bind(banner.created_at)
        .bind(banner.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, banner), fields(banner_id = %banner.id))]
    async fn update(&self, banner: &CustomBanner) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE custom_banners
            SET title = $2,
                description = $3,
                banner_type = $4,
                display_start = $5,
                display_end = $6,
                allow_dismiss = $7,
                action_text = $8,
                action_url = $9,
                is_active = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(banner.id.as_str())
        .bind(&banner.title)
        .bind(&banner.description)
        .bind(banner.banner_type.as_str())
        .bind(banner.display_start)
        .bind(banner.display_end)
        .bind(banner.allow_dismiss)
        .bind(banner.action_text.as_deref())
        .bind(banner.action_url.as_deref())
        .bind(banner.is_active)
        .bind(banner.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CustomBannerNotFound(banner.id.clone()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &CustomBannerId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            DELETE FROM custom_banner_dismissals WHERE custom_banner_id = $1
            "#,
        )
        .bind(id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            DELETE FROM custom_banners WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CustomBannerNotFound(id.clone()));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn upsert_dismissal(&self, dismissal: &CustomBannerDismissal) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO custom_banner_dismissals (custom_banner_id, participant_id, hackathon_id, dismissed_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (custom_banner_id, participant_id, hackathon_id)
            DO UPDATE SET dismissed_at = EXCLUDED.dismissed_at
            "#,
        )
        .bind(dismissal.custom_banner_id.as_str())
        .bind(dismissal.participant_id.as_str())
        .bind(dismissal.hackathon_id.as_str())
        .bind(dismissal.dismissed_at)
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
    ) -> RepoResult<HashSet<CustomBannerId>> {
        let ids = sqlx::query_scalar::<_, String>(
            r#"
            SELECT custom_banner_id
            FROM custom_banner_dismissals
            WHERE participant_id = $1 AND hackathon_id = $2
            "#,
        )
        .bind(participant_id.as_str())
        .bind(hackathon_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(CustomBannerId::new).collect())
    }
}
