//! Bundled schema for the notification tables

use sqlx::PgPool;
use tracing::info;

/// DDL for every table this crate reads or writes. Idempotent.
pub const SCHEMA: &str = include_str!("../migrations/0001_notifications.sql");

/// Create missing tables and indexes
///
/// # Errors
/// Returns an error if any statement fails
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Notification schema applied");
    Ok(())
}
