//! # hackportal-db
//!
//! PostgreSQL implementations of the repository traits defined in `hackportal-core`.
//!
//! - Connection pool management
//! - Row models with SQLx `FromRow` derives
//! - Row to entity mappers
//! - Repository implementations
//! - The bundled schema (`migrations/`)
//!
//! ```rust,ignore
//! use hackportal_db::{create_pool, PoolConfig, PgDismissedBannerRepository};
//!
//! let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//! let dismissals = PgDismissedBannerRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    PgCalendarEventRepository, PgCustomBannerRepository, PgDismissedBannerRepository,
    PgParticipantRepository,
};
pub use schema::apply_schema;
