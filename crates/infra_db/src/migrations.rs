//! Schema migrations
//!
//! SQL files under `crates/infra_db/migrations` are embedded at compile
//! time and applied in filename order.

use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

/// Applies any pending migrations
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
