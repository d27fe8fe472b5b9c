//! Database Connection Management
//!
//! The pool is built once at start-up and handed to the repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::DatabaseConfig;

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns a `sqlx::Error` if the first connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}

/// Apply the embedded migrations
///
/// # Errors
///
/// Returns a `MigrateError` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
