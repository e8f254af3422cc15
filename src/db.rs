//! PostgreSQL connection pool construction

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseSection;
use crate::error::Result;

/// Open the connection pool and verify the database is reachable.
///
/// Any failure here is fatal to startup: the caller must not begin serving
/// traffic without a verified pool. The contract for a future persistence
/// layer is acquire-use-release per request, never holding a connection
/// across requests.
pub async fn connect(config: &DatabaseSection) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    // Liveness check before the listener is bound
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
