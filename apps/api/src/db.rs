use std::time::Duration;

use anyhow::{bail, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Tables the service reads and writes. Owned by the job board's data store.
const REQUIRED_TABLES: &[&str] = &["jobs", "applications"];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established ({max_connections} max connections)");
    Ok(pool)
}

/// Fails startup if the job board tables are not visible to this role.
pub async fn check_schema(pool: &PgPool) -> Result<()> {
    let mut missing = Vec::new();
    for table in REQUIRED_TABLES {
        let found: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
        )
        .bind(*table)
        .fetch_one(pool)
        .await?;
        if !found {
            missing.push(*table);
        }
    }

    if !missing.is_empty() {
        bail!("Missing database tables: {}", missing.join(", "));
    }
    info!("Database schema check passed");
    Ok(())
}
