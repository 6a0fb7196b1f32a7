use anyhow::{Context, Result};
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use std::str::FromStr;
use std::time::Duration;

pub mod auth;
pub mod messages;

const SCHEMAS: [(&str, &str); 2] = [
    ("mensagens", include_str!("messages/schema.sql")),
    ("usuarios", include_str!("auth/schema.sql")),
];

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Opens the pool. An in-memory database lives only as long as its connection,
/// so it gets exactly one connection that is never recycled.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", database_url))?
        .create_if_missing(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    pool_options
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(table)
    .fetch_one(pool)
    .await
    .with_context(|| format!("Failed to look up table '{}'", table))?;

    Ok(count > 0)
}

/// Creates whichever of the required tables are missing.
pub async fn setup_database(pool: &SqlitePool) -> Result<()> {
    let mut created = 0;

    for (table, schema_sql) in SCHEMAS {
        if table_exists(pool, table).await? {
            continue;
        }
        info!("Table '{}' does not exist, creating it", table);
        pool.execute(schema_sql)
            .await
            .with_context(|| format!("Failed to create table '{}'", table))?;
        created += 1;
    }

    if created == 0 {
        info!("All required tables exist.");
    }
    Ok(())
}
