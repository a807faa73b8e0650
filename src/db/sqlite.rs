use std::time::Duration;

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Creates a SQLite connection pool and applies pending migrations
///
/// In-memory databases live and die with a single connection, so they get a
/// pool of exactly one connection that is never recycled.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = options.connect(database_url).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(max_connections, "Credential database ready");

    Ok(pool)
}
