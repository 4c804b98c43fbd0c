//! Postgres pool and schema migrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` opens the pool once with the size from `AppConfig` and applies the
//! embedded migrations before the seeder runs or API traffic is accepted.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connect to `PostgreSQL` and bring the schema up to date.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!(max_connections, "database ready");

    Ok(pool)
}
