//! Storage for the performance dashboard backend.
//!
//! A single-table item store (Postgres or in-memory) plus repositories that
//! translate between store items and domain types via `perfdash_core`.

use perfdash_core::CoreError;
use sqlx::postgres::PgPoolOptions;

pub mod repositories;
pub mod store;

pub use store::{ItemStore, MemoryItemStore, PgItemStore};

pub type DbPool = sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Item encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type DbResult<T> = Result<T, DbError>;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the pool is usable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> DbResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
