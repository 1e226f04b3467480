//! Document persistence.
//!
//! SQLite is the default backend; the in-memory store exists for throwaway runs and tests.

mod document;
mod memory;
mod repository;
mod sqlite;

pub use document::*;
pub use memory::*;
pub use repository::*;
pub use sqlite::*;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::StoreLocation;
use crate::errors::AppError;

/// Open the configured document store.
pub async fn open_store(location: &StoreLocation) -> Result<Arc<dyn DocumentStore>, AppError> {
    match location {
        StoreLocation::Sqlite(url) => {
            let pool = init_database(url).await?;
            Ok(Arc::new(SqliteStore::new(pool)))
        }
        StoreLocation::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Initialize the database connection pool and run migrations.
pub async fn init_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // Ensure the parent directory exists
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            collection TEXT NOT NULL,
            body TEXT NOT NULL CHECK (json_valid(body))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection, seq);")
        .execute(pool)
        .await?;

    Ok(())
}
