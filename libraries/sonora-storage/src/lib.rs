//! Sonora Storage
//!
//! `SQLite` document store for the Sonora catalog.
//!
//! # Architecture
//!
//! - **Document Collections**: `songs`, `segments` and `users` hold one JSON
//!   document per row keyed by id; `playlists` keeps its scalar fields in
//!   columns and embeds song snapshots in a JSON array
//! - **Vertical Slicing**: Each collection owns its own queries
//! - **Single-Statement Updates**: Every mutation is one atomic statement;
//!   song push/pull runs inside `SQLite` via its JSON functions
//!
//! # Example
//!
//! ```rust,no_run
//! use sonora_storage::{create_pool, run_migrations, SqliteCatalog};
//! use sonora_core::storage::CatalogStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://sonora.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let catalog = SqliteCatalog::new(pool);
//! let songs = catalog.get_all_songs().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod playlists;
pub mod segments;
pub mod songs;
pub mod stats;
pub mod users;

pub use context::{IdGenerator, SqliteCatalog};
pub use error::StorageError;

use sqlx::sqlite::SqlitePool;

// Embedded migrations, applied in order; every statement is idempotent
const MIGRATIONS: &[&str] = &[
    include_str!("../migrations/20250105000001_create_songs.sql"),
    include_str!("../migrations/20250105000002_create_segments.sql"),
    include_str!("../migrations/20250105000003_create_users.sql"),
    include_str!("../migrations/20250105000004_create_playlists.sql"),
];

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> error::Result<()> {
    for migration in MIGRATIONS {
        sqlx::raw_sql(migration)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    tracing::debug!(count = MIGRATIONS.len(), "migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://sonora.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> error::Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating pool");

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    if let Some(parent) = options.get_filename().parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::Connection(format!("{}: {e}", parent.display())))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create a pool, apply migrations and wrap it in a [`SqliteCatalog`]
pub async fn open(database_url: &str, max_connections: u32) -> error::Result<SqliteCatalog> {
    let pool = create_pool(database_url, max_connections).await?;
    run_migrations(&pool).await?;
    Ok(SqliteCatalog::new(pool))
}
