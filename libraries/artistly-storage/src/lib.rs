//! Artistly Storage
//!
//! `DataSource` implementations for the Artistly marketplace.
//!
//! # Architecture
//!
//! - **Memory**: [`MemoryDataSource`], process-local and seeded with the
//!   reference dataset; the default for development
//! - **SQLite**: [`SqliteDataSource`], persistent, with embedded migrations
//! - **Vertical Slicing**: each entity owns its own queries (`artists`, `bookings`)
//!
//! # Example
//!
//! ```rust,no_run
//! use artistly_storage::{create_pool, run_migrations, seed_if_empty, SqliteDataSource};
//! use artistly_core::DataSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://artistly.db").await?;
//! run_migrations(&pool).await?;
//!
//! let source = SqliteDataSource::new(pool);
//! seed_if_empty(&source).await?;
//!
//! let artists = source.list_artists().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod memory;

// Vertical slices
pub mod artists;
pub mod bookings;

pub use context::SqliteDataSource;
pub use error::StorageError;
pub use memory::MemoryDataSource;

use artistly_core::{seed, DataSource};
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://artistly.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Load the reference artists and bookings into an empty data source
///
/// Returns `true` when data was inserted, `false` when the source already
/// held artists.
pub async fn seed_if_empty(source: &dyn DataSource) -> artistly_core::Result<bool> {
    if !source.list_artists().await?.is_empty() {
        return Ok(false);
    }

    for artist in seed::reference_artists() {
        source.insert_artist(artist).await?;
    }
    for booking in seed::reference_bookings() {
        source.insert_booking(booking).await?;
    }

    tracing::info!("Seeded data source with reference artists and bookings");
    Ok(true)
}
