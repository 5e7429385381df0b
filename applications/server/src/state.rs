/// Shared application state
use crate::config::{ServerConfig, StorageBackend};
use artistly_core::{BookingService, Catalog, DataSource, ListingService};
use artistly_storage::{MemoryDataSource, SqliteDataSource};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub listing: ListingService,
    pub bookings: BookingService,
}

impl AppState {
    pub fn new(source: Arc<dyn DataSource>, catalog: Arc<Catalog>) -> Self {
        Self {
            listing: ListingService::new(Arc::clone(&source), catalog),
            bookings: BookingService::new(source),
        }
    }

    /// Open the configured data source, seeding it when asked to
    pub async fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let source = open_data_source(config).await?;

        if config.storage.seed && artistly_storage::seed_if_empty(source.as_ref()).await? {
            tracing::info!("Loaded reference artists and bookings");
        }

        Ok(Self::new(source, Arc::new(config.catalog.to_catalog())))
    }
}

/// Build the data source selected by `storage.backend`
pub async fn open_data_source(config: &ServerConfig) -> anyhow::Result<Arc<dyn DataSource>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory data source");
            Ok(Arc::new(MemoryDataSource::new()))
        }
        StorageBackend::Sqlite => {
            let pool = artistly_storage::create_pool(&config.storage.database_url).await?;
            artistly_storage::run_migrations(&pool).await?;
            tracing::info!(database_url = %config.storage.database_url, "Database connected");
            Ok(Arc::new(SqliteDataSource::new(pool)))
        }
    }
}
