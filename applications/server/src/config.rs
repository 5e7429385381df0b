/// Server configuration
use crate::error::{Result, ServerError};
use artistly_core::types::{
    Catalog, DEFAULT_CATEGORIES, DEFAULT_FEE_RANGES, DEFAULT_LANGUAGES, DEFAULT_LOCATIONS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Load the reference artists and bookings into an empty store
    #[serde(default = "default_seed")]
    pub seed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Sqlite,
}

/// Selector values offered to clients and enforced at onboarding
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    #[serde(default = "default_fee_ranges")]
    pub fee_ranges: Vec<String>,

    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

impl CatalogSettings {
    pub fn to_catalog(&self) -> Catalog {
        Catalog {
            categories: self.categories.clone(),
            languages: self.languages.clone(),
            fee_ranges: self.fee_ranges.clone(),
            locations: self.locations.clone(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `config.toml` in the working
    /// directory is used when present. Environment variables prefixed with
    /// `ARTISTLY_` override file values, with `__` between section and key
    /// (`ARTISTLY_STORAGE__DATABASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ARTISTLY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        let lists = [
            ("categories", &self.catalog.categories),
            ("languages", &self.catalog.languages),
            ("fee_ranges", &self.catalog.fee_ranges),
            ("locations", &self.catalog.locations),
        ];
        for (name, values) in lists {
            if values.is_empty() {
                return Err(ServerError::Config(format!(
                    "catalog.{name} must list at least one value"
                )));
            }
        }

        if self.storage.backend == StorageBackend::Sqlite
            && self.storage.database_url.trim().is_empty()
        {
            return Err(ServerError::Config(
                "database_url is required for the sqlite backend (set ARTISTLY_STORAGE__DATABASE_URL)"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        backend: StorageBackend::default(),
        database_url: default_database_url(),
        seed: default_seed(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/artistly.db".to_string()
}

fn default_seed() -> bool {
    true
}

fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        categories: default_categories(),
        languages: default_languages(),
        fee_ranges: default_fee_ranges(),
        locations: default_locations(),
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn default_categories() -> Vec<String> {
    owned(&DEFAULT_CATEGORIES)
}

fn default_languages() -> Vec<String> {
    owned(&DEFAULT_LANGUAGES)
}

fn default_fee_ranges() -> Vec<String> {
    owned(&DEFAULT_FEE_RANGES)
}

fn default_locations() -> Vec<String> {
    owned(&DEFAULT_LOCATIONS)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            catalog: default_catalog(),
        }
    }
}
