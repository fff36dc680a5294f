//! Configuration loading with hierarchical merging.

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::services::DEFAULT_PRESET_CAPACITY;

/// Sqlite settings for the blob store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database url ("sqlite:pokedex.db", "sqlite::memory:").
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:pokedex.db".to_string(),
            max_connections: 5,
        }
    }
}

/// Preset store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetConfig {
    /// Capacity bound; oldest-inserted presets are evicted past it.
    pub capacity: usize,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_PRESET_CAPACITY,
        }
    }
}

/// Top-level configuration for the data layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub database: DatabaseConfig,
    pub presets: PresetConfig,
}

impl DataConfig {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest): programmatic defaults,
    /// `pokedex.yaml` in the working directory, then `POKEDEX_*`
    /// environment variables (nested keys split on `__`, e.g.
    /// `POKEDEX_DATABASE__URL`).
    pub fn load() -> DomainResult<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(DataConfig::default()))
                .merge(Yaml::file("pokedex.yaml"))
                .merge(Env::prefixed("POKEDEX_").split("__")),
        )
    }

    /// Load from a specific yaml file over the defaults.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> DomainResult<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(DataConfig::default()))
                .merge(Yaml::file(path.as_ref())),
        )
    }

    fn from_figment(figment: Figment) -> DomainResult<Self> {
        let config: DataConfig = figment
            .extract()
            .map_err(|err| DomainError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.database.url.is_empty() {
            return Err(DomainError::InvalidConfig(
                "database url cannot be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(DomainError::InvalidConfig(
                "max_connections must be at least 1".to_string(),
            ));
        }
        if self.presets.capacity == 0 {
            return Err(DomainError::InvalidConfig(
                "preset capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
