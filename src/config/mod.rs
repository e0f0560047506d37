//! Configuration
//!
//! Layered configuration loaded through the `config` crate. Precedence, lowest
//! to highest: built-in defaults, global file, workspace file, environment.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod workspace;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use workspace::listing::ListingConfig;
pub use workspace::storage_paths::StorageConfig;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WayfareConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WayfareConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.listing.validate().map_err(ApiError::ConfigError)?;
        self.storage.validate().map_err(ApiError::ConfigError)?;
        Ok(())
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
