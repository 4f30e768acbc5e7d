//! Configuration
//!
//! Layered from built-in defaults, an optional TOML file, and `CATALOG__*` environment
//! variables (highest precedence).

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the products JSON file; None means the platform data directory
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Write an empty collection when the file does not exist yet
    #[serde(default)]
    pub create_if_missing: bool,
}

impl StoreConfig {
    /// Configured data file, or `<data dir>/products.json`.
    pub fn resolve_data_file(&self) -> Result<PathBuf, ApiError> {
        match &self.data_file {
            Some(path) if !path.as_os_str().is_empty() => Ok(path.clone()),
            _ => paths::default_data_file(),
        }
    }
}
