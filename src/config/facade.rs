//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::CatalogConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults and environment only.
    pub fn load() -> Result<CatalogConfig, ConfigError> {
        MergeService::load(None)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CatalogConfig, ConfigError> {
        MergeService::load(Some(path))
    }
}
