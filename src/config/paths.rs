//! Platform directories for the data file.

use crate::error::ApiError;
use std::path::PathBuf;

pub const DATA_FILE_NAME: &str = "products.json";

/// Platform data directory for the catalog (e.g. `~/.local/share/catalog` on Linux).
pub fn data_dir() -> Result<PathBuf, ApiError> {
    let project_dirs = directories::ProjectDirs::from("", "catalog", "catalog").ok_or_else(|| {
        ApiError::ConfigError("Could not determine platform data directory".to_string())
    })?;
    Ok(project_dirs.data_dir().to_path_buf())
}

pub fn default_data_file() -> Result<PathBuf, ApiError> {
    Ok(data_dir()?.join(DATA_FILE_NAME))
}

/// Platform state directory, used for the default log file.
pub fn state_dir() -> Result<PathBuf, ApiError> {
    let project_dirs = directories::ProjectDirs::from("", "catalog", "catalog").ok_or_else(|| {
        ApiError::ConfigError("Could not determine platform state directory".to_string())
    })?;
    // macOS and Windows have no state dir
    Ok(project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.data_local_dir())
        .to_path_buf())
}
