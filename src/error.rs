//! Error types for the catalog store and its command-line surface.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the product store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file is missing, unreadable, unwritable, or malformed.
    #[error("Storage unavailable at {path}: {reason}")]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StorageError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        StorageError::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Rejections the caller can recover from without touching the file.
    pub fn is_rejection(&self) -> bool {
        matches!(self, StorageError::NotFound(_) | StorageError::InvalidInput(_))
    }
}

/// Errors surfaced to callers of the CLI and configuration layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Rating rejected: {0}")]
    RatingRejected(String),

    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("Output formatting failed: {0}")]
    FormatError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
