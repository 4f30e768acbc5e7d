//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format, and destination come
//! from [`LoggingConfig`] with `CATALOG_LOG*` environment overrides.

use crate::config::paths;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
///
/// `level` is an `EnvFilter` directive string, so `"info,catalog::store=debug"` works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    /// `text` or `json`
    #[serde(default = "default_format")]
    pub format: String,

    /// `stdout`, `stderr`, `file`, `file+stderr` or `both`
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file when output includes a file; None means `<state dir>/catalog.log`
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            output: default_output(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ApiError::ConfigError(format!(
                "Invalid log format '{}', expected text or json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
    Both,
    File,
    FileAndStderr,
}

impl LogOutput {
    fn to_file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::FileAndStderr)
    }
}

impl FromStr for LogOutput {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(LogOutput::Stdout),
            "stderr" => Ok(LogOutput::Stderr),
            "both" => Ok(LogOutput::Both),
            "file" => Ok(LogOutput::File),
            "file+stderr" => Ok(LogOutput::FileAndStderr),
            other => Err(ApiError::ConfigError(format!(
                "Invalid log output '{}', expected stdout, stderr, both, file or file+stderr",
                other
            ))),
        }
    }
}

/// Environment value if set and non-empty, else the configured one.
fn env_or(var: &str, configured: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => value,
        _ => configured.to_string(),
    }
}

/// Resolve the log file path with precedence: CATALOG_LOG_FILE env, configured file, default.
pub fn resolve_log_file_path(config_file: Option<PathBuf>) -> Result<PathBuf, ApiError> {
    if let Ok(env_path) = std::env::var("CATALOG_LOG_FILE") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }
    match config_file {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Ok(paths::state_dir()?.join("catalog.log")),
    }
}

/// Install the global subscriber.
///
/// `CATALOG_LOG`, `CATALOG_LOG_FORMAT` and `CATALOG_LOG_OUTPUT` override the matching
/// configuration values. Fails if a global subscriber is already installed.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ApiError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);

    let filter = EnvFilter::try_from_env("CATALOG_LOG")
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ApiError::ConfigError(format!("Invalid log level: {}", e)))?;
    let format: LogFormat = env_or("CATALOG_LOG_FORMAT", &config.format).parse()?;
    let output: LogOutput = env_or("CATALOG_LOG_OUTPUT", &config.output).parse()?;
    let writer = make_writer(output, config.file.clone())?;

    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(writer);
    let registry = Registry::default().with(filter);
    let installed = match format {
        LogFormat::Json => registry.with(layer.json()).try_init(),
        LogFormat::Text => registry.with(layer.with_ansi(!output.to_file())).try_init(),
    };

    installed.map_err(|e| ApiError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn make_writer(output: LogOutput, file: Option<PathBuf>) -> Result<BoxMakeWriter, ApiError> {
    let log_file = match output {
        LogOutput::Stdout => return Ok(BoxMakeWriter::new(std::io::stdout)),
        LogOutput::Stderr => return Ok(BoxMakeWriter::new(std::io::stderr)),
        LogOutput::Both => return Ok(BoxMakeWriter::new(std::io::stdout.and(std::io::stderr))),
        LogOutput::File | LogOutput::FileAndStderr => resolve_log_file_path(file)?,
    };

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    let handle = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            ApiError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })?;
    let handle = Arc::new(handle);

    Ok(match output {
        LogOutput::FileAndStderr => BoxMakeWriter::new(handle.and(std::io::stderr)),
        _ => BoxMakeWriter::new(handle),
    })
}
