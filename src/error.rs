//! Error types for the directory-driven settings engine.

use std::path::PathBuf;
use thiserror::Error;

/// Engine errors surfaced to callers of the settings store
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Invalid directory: '{}'", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("No JSON files found in '{}'", .0.display())]
    NoFilesFound(PathBuf),

    #[error(
        "Unknown attribute with name '{name}'. Add an element with this key to the list of \
         attributes in a JSON file within directory '{}'",
        .directory.display()
    )]
    UnknownAttribute { name: String, directory: PathBuf },

    #[error("Value of '{name}' cannot be read as the requested type: {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected failure while loading '{}': {source}", .path.display())]
    UnexpectedFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Recoverable per-file condition. Never escapes a refresh pass.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid JSON format in file '{}': {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// CLI and configuration errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::OutputError(err.to_string())
    }
}
