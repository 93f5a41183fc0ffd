//! Configuration System
//!
//! Configuration for the `prefdir` binary: which directory to merge, which
//! extension to discover and how to log. Layered through the `config` crate;
//! see [`ConfigLoader`] for precedence.

use crate::discovery::{DiscoveryConfig, DEFAULT_EXTENSION};
use crate::logging::LoggingConfig;
use crate::store::{StoreOptions, DEFAULT_DIRECTORY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefdirConfig {
    /// Settings directory and discovery
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings directory section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Directory holding the JSON settings files; relative paths resolve
    /// against the workspace root
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Extension matched by discovery, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_directory() -> PathBuf {
    PathBuf::from(DEFAULT_DIRECTORY)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
        }
    }
}

impl SettingsConfig {
    /// Validate the settings section
    pub fn validate(&self) -> Result<(), String> {
        if self.directory.as_os_str().is_empty() {
            return Err("Settings directory cannot be empty".to_string());
        }
        if self.extension.is_empty() {
            return Err("Extension cannot be empty".to_string());
        }
        if self
            .extension
            .chars()
            .any(|c| c == '.' || std::path::is_separator(c))
        {
            return Err(format!(
                "Extension '{}' must not contain dots or path separators",
                self.extension
            ));
        }
        Ok(())
    }

    /// Directory to open, resolved against `workspace_root`
    pub fn resolve_directory(&self, workspace_root: &Path) -> PathBuf {
        if self.directory.is_absolute() {
            self.directory.clone()
        } else {
            workspace_root.join(&self.directory)
        }
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            discovery: DiscoveryConfig {
                extension: self.extension.clone(),
                ..DiscoveryConfig::default()
            },
            dispatch: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Settings(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Settings(msg) => write!(f, "Settings: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PrefdirConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.settings.validate() {
            errors.push(ValidationError::Settings(e));
        }

        if !matches!(self.logging.format.as_str(), "json" | "text") {
            errors.push(ValidationError::Logging(format!(
                "Invalid log format: {}",
                self.logging.format
            )));
        }
        if !matches!(
            self.logging.output.as_str(),
            "stdout" | "stderr" | "file" | "both"
        ) {
            errors.push(ValidationError::Logging(format!(
                "Invalid log output: {}",
                self.logging.output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
