//! Settings file discovery
//!
//! Lists the files directly inside the settings directory whose name ends in
//! the configured extension, sorted lexically by filename. The sorted order is
//! the merge precedence: later names override earlier ones.

use crate::error::SettingsError;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Extension matched by default (without the leading dot)
pub const DEFAULT_EXTENSION: &str = "json";

/// Discovery configuration
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Extension without the leading dot
    pub extension: String,
    /// Whether to follow symbolic links to files
    pub follow_symlinks: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            follow_symlinks: true,
        }
    }
}

/// Settings file discovery for one directory
pub struct Discovery {
    root: PathBuf,
    config: DiscoveryConfig,
}

impl Discovery {
    /// Create a discovery over `root` matching `.json` files
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: DiscoveryConfig::default(),
        }
    }

    /// Create a discovery with custom configuration
    pub fn with_config(root: PathBuf, config: DiscoveryConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collect matching filenames, sorted lexically.
    ///
    /// Fails with `NoFilesFound` when nothing matches. Any I/O error while
    /// listing the directory is reported as `UnexpectedFailure`.
    pub fn discover(&self) -> Result<Vec<String>, SettingsError> {
        let suffix = format!(".{}", self.config.extension);
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                let message = e.to_string();
                SettingsError::UnexpectedFailure {
                    path,
                    source: e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message)),
                }
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                warn!(file = ?entry.path(), "Skipping settings file with non-UTF8 name");
                continue;
            };

            if name.ends_with(&suffix) {
                files.push(name.to_string());
            }
        }

        files.sort();

        if files.is_empty() {
            info!(directory = %self.root.display(), "No JSON files found");
            return Err(SettingsError::NoFilesFound(self.root.clone()));
        }

        Ok(files)
    }
}
