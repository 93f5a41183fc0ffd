//! Config loading facade: layers defaults, files and environment into a `PrefdirConfig`.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::PrefdirConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};

/// Loads `PrefdirConfig` from its sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace files, environment.
    pub fn load(workspace_root: &Path) -> Result<PrefdirConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load configuration from one explicit file, still honoring defaults and environment.
    pub fn load_from_file(path: &Path) -> Result<PrefdirConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Built-in defaults only
    pub fn default() -> PrefdirConfig {
        PrefdirConfig::default()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
