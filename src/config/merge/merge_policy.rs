//! Merge rules: defaults applied before any file or environment source.

use crate::discovery::DEFAULT_EXTENSION;
use crate::store::DEFAULT_DIRECTORY;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("settings.directory", DEFAULT_DIRECTORY)?
        .set_default("settings.extension", DEFAULT_EXTENSION)
}
