//! CLI route: single route table and run context. Dispatches to the settings
//! wrapper and presentation.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_get_output, format_list_output, format_meta_output, format_refresh_output,
    SettingRow,
};
use crate::config::PrefdirConfig;
use crate::error::ApiError;
use crate::store::SettingsStore;
use crate::wrapper::SettingsWrapper;
use std::path::{Path, PathBuf};
use tracing::{info, Dispatch};

/// Runtime context for CLI execution: resolved settings directory and the
/// wrapper around its store.
pub struct RunContext {
    directory: PathBuf,
    wrapper: SettingsWrapper,
}

impl RunContext {
    /// Open the configured settings directory.
    ///
    /// `dispatch` is handed to the store so its events reach the same
    /// subscriber as the binary's own.
    pub fn new(
        config: &PrefdirConfig,
        workspace_root: &Path,
        dispatch: Option<Dispatch>,
    ) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let directory = config.settings.resolve_directory(workspace_root);
        let mut options = config.settings.store_options();
        options.dispatch = dispatch;

        let store = SettingsStore::open_with(&directory, options)?;
        let wrapper = SettingsWrapper::new(Some(store.into_shared()), &directory)?;

        Ok(Self { directory, wrapper })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn wrapper(&self) -> &SettingsWrapper {
        &self.wrapper
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(
            command = command_name(command),
            directory = %self.directory.display(),
            "Executing command"
        );

        let settings = self.wrapper.settings();
        match command {
            Commands::Show => Ok(settings.lock().to_string()),
            Commands::Get { key, format } => {
                let mut store = settings.lock();
                let value = store.get(key)?;
                format_get_output(key, value, format)
            }
            Commands::List { format } => {
                let mut store = settings.lock();
                let rows: Vec<SettingRow> = store
                    .snapshot()?
                    .into_iter()
                    .map(|(key, value)| SettingRow {
                        volatile: store.is_volatile(&key),
                        key,
                        value,
                    })
                    .collect();
                format_list_output(&rows, format)
            }
            Commands::Meta { format } => format_meta_output(settings.lock().meta(), format),
            Commands::Refresh { format } => {
                let report = self.wrapper.refresh_settings()?;
                format_refresh_output(&report, format)
            }
        }
    }
}
