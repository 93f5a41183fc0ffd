//! Forwarding wrapper for components that carry a settings handle.

use crate::error::SettingsError;
use crate::store::{RefreshReport, SettingsStore, SharedSettings, DEFAULT_DIRECTORY};
use std::path::Path;
use std::sync::Arc;

/// Holds a shared store and forwards forced refreshes to it
#[derive(Debug, Clone)]
pub struct SettingsWrapper {
    settings: SharedSettings,
}

impl SettingsWrapper {
    /// Use `settings` when given, otherwise open `directory`
    pub fn new(
        settings: Option<SharedSettings>,
        directory: impl AsRef<Path>,
    ) -> Result<Self, SettingsError> {
        let settings = match settings {
            Some(settings) => settings,
            None => SettingsStore::open(directory)?.into_shared(),
        };
        Ok(Self { settings })
    }

    /// Open [`DEFAULT_DIRECTORY`]
    pub fn open_default() -> Result<Self, SettingsError> {
        Self::new(None, DEFAULT_DIRECTORY)
    }

    pub fn settings(&self) -> SharedSettings {
        Arc::clone(&self.settings)
    }

    pub fn refresh_settings(&self) -> Result<RefreshReport, SettingsError> {
        self.settings.lock().refresh(true)
    }
}
