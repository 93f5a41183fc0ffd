//! Settings Store
//!
//! Holds the merged settings of one directory together with its [`Meta`].
//! Reads go through [`SettingsStore::get`]: reading a volatile field first
//! re-runs a full forced refresh from disk, so the returned value (and any
//! other field touched by that pass) reflects the files as they are now.

pub mod refresh;

pub use refresh::RefreshReport;

use crate::discovery::{Discovery, DiscoveryConfig};
use crate::error::SettingsError;
use crate::meta::Meta;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, warn, Dispatch};

/// Directory used when the caller does not name one
pub const DEFAULT_DIRECTORY: &str = "settings_files";

/// Store shared behind a single lock for callers on several threads
pub type SharedSettings = Arc<parking_lot::Mutex<SettingsStore>>;

/// Construction options
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub discovery: DiscoveryConfig,
    /// Subscriber receiving the engine's events; the process default when unset
    pub dispatch: Option<Dispatch>,
}

impl StoreOptions {
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.discovery.extension = extension.into();
        self
    }

    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }
}

/// Merged settings of one directory
pub struct SettingsStore {
    meta: Meta,
    fields: Map<String, Value>,
    discovery: Discovery,
    dispatch: Option<Dispatch>,
}

impl SettingsStore {
    /// Open `directory` and load it.
    ///
    /// Fails with `InvalidDirectory` before any file I/O when the path is not
    /// an existing directory, and with `NoFilesFound` when it holds no JSON files.
    pub fn open(directory: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::open_with(directory, StoreOptions::default())
    }

    /// Open [`DEFAULT_DIRECTORY`] relative to the working directory
    pub fn open_default() -> Result<Self, SettingsError> {
        Self::open(DEFAULT_DIRECTORY)
    }

    pub fn open_with(
        directory: impl AsRef<Path>,
        options: StoreOptions,
    ) -> Result<Self, SettingsError> {
        let directory = directory.as_ref();
        let StoreOptions {
            discovery,
            dispatch,
        } = options;

        with_dispatch(dispatch.clone(), || {
            if !directory.is_dir() {
                error!(directory = %directory.display(), "Invalid settings directory");
                return Err(SettingsError::InvalidDirectory(directory.to_path_buf()));
            }
            Ok(())
        })?;

        let mut store = Self {
            meta: Meta::new(directory),
            fields: Map::new(),
            discovery: Discovery::with_config(directory.to_path_buf(), discovery),
            dispatch,
        };
        store.refresh(false)?;
        Ok(store)
    }

    /// Re-scan the directory and merge every file.
    ///
    /// A non-forced refresh does nothing once the store has loaded
    /// successfully. Failures leave the fields applied so far in place.
    pub fn refresh(&mut self, force: bool) -> Result<RefreshReport, SettingsError> {
        with_dispatch(self.dispatch.clone(), || self.run_refresh(force))
    }

    /// Read a field, refreshing first if the field is volatile.
    pub fn get(&mut self, name: &str) -> Result<&Value, SettingsError> {
        with_dispatch(self.dispatch.clone(), || self.refresh_if_volatile(name))?;
        self.fields
            .get(name)
            .ok_or_else(|| self.unknown_attribute(name))
    }

    /// Same as [`get`](Self::get), returning an owned value
    pub fn check_setting_value(&mut self, name: &str) -> Result<Value, SettingsError> {
        self.get(name).cloned()
    }

    /// Read a field through [`get`](Self::get) and deserialize it
    pub fn get_as<T: DeserializeOwned>(&mut self, name: &str) -> Result<T, SettingsError> {
        let value = self.get(name)?.clone();
        serde_json::from_value(value).map_err(|source| SettingsError::InvalidValue {
            name: name.to_string(),
            source,
        })
    }

    /// Every held field with its value, in insertion order.
    ///
    /// Runs at most one forced refresh, and only when some held field is
    /// volatile, so a full listing costs a single re-scan.
    pub fn snapshot(&mut self) -> Result<Vec<(String, Value)>, SettingsError> {
        if self.fields.keys().any(|key| self.meta.is_volatile(key)) {
            self.refresh(true)?;
        }
        Ok(self
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    /// Current value of a field without the volatile refresh
    pub fn peek(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether a field is currently held. Never refreshes.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Names of the fields currently held, in insertion order. Never refreshes.
    pub fn keys(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn is_volatile(&self, name: &str) -> bool {
        self.meta.is_volatile(name)
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn directory(&self) -> &Path {
        &self.meta.directory_path
    }

    /// Wrap this store for shared use
    pub fn into_shared(self) -> SharedSettings {
        Arc::new(parking_lot::Mutex::new(self))
    }

    fn refresh_if_volatile(&mut self, name: &str) -> Result<(), SettingsError> {
        if self.meta.is_volatile(name) {
            debug!(key = name, "Volatile field read, refreshing settings");
            self.run_refresh(true)?;
        }
        Ok(())
    }

    fn unknown_attribute(&self, name: &str) -> SettingsError {
        let directory = self.meta.directory_path.clone();
        with_dispatch(self.dispatch.clone(), || {
            warn!(key = name, directory = %directory.display(), "Unknown attribute");
        });
        SettingsError::UnknownAttribute {
            name: name.to_string(),
            directory,
        }
    }
}

impl fmt::Display for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, render_value(value))?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("meta", &self.meta)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Strings render bare, everything else as JSON
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn with_dispatch<R>(dispatch: Option<Dispatch>, f: impl FnOnce() -> R) -> R {
    match dispatch {
        Some(dispatch) => tracing::dispatcher::with_default(&dispatch, f),
        None => f(),
    }
}
