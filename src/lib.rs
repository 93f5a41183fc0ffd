//! Prefdir: Directory-Driven Settings
//!
//! Discovers the JSON settings files of one directory, merges their records
//! in filename order into a single dynamic settings store, and reloads the
//! directory whenever a field marked `force_update` is read.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod meta;
pub mod store;
pub mod wrapper;

pub use error::{ApiError, DocumentError, SettingsError};
pub use meta::Meta;
pub use store::{RefreshReport, SettingsStore, SharedSettings, StoreOptions, DEFAULT_DIRECTORY};
pub use wrapper::SettingsWrapper;
