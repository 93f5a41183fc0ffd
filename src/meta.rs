//! Engine state carried across refresh passes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Bookkeeping owned by a settings store
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub directory_path: PathBuf,
    /// Set once a refresh pass has loaded at least one file
    pub instantiated: bool,
    /// Filenames found by the last discovery, in merge order
    pub files: Vec<String>,
    pub files_found: usize,
    /// Files applied during the last pass (valid and not deactivated)
    pub files_loaded: usize,
    /// Fields whose latest applied record requested `force_update`
    pub updateable_fields: BTreeSet<String>,
    pub last_refreshed: Option<DateTime<Utc>>,
    /// Completed refresh passes since construction
    pub refresh_passes: u64,
}

impl Meta {
    pub fn new(directory_path: &Path) -> Self {
        Self {
            directory_path: directory_path.to_path_buf(),
            instantiated: false,
            files: Vec::new(),
            files_found: 0,
            files_loaded: 0,
            updateable_fields: BTreeSet::new(),
            last_refreshed: None,
            refresh_passes: 0,
        }
    }

    pub fn is_volatile(&self, name: &str) -> bool {
        self.updateable_fields.contains(name)
    }

    /// Record the outcome of discovery at the start of a pass
    pub(crate) fn begin_pass(&mut self, files: Vec<String>) {
        self.files_found = files.len();
        self.files = files;
        self.files_loaded = 0;
    }

    pub(crate) fn finish_pass(&mut self) {
        if self.files_loaded > 0 {
            self.instantiated = true;
        }
        self.last_refreshed = Some(Utc::now());
        self.refresh_passes += 1;
    }
}
