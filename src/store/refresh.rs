//! Merge engine: one refresh pass over the settings directory.

use crate::document::SettingsDocument;
use crate::error::SettingsError;
use crate::interpreter::{apply_document, DocumentOutcome};
use crate::store::SettingsStore;
use serde::Serialize;
use std::fs;
use tracing::{info, warn};

/// Summary of one refresh call
#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshReport {
    pub forced: bool,
    /// False when a non-forced refresh found the store already loaded
    pub performed: bool,
    pub files_found: usize,
    pub files_loaded: usize,
    pub skipped_malformed: Vec<String>,
    pub skipped_deactivated: Vec<String>,
}

impl SettingsStore {
    pub(crate) fn run_refresh(&mut self, force: bool) -> Result<RefreshReport, SettingsError> {
        let mut report = RefreshReport {
            forced: force,
            ..RefreshReport::default()
        };

        if !force && self.meta.instantiated {
            return Ok(report);
        }

        let files = match self.discovery.discover() {
            Ok(files) => files,
            Err(e) => {
                if matches!(e, SettingsError::NoFilesFound(_)) {
                    self.meta.begin_pass(Vec::new());
                }
                return Err(e);
            }
        };
        self.meta.begin_pass(files.clone());
        report.performed = true;
        report.files_found = files.len();

        for name in files {
            let path = self.meta.directory_path.join(&name);
            let content = fs::read_to_string(&path).map_err(|source| {
                SettingsError::UnexpectedFailure {
                    path: path.clone(),
                    source,
                }
            })?;

            let document = match SettingsDocument::parse(&path, &content) {
                Ok(document) => document,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "Skipping malformed settings file");
                    report.skipped_malformed.push(name);
                    continue;
                }
            };

            match apply_document(&document, &mut self.fields, &mut self.meta) {
                DocumentOutcome::Deactivated => report.skipped_deactivated.push(name),
                DocumentOutcome::Applied { .. } => self.meta.files_loaded += 1,
            }
        }

        self.meta.finish_pass();
        report.files_loaded = self.meta.files_loaded;

        info!(
            directory = %self.meta.directory_path.display(),
            forced = force,
            files_found = report.files_found,
            files_loaded = report.files_loaded,
            "Settings refreshed"
        );

        Ok(report)
    }
}
