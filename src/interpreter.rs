//! Record interpretation: applies one parsed document onto the settings map.
//!
//! Per document, the deactivation check runs once before anything is applied.
//! Per record, in file order:
//! - volatility bookkeeping runs for every record, control records included;
//! - records typed with the internal marker are never upserted;
//! - every other record overwrites the current value under its key.

use crate::document::SettingsDocument;
use crate::meta::Meta;
use serde_json::{Map, Value};
use tracing::debug;

/// Outcome of applying one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// A true-valued deactivation record excluded the document
    Deactivated,
    /// Records were applied; `upserted` counts the settings written
    Applied { upserted: usize },
}

/// Apply `document` onto `fields`, updating the volatile set in `meta`.
pub fn apply_document(
    document: &SettingsDocument,
    fields: &mut Map<String, Value>,
    meta: &mut Meta,
) -> DocumentOutcome {
    if document.is_deactivated() {
        debug!(file = %document.path.display(), "Settings file deactivated, skipping");
        return DocumentOutcome::Deactivated;
    }

    let mut upserted = 0;
    for record in &document.records {
        let key = record.key();

        if record.forces_update() {
            meta.updateable_fields.insert(key.to_string());
        } else {
            meta.updateable_fields.remove(key);
        }

        if record.is_internal() {
            continue;
        }

        fields.insert(key.to_string(), record.value.clone());
        upserted += 1;
    }

    debug!(
        file = %document.path.display(),
        records = document.records.len(),
        upserted,
        "Applied settings file"
    );

    DocumentOutcome::Applied { upserted }
}
