//! Settings documents
//!
//! A settings file holds a JSON array of records. Property names are part of
//! the on-disk format written by people and must not change.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// `type` value marking a record as engine metadata rather than a setting
pub const INTERNAL_TYPE: &str = "Prefy";

/// Reserved key: a true value anywhere in a document excludes the whole document
pub const DEACTIVATE_KEY: &str = "deactivate_setting_file";

/// One entry of a settings document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub value: Value,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Read by truthiness; any JSON value is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_update: Option<Value>,
}

impl Record {
    /// Setting name; a record without a key writes under the empty name.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or("")
    }

    pub fn is_internal(&self) -> bool {
        self.record_type.as_deref() == Some(INTERNAL_TYPE)
    }

    pub fn forces_update(&self) -> bool {
        self.force_update.as_ref().is_some_and(is_truthy)
    }

    /// True for a `deactivate_setting_file` record whose value equals `true`.
    /// Numbers equal to one compare equal to `true` in existing files.
    pub fn is_deactivation(&self) -> bool {
        self.key() == DEACTIVATE_KEY
            && match &self.value {
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64() == Some(1.0),
                _ => false,
            }
    }
}

/// Null, false, zero and empty strings, arrays or objects are false
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Parsed content of one settings file, records in file order
#[derive(Debug, Clone)]
pub struct SettingsDocument {
    pub path: PathBuf,
    pub records: Vec<Record>,
}

impl SettingsDocument {
    /// Parse file content. Anything other than an array of record objects is malformed.
    /// Field values are not validated beyond that.
    pub fn parse(path: &Path, content: &str) -> Result<Self, DocumentError> {
        let records: Vec<Record> =
            serde_json::from_str(content).map_err(|source| DocumentError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Whether any record deactivates this document
    pub fn is_deactivated(&self) -> bool {
        self.records.iter().any(Record::is_deactivation)
    }
}
