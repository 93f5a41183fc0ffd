//! Shared test utilities for integration tests

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Write `records` (a JSON array) to `dir/name`
pub fn write_records(dir: &Path, name: &str, records: Value) {
    fs::write(dir.join(name), serde_json::to_string(&records).unwrap()).unwrap();
}

/// Write raw text to `dir/name`
pub fn write_raw(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}
