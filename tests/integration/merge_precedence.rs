//! Merge precedence and per-file counters

use super::test_utils::{write_raw, write_records};
use prefdir::SettingsStore;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_precedence_is_lexical_not_numeric() {
    let temp_dir = TempDir::new().unwrap();
    write_records(temp_dir.path(), "10.json", json!([{"key": "k", "value": "ten"}]));
    write_records(temp_dir.path(), "9.json", json!([{"key": "k", "value": "nine"}]));

    // "9.json" sorts after "10.json"
    let mut store = SettingsStore::open(temp_dir.path()).unwrap();
    assert_eq!(store.get("k").unwrap(), &json!("nine"));
}

#[test]
fn test_malformed_file_does_not_abort_later_files() {
    let temp_dir = TempDir::new().unwrap();
    write_records(temp_dir.path(), "a.json", json!([{"key": "k", "value": 1}]));
    write_raw(temp_dir.path(), "b.json", "[{\"key\": \"k\", ");
    write_records(temp_dir.path(), "c.json", json!([{"key": "k", "value": 3}]));

    let mut store = SettingsStore::open(temp_dir.path()).unwrap();
    assert_eq!(store.meta().files_found, 3);
    assert_eq!(store.meta().files_loaded, 2);
    assert_eq!(store.get("k").unwrap(), &json!(3));
}

#[test]
fn test_deactivated_file_counts_as_found_only() {
    let temp_dir = TempDir::new().unwrap();
    write_records(temp_dir.path(), "a.json", json!([{"key": "k", "value": 1}]));
    write_records(
        temp_dir.path(),
        "b.json",
        json!([
            {"key": "k", "value": 2},
            {"key": "extra", "value": true},
            {"type": "Prefy", "key": "deactivate_setting_file", "value": true}
        ]),
    );

    let mut store = SettingsStore::open(temp_dir.path()).unwrap();
    assert_eq!(store.meta().files_found, 2);
    assert_eq!(store.meta().files_loaded, 1);
    assert_eq!(store.get("k").unwrap(), &json!(1));
    assert!(!store.contains("extra"));
}

#[test]
fn test_fully_overwritten_file_still_counts_as_loaded() {
    let temp_dir = TempDir::new().unwrap();
    write_records(temp_dir.path(), "a.json", json!([{"key": "k", "value": 1}]));
    write_records(temp_dir.path(), "b.json", json!([{"key": "k", "value": 2}]));

    let store = SettingsStore::open(temp_dir.path()).unwrap();
    assert_eq!(store.meta().files_loaded, 2);
}

#[test]
fn test_structured_values_are_kept() {
    let temp_dir = TempDir::new().unwrap();
    write_records(
        temp_dir.path(),
        "a.json",
        json!([
            {"key": "list", "value": [1, "two", null]},
            {"key": "nested", "value": {"inner": {"depth": 2}}},
            {"key": "nothing", "value": null}
        ]),
    );

    let mut store = SettingsStore::open(temp_dir.path()).unwrap();
    assert_eq!(store.get("list").unwrap(), &json!([1, "two", null]));
    assert_eq!(store.get("nested").unwrap()["inner"]["depth"], json!(2));
    assert_eq!(store.get("nothing").unwrap(), &json!(null));
}
