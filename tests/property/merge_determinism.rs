//! Property-based tests for merge precedence and volatility tracking

use prefdir::SettingsStore;
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// Write one file per entry, named so that lexical order matches entry order
fn write_sequence(dir: &std::path::Path, entries: &[(i64, bool)]) {
    for (i, (value, force)) in entries.iter().enumerate() {
        let records = json!([{"key": "k", "value": value, "force_update": force}]);
        std::fs::write(
            dir.join(format!("{:03}.json", i)),
            serde_json::to_string(&records).unwrap(),
        )
        .unwrap();
    }
}

/// The last sorted file that sets a key decides its value
#[test]
fn test_last_file_wins_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(64));

    runner
        .run(
            &prop::collection::vec((any::<i64>(), any::<bool>()), 1..8),
            |entries| {
                let temp_dir = TempDir::new().unwrap();
                write_sequence(temp_dir.path(), &entries);

                let store = SettingsStore::open(temp_dir.path()).unwrap();
                let (expected, _) = entries[entries.len() - 1];

                prop_assert_eq!(store.meta().files_found, entries.len());
                prop_assert_eq!(store.meta().files_loaded, entries.len());
                prop_assert!(store.contains("k"));
                prop_assert_eq!(store.to_string(), format!("{{k={}}}", expected));
                Ok(())
            },
        )
        .unwrap();
}

/// Volatility follows the latest applied record for the key
#[test]
fn test_volatility_follows_last_record_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(64));

    runner
        .run(
            &prop::collection::vec((any::<i64>(), any::<bool>()), 1..8),
            |entries| {
                let temp_dir = TempDir::new().unwrap();
                write_sequence(temp_dir.path(), &entries);

                let store = SettingsStore::open(temp_dir.path()).unwrap();
                let (_, expected_volatile) = entries[entries.len() - 1];
                prop_assert_eq!(store.is_volatile("k"), expected_volatile);
                Ok(())
            },
        )
        .unwrap();
}

/// Deactivated files never contribute, wherever they sort
#[test]
fn test_deactivated_files_never_contribute_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(64));

    runner
        .run(
            &prop::collection::vec((any::<i64>(), any::<bool>()), 1..8),
            |entries| {
                let temp_dir = TempDir::new().unwrap();
                let mut expected = None;
                let mut loaded = 0;
                for (i, (value, deactivated)) in entries.iter().enumerate() {
                    let records = json!([
                        {"key": "k", "value": value},
                        {"type": "Prefy", "key": "deactivate_setting_file", "value": deactivated}
                    ]);
                    std::fs::write(
                        temp_dir.path().join(format!("{:03}.json", i)),
                        serde_json::to_string(&records).unwrap(),
                    )
                    .unwrap();
                    if !deactivated {
                        expected = Some(*value);
                        loaded += 1;
                    }
                }

                let mut store = SettingsStore::open(temp_dir.path()).unwrap();
                prop_assert_eq!(store.meta().files_found, entries.len());
                prop_assert_eq!(store.meta().files_loaded, loaded);
                match expected {
                    Some(value) => {
                        prop_assert_eq!(store.get("k").unwrap(), &json!(value));
                    }
                    None => {
                        prop_assert!(!store.contains("k"));
                    }
                }
                Ok(())
            },
        )
        .unwrap();
}
