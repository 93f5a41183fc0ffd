//! The engine logs to the subscriber it is given.

use super::test_utils::{write_raw, write_records};
use prefdir::{SettingsStore, StoreOptions};
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capturing_dispatch(logs: &CapturedLogs) -> Dispatch {
    Dispatch::new(
        tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish(),
    )
}

#[test]
fn test_malformed_file_logged_as_warning() {
    let temp_dir = TempDir::new().unwrap();
    write_records(temp_dir.path(), "a.json", json!([{"key": "k", "value": 1}]));
    write_raw(temp_dir.path(), "b.json", "Hello, World!\n");

    let logs = CapturedLogs::default();
    let options = StoreOptions::default().with_dispatch(capturing_dispatch(&logs));
    SettingsStore::open_with(temp_dir.path(), options).unwrap();

    let output = logs.contents();
    assert!(output.contains("WARN"), "expected a warning, got: {}", output);
    assert!(output.contains("Skipping malformed settings file"));
    assert!(output.contains("b.json"));
    assert!(output.contains("Settings refreshed"));
}

#[test]
fn test_volatile_refresh_and_unknown_attribute_logged() {
    let temp_dir = TempDir::new().unwrap();
    write_records(
        temp_dir.path(),
        "a.json",
        json!([{"key": "live", "value": 1, "force_update": true}]),
    );

    let logs = CapturedLogs::default();
    let options = StoreOptions::default().with_dispatch(capturing_dispatch(&logs));
    let mut store = SettingsStore::open_with(temp_dir.path(), options).unwrap();

    store.get("live").unwrap();
    assert!(store.get("absent").is_err());

    let output = logs.contents();
    assert!(output.contains("Volatile field read, refreshing settings"));
    assert!(output.contains("Unknown attribute"));
}

#[test]
fn test_invalid_directory_logged_as_error() {
    let logs = CapturedLogs::default();
    let options = StoreOptions::default().with_dispatch(capturing_dispatch(&logs));
    assert!(SettingsStore::open_with("non_existent_directory", options).is_err());

    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("Invalid settings directory"));
}
