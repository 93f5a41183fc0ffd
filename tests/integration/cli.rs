//! Integration tests driving the prefdir binary.

use super::test_utils::write_records;
use serde_json::json;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(workspace: &Path, args: &[&str]) -> Output {
    let home = workspace.join("home");
    std::fs::create_dir_all(&home).unwrap();

    Command::new(env!("CARGO_BIN_EXE_prefdir"))
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("PREFDIR_LOG")
        .env_remove("PREFDIR_LOG_OUTPUT")
        .arg("--workspace")
        .arg(workspace)
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

fn settings_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("settings_files");
    std::fs::create_dir_all(&dir).unwrap();
    write_records(
        &dir,
        "1.base.json",
        json!([
            {"key": "name", "value": "base"},
            {"key": "port", "value": 8080, "force_update": true}
        ]),
    );
    write_records(&dir, "2.local.json", json!([{"key": "name", "value": "local"}]));
    temp_dir
}

#[test]
fn test_cli_get() {
    let workspace = settings_workspace();
    let output = run(workspace.path(), &["get", "name"]);

    assert!(
        output.status.success(),
        "prefdir get should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "local");
}

#[test]
fn test_cli_get_json() {
    let workspace = settings_workspace();
    let output = run(workspace.path(), &["get", "port", "--format", "json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, json!({"key": "port", "value": 8080}));
}

#[test]
fn test_cli_unknown_key_fails() {
    let workspace = settings_workspace();
    let output = run(workspace.path(), &["get", "missing"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown attribute with name 'missing'"), "stderr: {}", stderr);
}

#[test]
fn test_cli_meta_json() {
    let workspace = settings_workspace();
    let output = run(workspace.path(), &["meta", "--format", "json"]);
    assert!(output.status.success());

    let meta: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(meta["files_found"], json!(2));
    assert_eq!(meta["files_loaded"], json!(2));
    assert_eq!(meta["updateable_fields"], json!(["port"]));
}

#[test]
fn test_cli_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["--dir", "nowhere", "show"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid directory"), "stderr: {}", stderr);
}
