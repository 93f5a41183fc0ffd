//! CLI presentation: text and json formatters per command.

use crate::error::ApiError;
use crate::meta::Meta;
use crate::store::{render_value, RefreshReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;

/// One line of `prefdir list`
#[derive(Debug, Clone, Serialize)]
pub struct SettingRow {
    pub key: String,
    pub value: Value,
    pub volatile: bool,
}

pub fn format_get_output(key: &str, value: &Value, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        let out = serde_json::json!({ "key": key, "value": value });
        return Ok(serde_json::to_string_pretty(&out)?);
    }
    Ok(render_value(value))
}

pub fn format_list_output(rows: &[SettingRow], format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(rows)?);
    }
    if rows.is_empty() {
        return Ok("No settings loaded.".to_string());
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Value", "Volatile"]);
    for row in rows {
        let volatile = if row.volatile { "yes" } else { "-" };
        table.add_row(vec![row.key.clone(), render_value(&row.value), volatile.to_string()]);
    }
    Ok(table.to_string())
}

pub fn format_meta_output(meta: &Meta, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(meta)?);
    }

    let mut s = format!(
        "Directory: {}\n  Instantiated: {}\n  Files found: {}\n  Files loaded: {}",
        meta.directory_path.display(),
        meta.instantiated,
        meta.files_found,
        meta.files_loaded
    );
    if let Some(at) = meta.last_refreshed {
        s.push_str(&format!("\n  Last refreshed: {}", at.to_rfc3339()));
    }
    if !meta.files.is_empty() {
        s.push_str("\n\nFiles (merge order):");
        for (i, file) in meta.files.iter().enumerate() {
            s.push_str(&format!("\n  {}. {}", i + 1, file));
        }
    }
    if !meta.updateable_fields.is_empty() {
        s.push_str("\n\nVolatile fields:");
        for field in &meta.updateable_fields {
            s.push_str(&format!("\n  - {}", field));
        }
    }
    Ok(s)
}

pub fn format_refresh_output(report: &RefreshReport, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(report)?);
    }
    if !report.performed {
        return Ok("Settings already loaded; nothing to do.".to_string());
    }

    let mut s = format!(
        "Refreshed settings:\n  Files found: {}\n  Files loaded: {}",
        report.files_found, report.files_loaded
    );
    if !report.skipped_deactivated.is_empty() {
        s.push_str(&format!("\n\nDeactivated ({}):", report.skipped_deactivated.len()));
        for file in &report.skipped_deactivated {
            s.push_str(&format!("\n  - {}", file));
        }
    }
    if !report.skipped_malformed.is_empty() {
        s.push_str(&format!("\n\nMalformed ({}):", report.skipped_malformed.len()));
        for file in &report.skipped_malformed {
            s.push_str(&format!("\n  - {}", file));
        }
    }
    Ok(s)
}
