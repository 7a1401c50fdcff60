//! CSV export of a collection with a fixed column list.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

pub const IDEA_EXPORT_FIELDS: &[&str] = &["name", "title", "description", "timestamp"];
pub const LINK_EXPORT_FIELDS: &[&str] = &["url", "note", "timestamp"];

/// Write `records` to `path` as CSV with `fields` as the header row.
///
/// Every row is projected before anything is written, so a record missing a
/// column fails the export without touching `path`. An empty collection
/// produces a header-only file. Returns the number of data rows.
///
/// # Errors
///
/// Returns `StoreError::MissingField` naming the first absent column, or the
/// JSON, I/O or CSV error.
pub fn export_csv<T: Serialize>(
    records: &[T],
    fields: &[&str],
    path: &Path,
) -> Result<usize, StoreError> {
    let rows = records
        .iter()
        .enumerate()
        .map(|(row, record)| project(row + 1, record, fields))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(fields)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = rows.len(), "exported CSV");
    Ok(rows.len())
}

fn project<T: Serialize>(row: usize, record: &T, fields: &[&str]) -> Result<Vec<String>, StoreError> {
    let value = serde_json::to_value(record)?;
    fields
        .iter()
        .map(|field| {
            value
                .get(field)
                .map(cell)
                .ok_or_else(|| StoreError::MissingField {
                    row,
                    field: (*field).to_string(),
                })
        })
        .collect()
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
