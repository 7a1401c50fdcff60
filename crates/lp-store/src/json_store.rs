//! Whole-collection JSON load/save.
//!
//! Files hold a pretty-printed JSON array of flat objects. Reads never fail:
//! a missing file, unreadable file, malformed JSON or non-array document all
//! load as an empty collection. Array elements that do not fit `T` are
//! skipped one by one.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;

/// Load the collection stored at `path`.
#[must_use]
pub fn load<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "unreadable collection file; starting empty");
            return Vec::new();
        }
    };

    let items = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!(path = %path.display(), "collection file is not a JSON array; starting empty");
            return Vec::new();
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "corrupt collection file; starting empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(path = %path.display(), index, %error, "skipping unreadable record");
                None
            }
        })
        .collect()
}

/// Replace the file at `path` with `records`.
///
/// Writes a sibling temp file and renames it over the target, so readers see
/// either the old or the new collection. Parent directories are created.
///
/// # Errors
///
/// Returns `StoreError` if the directory, temp file, or rename fails.
pub fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, records)?;
    tmp.persist(path).map_err(|error| StoreError::Io(error.error))?;

    tracing::debug!(path = %path.display(), records = records.len(), "collection saved");
    Ok(())
}
