//! Generic in-memory collection with whole-file persistence.

use std::path::{Path, PathBuf};

use lp_core::ids::generate_id;

use crate::error::StoreError;
use crate::json_store;
use crate::record::{Record, RecordRef};

/// Owns one ordered collection and its backing file.
///
/// Append order is display order. Every successful mutation rewrites the
/// whole file; a failed write rolls the in-memory change back. Managers
/// built with [`RecordManager::session_only`] never touch the disk.
#[derive(Debug)]
pub struct RecordManager<T: Record> {
    path: Option<PathBuf>,
    records: Vec<T>,
}

impl<T: Record> RecordManager<T> {
    /// Load the collection at `path`, starting empty if it is missing or corrupt.
    ///
    /// Records written before ids existed are given one now and the file is
    /// rewritten, so the same id resolves on the next open. If that write
    /// fails the ids hold for this value only.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if an id cannot be generated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut records: Vec<T> = json_store::load(&path);
        let mut assigned = 0_usize;
        for record in records.iter_mut().filter(|record| record.id().is_empty()) {
            record.set_id(generate_id(T::KIND.id_prefix())?);
            assigned += 1;
        }
        tracing::debug!(kind = T::KIND.as_str(), path = %path.display(), records = records.len(), "collection opened");

        let manager = Self {
            path: Some(path),
            records,
        };
        if assigned > 0 {
            match manager.persist() {
                Ok(()) => {
                    tracing::info!(kind = T::KIND.as_str(), assigned, "assigned ids to legacy records");
                }
                Err(error) => {
                    tracing::warn!(kind = T::KIND.as_str(), %error, "could not save assigned ids");
                }
            }
        }
        Ok(manager)
    }

    /// An empty collection that lives only as long as this value.
    #[must_use]
    pub const fn session_only() -> Self {
        Self {
            path: None,
            records: Vec::new(),
        }
    }

    /// Backing file, if persisted.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Owned copy of the collection, for rendering while mutating.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&T, StoreError> {
        self.records
            .get(index)
            .ok_or_else(|| StoreError::not_found(T::KIND.as_str(), format!("#{}", index + 1)))
    }

    /// Map a position or id to the current 0-based index.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for positions outside `1..=len` and
    /// unknown ids.
    pub fn resolve(&self, target: &RecordRef) -> Result<usize, StoreError> {
        let index = match target {
            RecordRef::Position(position) => usize::try_from(*position)
                .ok()
                .and_then(|position| position.checked_sub(1))
                .filter(|index| *index < self.records.len()),
            RecordRef::Id(id) => self.records.iter().position(|record| record.id() == id),
        };
        index.ok_or_else(|| StoreError::not_found(T::KIND.as_str(), target))
    }

    /// Remove the record at 0-based `index`; later records shift down by one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `index` is out of range, or the save
    /// error (with the record restored) if persisting fails.
    pub fn delete(&mut self, index: usize) -> Result<T, StoreError> {
        self.get(index)?;
        let removed = self.records.remove(index);
        if let Err(error) = self.persist() {
            self.records.insert(index, removed);
            return Err(error);
        }
        tracing::debug!(kind = T::KIND.as_str(), id = removed.id(), "record deleted");
        Ok(removed)
    }

    pub(crate) fn append(&mut self, record: T) -> Result<(), StoreError> {
        self.records.push(record);
        if let Err(error) = self.persist() {
            self.records.pop();
            return Err(error);
        }
        Ok(())
    }

    /// Apply `edit` to a copy of the record at `index` and store it.
    ///
    /// The collection is untouched when `edit` or the save fails.
    pub(crate) fn modify<F>(&mut self, index: usize, edit: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T) -> Result<(), StoreError>,
    {
        let mut updated = self.get(index)?.clone();
        edit(&mut updated)?;

        let previous = std::mem::replace(&mut self.records[index], updated);
        if let Err(error) = self.persist() {
            self.records[index] = previous;
            return Err(error);
        }
        Ok(self.records[index].clone())
    }

    fn persist(&self) -> Result<(), StoreError> {
        match &self.path {
            Some(path) => json_store::save(path, &self.records),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use lp_core::entities::{Idea, Link};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn link(id: &str) -> Link {
        Link {
            id: id.into(),
            url: format!("https://example.com/{id}"),
            note: String::new(),
            timestamp: "2025-01-01 00:00".into(),
        }
    }

    #[test]
    fn open_assigns_ids_to_legacy_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, r#"[{"url": "https://a.example", "note": "", "timestamp": "t"}]"#)
            .unwrap();

        let manager = RecordManager::<Link>::open(&path).unwrap();
        assert_eq!(manager.len(), 1);
        assert!(manager.records()[0].id.starts_with("lnk-"));
    }

    #[test]
    fn legacy_ids_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ideas.json");
        std::fs::write(
            &path,
            r#"[{"text": "Tiny CRM", "timestamp": "2024-05-01 09:00"}]"#,
        )
        .unwrap();

        let first = RecordManager::<Idea>::open(&path).unwrap();
        let id = first.records()[0].id.clone();
        assert!(id.starts_with("ida-"));

        let second = RecordManager::<Idea>::open(&path).unwrap();
        assert_eq!(second.records()[0].id, id);
        assert_eq!(second.resolve(&RecordRef::Id(id)).unwrap(), 0);
        assert_eq!(second.records()[0].title, "Tiny CRM");
    }

    #[test]
    fn open_without_legacy_records_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        let raw = r#"[{"id": "lnk-00000001", "url": "https://a.example", "note": "", "timestamp": "t"}]"#;
        std::fs::write(&path, raw).unwrap();

        RecordManager::<Link>::open(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), raw);
    }

    #[test]
    fn resolve_positions_and_ids() {
        let mut manager = RecordManager::<Link>::session_only();
        manager.append(link("lnk-00000001")).unwrap();
        manager.append(link("lnk-00000002")).unwrap();

        assert_eq!(manager.resolve(&RecordRef::Position(1)).unwrap(), 0);
        assert_eq!(manager.resolve(&RecordRef::Position(2)).unwrap(), 1);
        assert_eq!(
            manager
                .resolve(&RecordRef::Id("lnk-00000002".into()))
                .unwrap(),
            1
        );
    }

    #[test]
    fn resolve_rejects_out_of_range_and_unknown() {
        let mut manager = RecordManager::<Link>::session_only();
        manager.append(link("lnk-00000001")).unwrap();

        for target in [
            RecordRef::Position(0),
            RecordRef::Position(-1),
            RecordRef::Position(2),
            RecordRef::Id("lnk-ffffffff".into()),
        ] {
            assert!(
                matches!(manager.resolve(&target), Err(StoreError::NotFound { .. })),
                "{target} should not resolve"
            );
        }
    }

    #[test]
    fn failed_edit_leaves_record_unchanged() {
        let mut manager = RecordManager::<Link>::session_only();
        manager.append(link("lnk-00000001")).unwrap();

        let result = manager.modify(0, |record| {
            record.note = "changed".into();
            Err(StoreError::Validation("nope".into()))
        });
        assert!(result.is_err());
        assert_eq!(manager.records()[0].note, "");
    }

    #[test]
    fn session_only_never_writes() {
        let mut manager = RecordManager::<Link>::session_only();
        manager.append(link("lnk-00000001")).unwrap();
        assert!(manager.path().is_none());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn failed_save_rolls_back_append() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the final rename fail.
        let path = dir.path().join("links.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("blocker"), "x").unwrap();

        let mut manager = RecordManager::<Link>::open(&path).unwrap();
        assert!(manager.append(link("lnk-00000001")).is_err());
        assert!(manager.is_empty());
    }
}
