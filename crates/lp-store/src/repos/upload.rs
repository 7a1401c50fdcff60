//! Uploaded files: metadata collection plus the artifacts in the uploads
//! directory. Metadata and artifacts are kept in step: a rename or delete
//! that cannot touch the artifact leaves the metadata alone.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lp_core::entities::UploadedFile;
use lp_core::ids::{PREFIX_UPLOADED_FILE, generate_id};
use lp_core::timestamp::now_stamp;

use crate::error::StoreError;
use crate::helpers::require;
use crate::manager::RecordManager;
use crate::record::RecordRef;

#[derive(Debug)]
pub struct UploadManager {
    records: RecordManager<UploadedFile>,
    uploads_dir: PathBuf,
}

impl UploadManager {
    /// Load upload metadata from `metadata_path`; artifacts live in `uploads_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if a legacy record cannot be given an id.
    pub fn open(
        metadata_path: impl Into<PathBuf>,
        uploads_dir: impl Into<PathBuf>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            records: RecordManager::open(metadata_path)?,
            uploads_dir: uploads_dir.into(),
        })
    }

    #[must_use]
    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    #[must_use]
    pub fn records(&self) -> &[UploadedFile] {
        self.records.records()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<UploadedFile> {
        self.records.snapshot()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&UploadedFile, StoreError> {
        self.records.get(index)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown position or id.
    pub fn resolve(&self, target: &RecordRef) -> Result<usize, StoreError> {
        self.records.resolve(target)
    }

    /// Store `bytes` under the uploads directory and record it.
    ///
    /// Only the final path component of `filename` is kept. Uploading the
    /// same name twice overwrites the artifact and adds a second record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a name with no file component,
    /// `StoreError::Io` if the artifact cannot be written, or the save error.
    pub fn upload(&mut self, filename: &str, bytes: &[u8]) -> Result<UploadedFile, StoreError> {
        let filename = sanitize_filename(filename)?;
        fs::create_dir_all(&self.uploads_dir)?;
        let artifact = self.uploads_dir.join(&filename);
        fs::write(&artifact, bytes)?;

        let record = UploadedFile {
            id: generate_id(PREFIX_UPLOADED_FILE)?,
            filename,
            path: artifact.to_string_lossy().into_owned(),
            timestamp: now_stamp(),
        };
        self.records.append(record.clone())?;
        tracing::debug!(id = %record.id, path = %record.path, bytes = bytes.len(), "file uploaded");
        Ok(record)
    }

    /// Rename the artifact at `index` within the uploads directory and
    /// update its metadata.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `index` is out of range or the
    /// artifact is missing on disk, `StoreError::Validation` for an invalid
    /// new name or one already taken by another artifact, or the I/O or save
    /// error. Metadata and artifacts are unchanged on error.
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<UploadedFile, StoreError> {
        let current = self.records.get(index)?.clone();
        let new_name = sanitize_filename(new_name)?;
        let old_path = PathBuf::from(&current.path);
        if !old_path.is_file() {
            return Err(StoreError::not_found("artifact", &current.path));
        }

        let new_path = self.uploads_dir.join(&new_name);
        if new_path != old_path && new_path.exists() {
            return Err(StoreError::Validation(format!(
                "an upload named '{new_name}' already exists"
            )));
        }
        fs::rename(&old_path, &new_path)?;

        let new_path_text = new_path.to_string_lossy().into_owned();
        let result = self.records.modify(index, |file| {
            file.filename.clone_from(&new_name);
            file.path.clone_from(&new_path_text);
            Ok(())
        });
        if result.is_err() {
            if let Err(error) = fs::rename(&new_path, &old_path) {
                tracing::warn!(%error, path = %new_path.display(), "could not restore renamed artifact");
            }
        }
        result
    }

    /// Remove the artifact at `index` (if still present) and its record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `index` is out of range, or the I/O
    /// or save error.
    pub fn delete(&mut self, index: usize) -> Result<UploadedFile, StoreError> {
        let current = self.records.get(index)?;
        match fs::remove_file(&current.path) {
            Ok(()) => {}
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %current.path, "artifact already gone");
            }
            Err(error) => return Err(error.into()),
        }
        self.records.delete(index)
    }
}

fn sanitize_filename(raw: &str) -> Result<String, StoreError> {
    let raw = require("filename", raw)?;
    Path::new(&raw)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| StoreError::Validation(format!("'{raw}' is not a file name")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::test_support::helpers::temp_uploads;

    #[test]
    fn upload_writes_artifact_and_metadata() {
        let (dir, mut uploads) = temp_uploads();

        let file = uploads.upload("deck.pdf", b"%PDF").unwrap();

        assert!(file.id.starts_with("upl-"));
        assert_eq!(file.filename, "deck.pdf");
        assert_eq!(fs::read(&file.path).unwrap(), b"%PDF");

        let reopened =
            UploadManager::open(dir.path().join("uploaded_files.json"), uploads.uploads_dir())
                .unwrap();
        assert_eq!(reopened.records(), &[file]);
    }

    #[test]
    fn upload_strips_directories() {
        let (_dir, mut uploads) = temp_uploads();
        let file = uploads.upload("../../etc/passwd", b"x").unwrap();
        assert_eq!(file.filename, "passwd");
        assert_eq!(PathBuf::from(&file.path), uploads.uploads_dir().join("passwd"));
    }

    #[test]
    fn upload_rejects_names_without_file_component() {
        let (_dir, mut uploads) = temp_uploads();
        assert!(matches!(uploads.upload("..", b"x"), Err(StoreError::Validation(_))));
        assert!(matches!(uploads.upload("  ", b"x"), Err(StoreError::Validation(_))));
        assert!(uploads.is_empty());
    }

    #[test]
    fn rename_moves_artifact() {
        let (_dir, mut uploads) = temp_uploads();
        let original = uploads.upload("draft.txt", b"hello").unwrap();

        let renamed = uploads.rename(0, "final.txt").unwrap();

        assert_eq!(renamed.id, original.id);
        assert_eq!(renamed.filename, "final.txt");
        assert!(!Path::new(&original.path).exists());
        assert_eq!(fs::read(&renamed.path).unwrap(), b"hello");
    }

    #[test]
    fn rename_with_missing_artifact_keeps_metadata() {
        let (_dir, mut uploads) = temp_uploads();
        let original = uploads.upload("draft.txt", b"hello").unwrap();
        fs::remove_file(&original.path).unwrap();

        let err = uploads.rename(0, "final.txt").unwrap_err();

        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(uploads.records(), &[original]);
    }

    #[test]
    fn rename_onto_another_upload_is_rejected() {
        let (_dir, mut uploads) = temp_uploads();
        let a = uploads.upload("a.txt", b"AAA").unwrap();
        let b = uploads.upload("b.txt", b"BBB").unwrap();

        let err = uploads.rename(0, "b.txt").unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(uploads.records(), &[a.clone(), b.clone()]);
        assert_eq!(fs::read(&a.path).unwrap(), b"AAA");
        assert_eq!(fs::read(&b.path).unwrap(), b"BBB");
    }

    #[test]
    fn rename_to_same_name_is_allowed() {
        let (_dir, mut uploads) = temp_uploads();
        let file = uploads.upload("deck.pdf", b"%PDF").unwrap();

        let renamed = uploads.rename(0, "deck.pdf").unwrap();

        assert_eq!(renamed.path, file.path);
        assert_eq!(fs::read(&renamed.path).unwrap(), b"%PDF");
    }

    #[test]
    fn delete_removes_artifact_and_record() {
        let (_dir, mut uploads) = temp_uploads();
        let file = uploads.upload("a.txt", b"a").unwrap();

        uploads.delete(0).unwrap();

        assert!(uploads.is_empty());
        assert!(!Path::new(&file.path).exists());
    }

    #[test]
    fn delete_tolerates_missing_artifact() {
        let (_dir, mut uploads) = temp_uploads();
        let file = uploads.upload("a.txt", b"a").unwrap();
        fs::remove_file(&file.path).unwrap();

        uploads.delete(0).unwrap();
        assert!(uploads.is_empty());
    }

    #[test]
    fn open_missing_metadata_is_empty() {
        let dir = TempDir::new().unwrap();
        let uploads =
            UploadManager::open(dir.path().join("nope.json"), dir.path().join("uploads")).unwrap();
        assert!(uploads.is_empty());
    }
}
