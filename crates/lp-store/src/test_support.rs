//! Shared test utilities for lp-store unit tests.

pub(crate) mod helpers {
    use tempfile::TempDir;

    use crate::manager::RecordManager;
    use crate::record::Record;
    use crate::repos::UploadManager;

    /// A manager backed by `file_name` inside a fresh temp dir.
    ///
    /// Keep the returned `TempDir` alive for the duration of the test.
    pub fn temp_manager<T: Record>(file_name: &str) -> (TempDir, RecordManager<T>) {
        let dir = TempDir::new().unwrap();
        let manager = RecordManager::open(dir.path().join(file_name)).unwrap();
        (dir, manager)
    }

    /// An upload manager with metadata and artifacts in a fresh temp dir.
    pub fn temp_uploads() -> (TempDir, UploadManager) {
        let dir = TempDir::new().unwrap();
        let uploads = UploadManager::open(
            dir.path().join("uploaded_files.json"),
            dir.path().join("uploads"),
        )
        .unwrap();
        (dir, uploads)
    }
}
