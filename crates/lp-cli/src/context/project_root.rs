use std::path::{Path, PathBuf};

/// Directory whose presence marks a launchpad project root.
pub const PROJECT_MARKER: &str = ".launchpad";

/// Walk upwards from `start` until a `.launchpad` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_MARKER).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
