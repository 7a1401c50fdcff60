//! Where collections, uploads and exports live on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    ".launchpad".into()
}

fn default_ideas_file() -> String {
    "ideas.json".into()
}

fn default_links_file() -> String {
    "links.json".into()
}

fn default_uploads_file() -> String {
    "uploaded_files.json".into()
}

fn default_uploads_dir() -> String {
    "uploads".into()
}

fn default_ideas_export() -> String {
    "ideas_export.csv".into()
}

fn default_links_export() -> String {
    "links_export.csv".into()
}

/// File layout of a Launchpad project.
///
/// `data_dir` is resolved against the project root; every other entry is
/// resolved against `data_dir`. Absolute values are used as given.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_ideas_file")]
    pub ideas_file: String,

    #[serde(default = "default_links_file")]
    pub links_file: String,

    /// Metadata for uploaded artifacts.
    #[serde(default = "default_uploads_file")]
    pub uploads_file: String,

    /// Directory holding the uploaded artifacts themselves.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,

    #[serde(default = "default_ideas_export")]
    pub ideas_export: String,

    #[serde(default = "default_links_export")]
    pub links_export: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            ideas_file: default_ideas_file(),
            links_file: default_links_file(),
            uploads_file: default_uploads_file(),
            uploads_dir: default_uploads_dir(),
            ideas_export: default_ideas_export(),
            links_export: default_links_export(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.data_dir)
    }

    #[must_use]
    pub fn ideas_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.ideas_file)
    }

    #[must_use]
    pub fn links_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.links_file)
    }

    #[must_use]
    pub fn uploads_metadata_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.uploads_file)
    }

    #[must_use]
    pub fn uploads_dir_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.uploads_dir)
    }

    #[must_use]
    pub fn ideas_export_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.ideas_export)
    }

    #[must_use]
    pub fn links_export_path(&self, project_root: &Path) -> PathBuf {
        self.data_path(project_root).join(&self.links_export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_nest_under_data_dir() {
        let config = StorageConfig::default();
        let root = Path::new("/work/startup");
        assert_eq!(
            config.ideas_path(root),
            PathBuf::from("/work/startup/.launchpad/ideas.json")
        );
        assert_eq!(
            config.uploads_dir_path(root),
            PathBuf::from("/work/startup/.launchpad/uploads")
        );
        assert_eq!(
            config.links_export_path(root),
            PathBuf::from("/work/startup/.launchpad/links_export.csv")
        );
    }

    #[test]
    fn absolute_data_dir_ignores_project_root() {
        let config = StorageConfig {
            data_dir: "/var/lib/launchpad".into(),
            ..StorageConfig::default()
        };
        assert_eq!(
            config.links_path(Path::new("/anywhere")),
            PathBuf::from("/var/lib/launchpad/links.json")
        );
    }
}
