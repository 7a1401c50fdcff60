use serde::{Deserialize, Serialize};

/// Metadata for an uploaded artifact. The bytes live at `path`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    #[serde(default)]
    pub id: String,
    pub filename: String,
    pub path: String,
    #[serde(default)]
    pub timestamp: String,
}
