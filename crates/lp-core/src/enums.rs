//! Record kinds tracked by Launchpad.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{PREFIX_IDEA, PREFIX_LINK, PREFIX_TESTING_NOTE, PREFIX_UPLOADED_FILE};

/// The four collections a Launchpad project keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Idea,
    Link,
    UploadedFile,
    TestingNote,
}

impl RecordKind {
    /// Return the `snake_case` name used in messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Link => "link",
            Self::UploadedFile => "uploaded_file",
            Self::TestingNote => "testing_note",
        }
    }

    /// ID prefix for records of this kind.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Idea => PREFIX_IDEA,
            Self::Link => PREFIX_LINK,
            Self::UploadedFile => PREFIX_UPLOADED_FILE,
            Self::TestingNote => PREFIX_TESTING_NOTE,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&RecordKind::UploadedFile).unwrap();
        assert_eq!(json, "\"uploaded_file\"");
    }

    #[test]
    fn prefixes_are_distinct() {
        let prefixes = [
            RecordKind::Idea.id_prefix(),
            RecordKind::Link.id_prefix(),
            RecordKind::UploadedFile.id_prefix(),
            RecordKind::TestingNote.id_prefix(),
        ];
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
