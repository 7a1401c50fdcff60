use serde::{Deserialize, Serialize};

/// A bookmarked URL with a note or an auto-generated page summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    #[serde(default)]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub timestamp: String,
}
