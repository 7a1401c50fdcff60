use serde::{Deserialize, Serialize};

/// A startup idea from the idea box.
///
/// Older files stored ideas as `{ "text": ..., "timestamp": ... }`. Those
/// are normalized on read: `text` becomes the title and the missing fields
/// default to empty. The next save writes the current shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "IdeaRepr")]
pub struct Idea {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub timestamp: String,
}

/// Every shape an idea has been written in.
#[derive(Deserialize)]
struct IdeaRepr {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    timestamp: String,
}

impl From<IdeaRepr> for Idea {
    fn from(repr: IdeaRepr) -> Self {
        Self {
            id: repr.id,
            name: repr.name,
            title: repr.title.or(repr.text).unwrap_or_default(),
            description: repr.description,
            timestamp: repr.timestamp,
        }
    }
}
