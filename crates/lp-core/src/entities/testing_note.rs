use serde::{Deserialize, Serialize};

/// Testing feedback logged during a session. Never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestingNote {
    pub id: String,
    pub note: String,
    pub timestamp: String,
}
