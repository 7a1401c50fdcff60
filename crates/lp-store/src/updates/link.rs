//! Link update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LinkUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.url.is_none() && self.note.is_none()
    }
}

pub struct LinkUpdateBuilder(LinkUpdate);

impl LinkUpdateBuilder {
    pub fn new() -> Self {
        Self(LinkUpdate::default())
    }

    pub fn url(mut self, val: impl Into<String>) -> Self {
        self.0.url = Some(val.into());
        self
    }

    pub fn note(mut self, val: impl Into<String>) -> Self {
        self.0.note = Some(val.into());
        self
    }

    pub fn build(self) -> LinkUpdate {
        self.0
    }
}
