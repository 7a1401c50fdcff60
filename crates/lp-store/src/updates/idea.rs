//! Idea update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct IdeaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IdeaUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.title.is_none() && self.description.is_none()
    }
}

pub struct IdeaUpdateBuilder(IdeaUpdate);

impl IdeaUpdateBuilder {
    pub fn new() -> Self {
        Self(IdeaUpdate::default())
    }

    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    pub fn description(mut self, val: impl Into<String>) -> Self {
        self.0.description = Some(val.into());
        self
    }

    pub fn build(self) -> IdeaUpdate {
        self.0
    }
}
