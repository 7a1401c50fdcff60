//! Idea box: name and title required, description optional.

use lp_core::entities::Idea;
use lp_core::ids::{PREFIX_IDEA, generate_id};
use lp_core::timestamp::now_stamp;

use crate::error::StoreError;
use crate::helpers::require;
use crate::manager::RecordManager;
use crate::updates::idea::IdeaUpdate;

pub type IdeaManager = RecordManager<Idea>;

impl RecordManager<Idea> {
    /// Append a new idea and save.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `name` or `title` is blank, or the
    /// save error.
    pub fn create(&mut self, name: &str, title: &str, description: &str) -> Result<Idea, StoreError> {
        let idea = Idea {
            id: generate_id(PREFIX_IDEA)?,
            name: require("name", name)?,
            title: require("title", title)?,
            description: description.trim().to_string(),
            timestamp: now_stamp(),
        };
        self.append(idea.clone())?;
        tracing::debug!(id = %idea.id, "idea created");
        Ok(idea)
    }

    /// Overwrite the given fields of the idea at `index` and save.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for a bad index and
    /// `StoreError::Validation` if `name` or `title` would become blank.
    pub fn update(&mut self, index: usize, update: IdeaUpdate) -> Result<Idea, StoreError> {
        self.modify(index, |idea| {
            if let Some(name) = &update.name {
                idea.name = require("name", name)?;
            }
            if let Some(title) = &update.title {
                idea.title = require("title", title)?;
            }
            if let Some(description) = &update.description {
                idea.description = description.trim().to_string();
            }
            Ok(())
        })
    }
}
