//! Useful links: url required; the note is free text or a page summary.

use lp_core::entities::Link;
use lp_core::ids::{PREFIX_LINK, generate_id};
use lp_core::timestamp::now_stamp;

use crate::error::StoreError;
use crate::helpers::require;
use crate::manager::RecordManager;
use crate::updates::link::LinkUpdate;

pub type LinkManager = RecordManager<Link>;

impl RecordManager<Link> {
    /// Append a new link and save.
    ///
    /// The caller decides the note; an empty note is stored as-is.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `url` is blank, or the save error.
    pub fn create(&mut self, url: &str, note: &str) -> Result<Link, StoreError> {
        let link = Link {
            id: generate_id(PREFIX_LINK)?,
            url: require("url", url)?,
            note: note.trim().to_string(),
            timestamp: now_stamp(),
        };
        self.append(link.clone())?;
        tracing::debug!(id = %link.id, url = %link.url, "link created");
        Ok(link)
    }

    /// Overwrite the given fields of the link at `index` and save.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for a bad index and
    /// `StoreError::Validation` if `url` would become blank.
    pub fn update(&mut self, index: usize, update: LinkUpdate) -> Result<Link, StoreError> {
        self.modify(index, |link| {
            if let Some(url) = &update.url {
                link.url = require("url", url)?;
            }
            if let Some(note) = &update.note {
                link.note = note.trim().to_string();
            }
            Ok(())
        })
    }
}
