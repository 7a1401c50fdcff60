//! Testing feedback log: kept for the current session only.

use lp_core::entities::TestingNote;
use lp_core::ids::{PREFIX_TESTING_NOTE, generate_id};
use lp_core::timestamp::now_stamp;

use crate::error::StoreError;
use crate::helpers::require;
use crate::manager::RecordManager;

pub type TestingNoteLog = RecordManager<TestingNote>;

impl RecordManager<TestingNote> {
    /// Log a note for this session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if `note` is blank.
    pub fn create(&mut self, note: &str) -> Result<TestingNote, StoreError> {
        let note = TestingNote {
            id: generate_id(PREFIX_TESTING_NOTE)?,
            note: require("note", note)?,
            timestamp: now_stamp(),
        };
        self.append(note.clone())?;
        Ok(note)
    }

    /// Replace the text of the note at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for a bad index and
    /// `StoreError::Validation` if `note` is blank.
    pub fn update(&mut self, index: usize, note: &str) -> Result<TestingNote, StoreError> {
        self.modify(index, |entry| {
            entry.note = require("note", note)?;
            Ok(())
        })
    }

    /// Notes newest first, as the feedback log shows them.
    #[must_use]
    pub fn newest_first(&self) -> Vec<TestingNote> {
        self.records().iter().rev().cloned().collect()
    }
}
