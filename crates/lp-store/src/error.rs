//! Store error types for lp-store.

use lp_core::errors::CoreError;
use thiserror::Error;

/// Errors from collection, artifact and export operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Position out of range, unknown id, or missing artifact.
    #[error("{entity_type} {id} not found")]
    NotFound { entity_type: String, id: String },

    /// A required field was blank.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An export row lacks one of the requested columns.
    #[error("Record {row} has no field '{field}'")]
    MissingField { row: usize, field: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn not_found(entity_type: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }
}
