//! Cross-cutting error types for Launchpad.
//!
//! Domain-specific errors (e.g., `StoreError`, `ConfigError`) are defined in
//! their respective crates. `anyhow` takes over in `lp-cli` where all crate
//! errors converge.

use thiserror::Error;

/// Errors that can be raised by any Launchpad crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("Record not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
