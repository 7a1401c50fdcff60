//! Shared input checks for the repos.

use crate::error::StoreError;

/// Trim `value` and reject it if nothing is left.
pub(crate) fn require(field: &str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}
