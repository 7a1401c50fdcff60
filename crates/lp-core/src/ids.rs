//! Prefixed record IDs, e.g. `ida-a3f8b2c1`.

use crate::errors::CoreError;

pub const PREFIX_IDEA: &str = "ida";
pub const PREFIX_LINK: &str = "lnk";
pub const PREFIX_UPLOADED_FILE: &str = "upl";
pub const PREFIX_TESTING_NOTE: &str = "tst";

/// Generate a prefixed ID with 8 random hex characters.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;
    Ok(format_id(prefix, bytes))
}

fn format_id(prefix: &str, bytes: [u8; 4]) -> String {
    use std::fmt::Write;
    let mut id = format!("{prefix}-");
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    id
}
