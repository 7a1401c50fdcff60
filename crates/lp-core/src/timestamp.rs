//! Creation timestamps in the fixed `YYYY-MM-DD HH:MM` format.

use chrono::Local;

/// Format every record timestamp is written in (local time, minute precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current local time rendered with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
