//! Timestamp parsing and formatting for user input and display.
//!
//! Every date the user types (project due dates, task start and end) and
//! every date shown back in tables uses one fixed textual layout:
//! `YYYY-MM-DD HH:mm:ss`, for example `2024-03-15 09:30:00`.
//!
//! ## Examples
//!
//! ```rust
//! use protask::libs::formatter::{format_timestamp, parse_timestamp};
//!
//! let ts = parse_timestamp("2024-03-15 09:30:00")?;
//! assert_eq!(format_timestamp(&ts), "2024-03-15 09:30:00");
//! # Ok::<(), protask::libs::error::TrackerError>(())
//! ```

use crate::libs::error::{TrackerError, TrackerResult};
use chrono::{Local, NaiveDateTime, Timelike};

/// The `strftime` layout for `YYYY-MM-DD HH:mm:ss`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a timestamp typed by the user.
///
/// The input must be exactly what [`format_timestamp`] would produce for the
/// parsed value. Padding, a missing or repeated separator, single-digit
/// fields, fractional seconds or a `T` separator are all a
/// [`TrackerError::Format`].
pub fn parse_timestamp(input: &str) -> TrackerResult<NaiveDateTime> {
    // chrono reads the space in the layout as "any amount of whitespace".
    NaiveDateTime::parse_from_str(input, DATETIME_FORMAT)
        .ok()
        .filter(|parsed| format_timestamp(parsed) == input)
        .ok_or_else(|| TrackerError::format(input))
}

/// Formats a timestamp with [`DATETIME_FORMAT`].
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DATETIME_FORMAT).to_string()
}

/// The current local time truncated to whole seconds.
///
/// Used as the default due date so the stored value round-trips through
/// [`DATETIME_FORMAT`] unchanged.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
