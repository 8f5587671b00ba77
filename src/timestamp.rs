//! Embed timestamp validation.

use chrono::DateTime;

/// Returns whether `timestamp` is a valid RFC 3339 date-time string
/// (`2024-01-15T10:30:00Z`, `2024-01-15T10:30:00+02:00`).
///
/// The string is only validated, never normalized: a valid timestamp is
/// stored on the embed exactly as given.
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    DateTime::parse_from_rfc3339(timestamp).is_ok()
}
