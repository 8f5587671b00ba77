//! Error types for payload validation and webhook delivery.
//!
//! Every fallible operation in this crate returns [`WebhookError`]. Each
//! validation failure has its own variant so callers can match on the exact
//! cause instead of parsing message strings.

use std::num::ParseIntError;

use thiserror::Error;

/// All failures that can occur while building or sending a webhook message.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Message content exceeds Discord's 2000 character limit.
    #[error("the length of the content cannot exceed 2000 characters (your length: {length})")]
    ContentTooLong {
        /// Character count of the rejected content.
        length: usize,
    },

    /// Hex color string is not 6 hex digits with an optional leading `#`.
    #[error("invalid hex color format: {value:?}")]
    InvalidHexColor {
        /// The rejected input.
        value: String,
    },

    /// Hex color string had the right length but contained non-hex digits.
    #[error("error parsing hex color {value:?}: {source}")]
    UnparsableHexColor {
        /// The rejected input.
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Integer color outside the 24-bit range.
    #[error("color value {value} out of range: you can only use numbers from 0 to 16777215")]
    ColorOutOfRange {
        /// The rejected value.
        value: u32,
    },

    /// One or more RGB channels outside [0, 255].
    #[error("rgb color ({r}, {g}, {b}) out of range: each channel can only be from 0 to 255")]
    RgbChannelOutOfRange { r: u32, g: u32, b: u32 },

    /// Timestamp string failed strict RFC 3339 parsing.
    #[error("timestamp {value:?} is not a valid RFC 3339 timestamp")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
    },

    /// Payload failed to serialize to JSON.
    #[error("failed to encode webhook payload: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The HTTP request never completed (DNS, connection, timeout).
    #[error("failed to post to webhook endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a status other than 200 or 204.
    #[error("webhook rejected with status {status}: {body}")]
    RemoteRejected {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, which Discord fills with a machine-readable
        /// error description.
        body: String,
    },
}
