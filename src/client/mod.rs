//! # Webhook Delivery
//!
//! This module performs the terminal step of the pipeline: serializing a
//! finished [`Message`] and posting it to a Discord webhook URL.
//!
//! ## Features
//!
//! - **Single Request**: One blocking HTTP POST per send, no retries or
//!   backoff
//! - **Status Classification**: 200 and 204 are success, everything else is
//!   surfaced as [`WebhookError::RemoteRejected`] with the status and body
//! - **Error Handling**: Transport failures and encoder failures each map to
//!   their own error variant
//! - **Resource Efficiency**: The client reuses connections across sends
//!
//! ## Rate Limits
//!
//! Discord webhooks allow 30 requests per minute. This module does not
//! throttle; exceeding the limit simply comes back as a rejected response
//! for the caller to handle.
//!
//! ## Authentication
//!
//! No authentication header is added. The webhook URL itself, obtained from
//! the Discord channel settings, encodes the credential.

use reqwest::header::CONTENT_TYPE;
use tracing::{error, info};

use crate::error::WebhookError;
use crate::models::Message;

/// Client for delivering webhook messages to Discord.
///
/// Wraps a reusable blocking HTTP client. The webhook URL is supplied per
/// send, so one client can serve any number of webhooks.
///
/// ## Thread Safety
///
/// The client is `Clone` and safe to share across threads; the underlying
/// `reqwest` client uses an `Arc` internally, so clones share one
/// connection pool.
///
/// ## Example
///
/// ```rust,no_run
/// use discord_webhook::{Message, WebhookClient};
///
/// let client = WebhookClient::new();
/// let message = Message::new("Hello Discord!", "release-bot", "")?;
/// client.send("https://discord.com/api/webhooks/id/token", &message)?;
/// # Ok::<(), discord_webhook::WebhookError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WebhookClient {
    /// Reusable HTTP client handling connection pooling for repeated sends.
    client: reqwest::blocking::Client,
}

impl WebhookClient {
    /// Creates a client with the transport's default configuration.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Serializes `message` and posts it to `webhook_url`.
    ///
    /// Blocks the calling thread until Discord responds or the transport
    /// fails. There is no retry and no timeout beyond the transport's
    /// default; cancellation, if needed, must be layered on by the caller.
    ///
    /// ## Errors
    ///
    /// - [`WebhookError::Encoding`] if the payload fails to serialize
    /// - [`WebhookError::Transport`] for DNS, connection, or timeout
    ///   failures
    /// - [`WebhookError::RemoteRejected`] for any HTTP status other than
    ///   200 or 204, carrying the status code and the response body with
    ///   Discord's error description
    pub fn send(&self, webhook_url: &str, message: &Message) -> Result<(), WebhookError> {
        let body = serde_json::to_vec(message)?;

        let response = self
            .client
            .post(webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        match status {
            200 | 204 => {
                info!("webhook delivered (status {status})");
                Ok(())
            }
            _ => {
                let body = response.text().unwrap_or_default();
                error!("webhook rejected with status {status}: {body}");
                Err(WebhookError::RemoteRejected { status, body })
            }
        }
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience: builds a throwaway client and sends `message` to
/// `webhook_url`.
///
/// Prefer holding a [`WebhookClient`] when sending repeatedly, to reuse
/// connections.
pub fn send(webhook_url: &str, message: &Message) -> Result<(), WebhookError> {
    WebhookClient::new().send(webhook_url, message)
}
