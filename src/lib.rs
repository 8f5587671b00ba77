//! # Discord Webhook Client
//!
//! Build, validate, and deliver messages to Discord incoming webhooks,
//! including rich embeds with fields, authors, footers, images, and accent
//! colors.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use discord_webhook::{Embed, Field, Message, Rgb, WebhookClient};
//!
//! let mut message = Message::new("Hello Discord!", "release-bot", "")?;
//!
//! let mut embed = Embed::new(
//!     "v1.2.0 released",
//!     "Bug fixes and performance improvements",
//!     "https://example.com/releases/v1.2.0",
//!     Rgb::new(88, 101, 242),
//! )?;
//! embed.add_field(Field::new("Fixed", "12 issues", true));
//! embed.set_timestamp("2024-01-15T10:30:00Z")?;
//! message.add_embed(embed);
//!
//! WebhookClient::new().send("https://discord.com/api/webhooks/id/token", &message)?;
//! # Ok::<(), discord_webhook::WebhookError>(())
//! ```
//!
//! ## Validation
//!
//! Constraints are checked at construction time, not at send time: content
//! over 2000 characters, colors outside the 24-bit range, and timestamps
//! that are not strict RFC 3339 are all rejected with a matchable
//! [`WebhookError`] variant before a payload ever exists.
//!
//! ## Serialization
//!
//! Optional attributes are omitted from the wire JSON entirely when unset,
//! matching what Discord's API expects.

pub mod client;
pub mod color;
pub mod error;
pub mod models;
pub mod timestamp;

pub use client::{WebhookClient, send};
pub use color::{Color, MAX_COLOR_VALUE, Rgb};
pub use error::WebhookError;
pub use models::{
    Author, Embed, Field, Footer, Image, MAX_CONTENT_LENGTH, Message, Thumbnail,
};
pub use timestamp::is_valid_timestamp;
