//! Webhook payload types and builder operations.
//!
//! The entity graph mirrors Discord's webhook schema: a [`Message`] holds
//! plain text content and an ordered list of [`Embed`]s, and each embed owns
//! its optional footer, image, thumbnail, author, and ordered fields.
//!
//! Every optional attribute is stored as an explicit `Option` and only
//! serialized when set, so the wire JSON never carries empty strings or
//! zero dimensions. The constructors map empty-string and zero inputs to
//! `None`, making "absent" a decision taken once at construction time. The
//! one deliberate exception is the embed color: a resolved color is always
//! stored, so an explicit `0x000000` reaches the wire instead of being
//! conflated with "no color accent".

use serde::Serialize;

use crate::color::Color;
use crate::error::WebhookError;
use crate::timestamp::is_valid_timestamp;

/// Discord's character limit for message content.
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// A webhook message: optional content, display-name override, avatar
/// override, and rich embeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

/// A rich embed rendered distinctly from the plain text content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

/// Footer section of an embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

/// Full-size image of an embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Small thumbnail image shown in the embed corner. Structurally identical
/// to [`Image`] but serialized into a different field of the embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thumbnail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Author section of an embed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
}

/// A name/value pair in the embed's fields section. Name and value are
/// always serialized, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

/// Empty strings mean "not set" at the API boundary.
fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Zero dimensions mean "not set" at the API boundary.
fn non_zero(value: u32) -> Option<u32> {
    if value == 0 { None } else { Some(value) }
}

impl Message {
    /// Create a message with the given content, username override, and
    /// avatar URL override. Pass empty strings for anything you do not
    /// want to set.
    ///
    /// Fails with [`WebhookError::ContentTooLong`] when the content exceeds
    /// 2000 characters.
    pub fn new(
        content: impl Into<String>,
        username: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Result<Self, WebhookError> {
        let content = content.into();
        let length = content.chars().count();
        if length > MAX_CONTENT_LENGTH {
            return Err(WebhookError::ContentTooLong { length });
        }

        Ok(Self {
            content: non_empty(content),
            username: non_empty(username.into()),
            avatar_url: non_empty(avatar_url.into()),
            embeds: Vec::new(),
        })
    }

    /// Append an embed. Embeds render in the order they were added.
    pub fn add_embed(&mut self, embed: Embed) {
        self.embeds.push(embed);
    }
}

impl Embed {
    /// Create an embed with a title, description, URL, and accent color.
    ///
    /// The color can be given as a hex string, a packed integer, or an
    /// [`Rgb`](crate::Rgb) triple; it is resolved to the canonical 24-bit
    /// integer here, and any resolution failure is propagated.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        color: impl Into<Color>,
    ) -> Result<Self, WebhookError> {
        let color = color.into().resolve()?;

        Ok(Self {
            title: non_empty(title.into()),
            description: non_empty(description.into()),
            url: non_empty(url.into()),
            color: Some(color),
            timestamp: None,
            footer: None,
            image: None,
            thumbnail: None,
            author: None,
            fields: Vec::new(),
        })
    }

    /// Validate and set the embed timestamp.
    ///
    /// The string must be strict RFC 3339; on failure the previously stored
    /// timestamp is left untouched.
    pub fn set_timestamp(&mut self, timestamp: &str) -> Result<(), WebhookError> {
        if !is_valid_timestamp(timestamp) {
            return Err(WebhookError::InvalidTimestamp {
                value: timestamp.to_string(),
            });
        }

        self.timestamp = Some(timestamp.to_string());
        Ok(())
    }

    /// Set the footer, replacing any previous one.
    pub fn set_footer(&mut self, footer: Footer) {
        self.footer = Some(footer);
    }

    /// Set the image, replacing any previous one.
    pub fn set_image(&mut self, image: Image) {
        self.image = Some(image);
    }

    /// Set the thumbnail, replacing any previous one.
    pub fn set_thumbnail(&mut self, thumbnail: Thumbnail) {
        self.thumbnail = Some(thumbnail);
    }

    /// Set the author, replacing any previous one.
    pub fn set_author(&mut self, author: Author) {
        self.author = Some(author);
    }

    /// Append a field. Fields render in the order they were added.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append multiple fields, preserving their order.
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = Field>) {
        self.fields.extend(fields);
    }
}

impl Footer {
    pub fn new(
        text: impl Into<String>,
        icon_url: impl Into<String>,
        proxy_icon_url: impl Into<String>,
    ) -> Self {
        Self {
            text: non_empty(text.into()),
            icon_url: non_empty(icon_url.into()),
            proxy_icon_url: non_empty(proxy_icon_url.into()),
        }
    }
}

impl Image {
    /// Create an image. Height and width are passed through as given; zero
    /// means unset.
    pub fn new(
        url: impl Into<String>,
        proxy_url: impl Into<String>,
        height: u32,
        width: u32,
    ) -> Self {
        Self {
            url: non_empty(url.into()),
            proxy_url: non_empty(proxy_url.into()),
            height: non_zero(height),
            width: non_zero(width),
        }
    }
}

impl Thumbnail {
    /// Create a thumbnail. Height and width are passed through as given;
    /// zero means unset.
    pub fn new(
        url: impl Into<String>,
        proxy_url: impl Into<String>,
        height: u32,
        width: u32,
    ) -> Self {
        Self {
            url: non_empty(url.into()),
            proxy_url: non_empty(proxy_url.into()),
            height: non_zero(height),
            width: non_zero(width),
        }
    }
}

impl Author {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        icon_url: impl Into<String>,
        proxy_icon_url: impl Into<String>,
    ) -> Self {
        Self {
            name: non_empty(name.into()),
            url: non_empty(url.into()),
            icon_url: non_empty(icon_url.into()),
            proxy_icon_url: non_empty(proxy_icon_url.into()),
        }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use serde_json::{Value, json};

    #[test]
    fn test_content_at_limit_succeeds() {
        let content = "a".repeat(MAX_CONTENT_LENGTH);
        let message = Message::new(content.clone(), "", "").unwrap();
        assert_eq!(message.content.as_deref(), Some(content.as_str()));
    }

    #[test]
    fn test_content_over_limit_fails() {
        let content = "a".repeat(MAX_CONTENT_LENGTH + 1);
        let err = Message::new(content, "", "").unwrap_err();
        assert!(matches!(err, WebhookError::ContentTooLong { length: 2001 }));
    }

    #[test]
    fn test_content_limit_counts_characters_not_bytes() {
        // 2000 two-byte characters still fit.
        let content = "é".repeat(MAX_CONTENT_LENGTH);
        assert!(Message::new(content, "", "").is_ok());
    }

    #[test]
    fn test_field_order_is_preserved() {
        let mut embed = Embed::new("t", "d", "", 0u32).unwrap();
        embed.add_field(Field::new("f1", "v1", false));
        embed.add_fields(vec![
            Field::new("f2", "v2", true),
            Field::new("f3", "v3", false),
        ]);

        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["f1", "f2", "f3"]);
    }

    #[test]
    fn test_invalid_timestamp_leaves_embed_unchanged() {
        let mut embed = Embed::new("t", "d", "", 0u32).unwrap();
        embed.set_timestamp("2024-01-15T10:30:00Z").unwrap();

        let err = embed.set_timestamp("not-a-date").unwrap_err();
        assert!(matches!(err, WebhookError::InvalidTimestamp { .. }));
        assert_eq!(embed.timestamp.as_deref(), Some("2024-01-15T10:30:00Z"));
    }

    #[test]
    fn test_set_footer_replaces_previous() {
        let mut embed = Embed::new("t", "", "", 0u32).unwrap();
        embed.set_footer(Footer::new("first", "", ""));
        embed.set_footer(Footer::new("second", "", ""));
        assert_eq!(embed.footer.unwrap().text.as_deref(), Some("second"));
    }

    #[test]
    fn test_invalid_color_rejected_at_construction() {
        assert!(Embed::new("t", "d", "", "#nothex").is_err());
        assert!(Embed::new("t", "d", "", 16_777_216u32).is_err());
    }

    #[test]
    fn test_empty_optionals_are_omitted_from_wire() {
        let message = Message::new("hello", "", "").unwrap();
        let wire = serde_json::to_value(&message).unwrap();
        assert_eq!(wire, json!({ "content": "hello" }));
    }

    #[test]
    fn test_explicit_black_color_is_serialized() {
        let embed = Embed::new("t", "", "", "#000000").unwrap();
        let wire = serde_json::to_value(&embed).unwrap();
        assert_eq!(wire, json!({ "title": "t", "color": 0 }));
    }

    #[test]
    fn test_field_name_and_value_always_present() {
        let wire = serde_json::to_value(Field::new("", "", false)).unwrap();
        assert_eq!(wire, json!({ "name": "", "value": "" }));

        let wire = serde_json::to_value(Field::new("n", "v", true)).unwrap();
        assert_eq!(wire, json!({ "name": "n", "value": "v", "inline": true }));
    }

    #[test]
    fn test_wire_round_trip_preserves_structure() {
        let mut message =
            Message::new("release notes", "bot", "https://example.com/a.png").unwrap();
        let mut embed = Embed::new(
            "v1.2.0",
            "Bug fixes",
            "https://example.com/releases",
            Rgb::new(88, 101, 242),
        )
        .unwrap();
        embed.add_field(Field::new("Fixed", "12", true));
        embed.add_field(Field::new("Known issues", "none", false));
        message.add_embed(embed);

        let text = serde_json::to_string(&message).unwrap();
        let wire: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(wire["content"], "release notes");
        assert_eq!(wire["username"], "bot");
        assert_eq!(wire["avatar_url"], "https://example.com/a.png");
        assert_eq!(wire["embeds"][0]["title"], "v1.2.0");
        assert_eq!(wire["embeds"][0]["color"], 0x5865F2);
        assert_eq!(wire["embeds"][0]["fields"][0]["name"], "Fixed");
        assert_eq!(wire["embeds"][0]["fields"][0]["inline"], true);
        assert_eq!(wire["embeds"][0]["fields"][1]["name"], "Known issues");
        assert_eq!(wire["embeds"][0]["fields"].as_array().map(Vec::len), Some(2));
    }
}
