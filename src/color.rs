//! Embed accent color resolution.
//!
//! Discord's wire format wants a single 24-bit packed integer, but callers
//! naturally think in hex strings (from design tools), raw palette integers,
//! or explicit channel triples. [`Color`] accepts all three and
//! [`Color::resolve`] normalizes them to the canonical integer.

use crate::error::WebhookError;

/// Largest value representable in 24 bits, the upper bound for a packed color.
pub const MAX_COLOR_VALUE: u32 = 16_777_215;

/// Largest value for a single RGB channel.
pub const MAX_CHANNEL_VALUE: u32 = 255;

/// An RGB color triple. Each channel must be in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Rgb {
    pub fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }
}

/// One of the three accepted color representations.
///
/// Constructors that take a color accept `impl Into<Color>`, so any of
/// `&str`, `String`, `u32`, or [`Rgb`] can be passed directly:
///
/// ```rust
/// use discord_webhook::{Color, Rgb};
///
/// assert_eq!(Color::from("#5865F2").resolve().unwrap(), 0x5865F2);
/// assert_eq!(Color::from(0x5865F2).resolve().unwrap(), 0x5865F2);
/// assert_eq!(Color::from(Rgb::new(88, 101, 242)).resolve().unwrap(), 0x5865F2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// 6 hex digits with an optional single leading `#`.
    Hex(String),
    /// A pre-packed 24-bit integer.
    Value(u32),
    /// An explicit channel triple.
    Rgb(Rgb),
}

impl Color {
    /// Resolve this color to the canonical packed integer in
    /// `[0, 16777215]`.
    ///
    /// Hex strings must be exactly 6 hex digits after stripping an optional
    /// single leading `#`; a wrong length and unparsable digits are reported
    /// as distinct errors. Integer values are accepted verbatim if they fit
    /// in 24 bits. RGB triples are packed as `(r << 16) | (g << 8) | b`
    /// after every channel passes the `[0, 255]` range check.
    pub fn resolve(&self) -> Result<u32, WebhookError> {
        match self {
            Color::Hex(hex) => hex_to_color_value(hex),
            Color::Value(value) => {
                if *value > MAX_COLOR_VALUE {
                    return Err(WebhookError::ColorOutOfRange { value: *value });
                }
                Ok(*value)
            }
            Color::Rgb(rgb) => rgb_to_color_value(*rgb),
        }
    }
}

impl From<&str> for Color {
    fn from(hex: &str) -> Self {
        Color::Hex(hex.to_string())
    }
}

impl From<String> for Color {
    fn from(hex: String) -> Self {
        Color::Hex(hex)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::Value(value)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

fn hex_to_color_value(hex: &str) -> Result<u32, WebhookError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(WebhookError::InvalidHexColor {
            value: hex.to_string(),
        });
    }

    u32::from_str_radix(digits, 16).map_err(|source| WebhookError::UnparsableHexColor {
        value: hex.to_string(),
        source,
    })
}

fn rgb_to_color_value(rgb: Rgb) -> Result<u32, WebhookError> {
    if rgb.r > MAX_CHANNEL_VALUE || rgb.g > MAX_CHANNEL_VALUE || rgb.b > MAX_CHANNEL_VALUE {
        return Err(WebhookError::RgbChannelOutOfRange {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        });
    }

    Ok((rgb.r << 16) | (rgb.g << 8) | rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_with_and_without_hash() {
        assert_eq!(Color::from("5865F2").resolve().unwrap(), 0x5865F2);
        assert_eq!(Color::from("#5865F2").resolve().unwrap(), 0x5865F2);
        assert_eq!(Color::from("#ffffff").resolve().unwrap(), MAX_COLOR_VALUE);
        assert_eq!(Color::from("000000").resolve().unwrap(), 0);
    }

    #[test]
    fn test_hex_wrong_length() {
        for bad in ["", "#", "fff", "#fff", "5865F21", "#5865F21", "##5865F2"] {
            let err = Color::from(bad).resolve().unwrap_err();
            assert!(
                matches!(err, WebhookError::InvalidHexColor { .. }),
                "expected length error for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_hex_bad_digits() {
        let err = Color::from("#zzzzzz").resolve().unwrap_err();
        assert!(matches!(err, WebhookError::UnparsableHexColor { .. }));
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(Color::from(0u32).resolve().unwrap(), 0);
        assert_eq!(
            Color::from(MAX_COLOR_VALUE).resolve().unwrap(),
            MAX_COLOR_VALUE
        );

        let err = Color::from(MAX_COLOR_VALUE + 1).resolve().unwrap_err();
        assert!(matches!(
            err,
            WebhookError::ColorOutOfRange {
                value: 16_777_216
            }
        ));
    }

    #[test]
    fn test_rgb_packing() {
        assert_eq!(
            Color::from(Rgb::new(0x58, 0x65, 0xF2)).resolve().unwrap(),
            0x5865F2
        );
        assert_eq!(Color::from(Rgb::new(255, 255, 255)).resolve().unwrap(), MAX_COLOR_VALUE);
        assert_eq!(Color::from(Rgb::new(0, 0, 0)).resolve().unwrap(), 0);
    }

    #[test]
    fn test_rgb_channel_out_of_range() {
        for rgb in [Rgb::new(256, 0, 0), Rgb::new(0, 256, 0), Rgb::new(0, 0, 256)] {
            let err = Color::from(rgb).resolve().unwrap_err();
            assert!(matches!(err, WebhookError::RgbChannelOutOfRange { .. }));
        }
    }
}
