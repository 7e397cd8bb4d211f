//! Color handling for legend markers and labels.
//!
//! Colors are plain RGBA values parsed from and serialized as CSS hex
//! strings, so legend configuration round-trips cleanly through JSON and
//! feeds Canvas 2D fill/stroke styles directly.

use serde::{Deserialize, Serialize};

use crate::error::{LegendviewError, Result};

/// Default series palette (Office theme accents), used by charts that do not
/// carry explicit series colors.
pub const DEFAULT_SERIES_COLORS: [Color; 5] = [
    Color::rgb(0x44, 0x72, 0xC4),
    Color::rgb(0xED, 0x7D, 0x31),
    Color::rgb(0xA5, 0xA5, 0xA5),
    Color::rgb(0xFF, 0xC0, 0x00),
    Color::rgb(0x5B, 0x9B, 0xD5),
];

/// An RGBA color. Serialized as a CSS hex string (`#RRGGBB` or `#RRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    /// Fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully transparent color is never drawn.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || LegendviewError::Color(s.to_string());

        let parse = |chunk: &str| u8::from_str_radix(chunk, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let mut it = hex.chars();
                let (r, g, b) = (
                    it.next().ok_or_else(invalid)?,
                    it.next().ok_or_else(invalid)?,
                    it.next().ok_or_else(invalid)?,
                );
                let expand = |c: char| parse(&format!("{c}{c}"));
                Ok(Self::rgb(expand(r)?, expand(g)?, expand(b)?))
            }
            6 => Ok(Self::rgb(
                parse(hex.get(0..2).ok_or_else(invalid)?)?,
                parse(hex.get(2..4).ok_or_else(invalid)?)?,
                parse(hex.get(4..6).ok_or_else(invalid)?)?,
            )),
            8 => Ok(Self::rgba(
                parse(hex.get(0..2).ok_or_else(invalid)?)?,
                parse(hex.get(2..4).ok_or_else(invalid)?)?,
                parse(hex.get(4..6).ok_or_else(invalid)?)?,
                parse(hex.get(6..8).ok_or_else(invalid)?)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// CSS string for Canvas 2D fill/stroke styles.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = LegendviewError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_css()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rrggbb() {
        let c = Color::from_hex("#4472C4").unwrap();
        assert_eq!(c, Color::rgb(0x44, 0x72, 0xC4));
        assert_eq!(c.to_css(), "#4472C4");
    }

    #[test]
    fn test_parse_short_form() {
        let c = Color::from_hex("#F0A").unwrap();
        assert_eq!(c, Color::rgb(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn test_parse_with_alpha() {
        let c = Color::from_hex("4472C480").unwrap();
        assert_eq!(c.a, 0x80);
        assert_eq!(c.to_css(), "#4472C480");
    }

    #[test]
    fn test_parse_invalid() {
        let test_cases = ["#GGGGGG", "#12345", "", "#", "#FF00FF0"];

        for input in test_cases {
            assert!(Color::from_hex(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_transparency() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(Color::rgba(10, 20, 30, 0).is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }

    #[test]
    fn test_serde_round_trip() {
        let c = Color::rgb(0xED, 0x7D, 0x31);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#ED7D31\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
