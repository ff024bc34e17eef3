//! 8-bit sRGB color with alpha.
//!
//! Serializes as a hex string, `"#rrggbb"` when opaque and `"#rrggbbaa"`
//! otherwise, which is the form style documents carry around.
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// sRGB color with 8-bit components and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from `r`, `g`, `b`.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from `r`, `g`, `b`, `a`.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (leading `#` optional, case
    /// insensitive).
    pub fn from_hex(hex: &str) -> Result<Color> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(Error::InvalidConfig(format!(
                "color must be 6 or 8 hex digits, got '{hex}'"
            )));
        }
        let component = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(&hex[range.clone()], 16).map_err(|_| {
                Error::InvalidConfig(format!("invalid hex component '{}'", &hex[range]))
            })
        };
        let r = component(0..2)?;
        let g = component(2..4)?;
        let b = component(4..6)?;
        let a = if hex.len() == 8 { component(6..8)? } else { 255 };
        Ok(Color { r, g, b, a })
    }

    /// Formats as `"#rrggbb"`, or `"#rrggbbaa"` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Hex string of the opaque part only, `"#rrggbb"`.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Components as an RGBA byte array.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with a replaced alpha.
    pub fn with_alpha(mut self, a: u8) -> Self {
        self.a = a;
        self
    }
}

#[cfg(feature = "serde")]
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_opaque_color() {
        let c = Color::from_hex("#1a2b3c").unwrap();
        assert_eq!(c, Color::rgb(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn from_hex_parses_alpha_and_tolerates_missing_hash() {
        let c = Color::from_hex("1a2b3c80").unwrap();
        assert_eq!(c, Color::rgba(0x1a, 0x2b, 0x3c, 0x80));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        assert_eq!(
            Color::from_hex("#AABBCC").unwrap(),
            Color::from_hex("#aabbcc").unwrap()
        );
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#aabbccddee").is_err());
        // Multi-byte input must error, not panic on a byte slice.
        assert!(Color::from_hex("#ааbbcc").is_err());
    }

    #[test]
    fn to_hex_round_trips() {
        for hex in ["#c0ffee", "#00000080", "#ffffff"] {
            assert_eq!(Color::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn opaque_colors_omit_the_alpha_digits() {
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::rgba(1, 2, 3, 254).to_hex(), "#010203fe");
    }

    #[test]
    fn opacity_is_alpha_over_255() {
        assert_eq!(Color::rgb(0, 0, 0).opacity(), 1.0);
        assert!((Color::rgba(0, 0, 0, 128).opacity() - 128.0 / 255.0).abs() < 1e-6);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_strings() {
        let c = Color::rgba(0xc0, 0xff, 0xee, 0x80);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#c0ffee80\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_invalid_hex() {
        let result: std::result::Result<Color, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }
}
