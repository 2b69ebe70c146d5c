//! Solid colors used for strokes, fills and the canvas background.

use std::fmt;
use std::str::FromStr;

use peniko::Color;
use thiserror::Error;

/// Error returned when a `#rrggbb` style color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),
    #[error("color {input:?} has {len} hex digits, expected 3, 6 or 8")]
    BadLength { input: String, len: usize },
    #[error("color {0:?} contains a non-hex digit")]
    InvalidDigit(String),
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const RED: Rgba8 = Rgba8::opaque(255, 0, 0);
    pub const GREEN: Rgba8 = Rgba8::opaque(0, 255, 0);
    pub const BLUE: Rgba8 = Rgba8::opaque(0, 0, 255);
    pub const WHITE: Rgba8 = Rgba8::opaque(255, 255, 255);
    pub const BLACK: Rgba8 = Rgba8::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba8 {
    type Err = ParseColorError;

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_string()))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))
        };
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..=i], 16)
                .map(|v| v * 17)
                .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))
        };

        match hex.len() {
            3 => Ok(Self::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            len => Err(ParseColorError::BadLength {
                input: s.to_string(),
                len,
            }),
        }
    }
}

impl From<Color> for Rgba8 {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba8> for Color {
    fn from(color: Rgba8) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The fixed color choices offered by the tool panel, in display order.
pub const PALETTE: [(&str, Rgba8); 3] = [
    ("Red", Rgba8::RED),
    ("Blue", Rgba8::BLUE),
    ("Green", Rgba8::GREEN),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!("#ff0000".parse::<Rgba8>(), Ok(Rgba8::RED));
        assert_eq!(" #00FF00 ".parse::<Rgba8>(), Ok(Rgba8::GREEN));
        assert_eq!(
            "#11223380".parse::<Rgba8>(),
            Ok(Rgba8::new(0x11, 0x22, 0x33, 0x80))
        );
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!("#fff".parse::<Rgba8>(), Ok(Rgba8::WHITE));
        assert_eq!("#00f".parse::<Rgba8>(), Ok(Rgba8::BLUE));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "ff0000".parse::<Rgba8>(),
            Err(ParseColorError::MissingHash(_))
        ));
        assert!(matches!(
            "#ff00".parse::<Rgba8>(),
            Err(ParseColorError::BadLength { len: 4, .. })
        ));
        assert!(matches!(
            "#gg0000".parse::<Rgba8>(),
            Err(ParseColorError::InvalidDigit(_))
        ));
        assert!(matches!(
            "#ééé".parse::<Rgba8>(),
            Err(ParseColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgba8::RED.to_hex(), "#ff0000");
        assert_eq!(Rgba8::new(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = Rgba8::BLUE.into();
        assert_eq!(Rgba8::from(color), Rgba8::BLUE);
    }

    #[test]
    fn test_palette_order() {
        let names: Vec<_> = PALETTE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Red", "Blue", "Green"]);
        assert_eq!(PALETTE[0].1, Rgba8::RED);
    }
}
