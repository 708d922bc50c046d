//! Core color types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An RGBA color with 8-bit channels (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGBA channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Create a fully opaque color from RGB channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Create a color from widened integer channels.
    ///
    /// Channels are taken as `u32` so out-of-range input is rejected
    /// instead of silently truncated; every channel must be between
    /// 0 and 255.
    pub fn create(r: u32, g: u32, b: u32, a: u32) -> Result<Self, ColorError> {
        if r > 255 || g > 255 || b > 255 || a > 255 {
            return Err(ColorError::InvalidValue(format!(
                "RGBA channels must be between 0 and 255, got ({r}, {g}, {b}, {a})"
            )));
        }
        Ok(Color::new(r as u8, g as u8, b as u8, a as u8))
    }

    /// Create a color from normalized RGBA coordinates.
    ///
    /// Every coordinate must be between 0.0 and 1.0; coordinates are
    /// rounded to the nearest 8-bit channel value.
    pub fn from_normalized(r: f32, g: f32, b: f32, a: f32) -> Result<Self, ColorError> {
        if ![r, g, b, a].iter().all(|c| (0.0..=1.0).contains(c)) {
            return Err(ColorError::InvalidValue(format!(
                "RGBA coordinates must be normalized (between 0 and 1), got ({r}, {g}, {b}, {a})"
            )));
        }
        Ok(Color::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            (a * 255.0).round() as u8,
        ))
    }

    /// Parse an HTML color code (`#rrggbb` or `#rrggbbaa`)
    pub fn from_html(code: &str) -> Result<Self, ColorError> {
        code.strip_prefix('#')
            .and_then(Self::from_hex_digits)
            .ok_or_else(|| ColorError::InvalidValue(format!("invalid HTML color code: '{code}'")))
    }

    /// Parse a hex color code (`0xrrggbb` or `0xrrggbbaa`)
    pub fn from_hex(code: &str) -> Result<Self, ColorError> {
        code.strip_prefix("0x")
            .or_else(|| code.strip_prefix("0X"))
            .and_then(Self::from_hex_digits)
            .ok_or_else(|| ColorError::InvalidValue(format!("invalid hex color code: '{code}'")))
    }

    fn from_hex_digits(digits: &str) -> Option<Self> {
        // Length is checked in bytes, so reject non-ASCII input before
        // slicing into digit pairs.
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        let a = if digits.len() == 8 {
            u8::from_str_radix(&digits[6..8], 16).ok()?
        } else {
            255
        };
        Some(Color::new(r, g, b, a))
    }

    /// Create a color from a packed `0xRRGGBBAA` value
    pub const fn from_u32(value: u32) -> Self {
        Color {
            r: (value >> 24) as u8,
            g: (value >> 16) as u8,
            b: (value >> 8) as u8,
            a: value as u8,
        }
    }

    /// Create a color from 3 (RGB) or 4 (RGBA) bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ColorError> {
        match *bytes {
            [r, g, b] => Ok(Color::from_rgb(r, g, b)),
            [r, g, b, a] => Ok(Color::new(r, g, b, a)),
            _ => Err(ColorError::InvalidValue(format!(
                "expected 3 (RGB) or 4 (RGBA) bytes, got {}",
                bytes.len()
            ))),
        }
    }

    /// The RGB channels as a tuple, alpha excluded
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// All four RGBA channels as a tuple
    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// The HTML code: `#RRGGBB`, or `#RRGGBBAA` when `include_alpha`
    /// is set.
    ///
    /// When `include_alpha` is false the alpha segment is omitted no
    /// matter the alpha value.
    pub fn html(&self, include_alpha: bool) -> String {
        if include_alpha {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }

    /// Pack into a `0xRRGGBBAA` value
    pub const fn to_u32(&self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Normalized RGB coordinates (0.0-1.0), alpha excluded
    pub fn normalized_rgb(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Normalized RGBA coordinates (0.0-1.0)
    pub fn normalized_rgba(&self) -> (f32, f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }

    /// Common colors
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 255, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
    pub const CYAN: Color = Color::from_rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::from_rgb(255, 0, 255);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    /// Formats as the HTML code, with the alpha segment only for
    /// translucent colors
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html(self.a != 255))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_html(s)
            .or_else(|_| Color::from_hex(s))
            .map_err(|_| ColorError::InvalidValue(format!("invalid color string: '{s}'")))
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Color::from_rgb(c[0], c[1], c[2])
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::new(c[0], c[1], c[2], c[3])
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::from_rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::new(r, g, b, a)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::from_u32(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_u32()
    }
}

impl TryFrom<&[u8]> for Color {
    type Error = ColorError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Color::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let color = Color::create(255, 0, 0, 255).unwrap();
        assert_eq!(color.rgb(), (255, 0, 0));
        assert_eq!(color.html(false), "#FF0000");

        let color = Color::create(12, 34, 56, 78).unwrap();
        assert_eq!(color.rgba(), (12, 34, 56, 78));
    }

    #[test]
    fn test_create_out_of_range() {
        assert!(matches!(
            Color::create(256, 0, 0, 255),
            Err(ColorError::InvalidValue(_))
        ));
        assert!(matches!(
            Color::create(0, 0, 0, 1000),
            Err(ColorError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_from_normalized() {
        let color = Color::from_normalized(1.0, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(color, Color::RED);

        let color = Color::from_normalized(0.0, 1.0, 0.5, 1.0).unwrap();
        assert_eq!(color.rgb(), (0, 255, 128));

        assert!(Color::from_normalized(1.5, 0.0, 0.0, 1.0).is_err());
        assert!(Color::from_normalized(0.0, -0.1, 0.0, 1.0).is_err());
        assert!(Color::from_normalized(f32::NAN, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_html_formatting() {
        let color = Color::new(60, 84, 255, 255);
        assert_eq!(color.html(false), "#3C54FF");
        assert_eq!(color.html(true), "#3C54FFFF");

        let translucent = Color::new(238, 152, 254, 128);
        assert_eq!(translucent.html(false), "#EE98FE");
        assert_eq!(translucent.html(true), "#EE98FE80");
    }

    #[test]
    fn test_from_html() {
        assert_eq!(
            Color::from_html("#3C54FF").unwrap(),
            Color::from_rgb(0x3C, 0x54, 0xFF)
        );
        assert_eq!(
            Color::from_html("#ee98fe80").unwrap(),
            Color::new(0xEE, 0x98, 0xFE, 0x80)
        );

        assert!(Color::from_html("3C54FF").is_err());
        assert!(Color::from_html("#3C54F").is_err());
        assert!(Color::from_html("#3C54FG").is_err());
        assert!(Color::from_html("#").is_err());
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(
            Color::from_hex("0x404040").unwrap(),
            Color::from_rgb(0x40, 0x40, 0x40)
        );
        assert_eq!(
            Color::from_hex("0X33225599").unwrap(),
            Color::new(0x33, 0x22, 0x55, 0x99)
        );

        assert!(Color::from_hex("404040").is_err());
        assert!(Color::from_hex("0x4040").is_err());
    }

    #[test]
    fn test_packed_u32_round_trip() {
        let color = Color::from_u32(0x4566FFFF);
        assert_eq!(color.rgba(), (0x45, 0x66, 0xFF, 0xFF));
        assert_eq!(color.to_u32(), 0x4566FFFF);
        assert_eq!(u32::from(color), 0x4566FFFF);
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(Color::from_bytes(&[255, 255, 255]).unwrap(), Color::WHITE);
        assert_eq!(
            Color::from_bytes(&[0, 128, 0, 200]).unwrap(),
            Color::new(0, 128, 0, 200)
        );

        assert!(Color::from_bytes(&[1, 2]).is_err());
        assert!(Color::from_bytes(&[1, 2, 3, 4, 5]).is_err());
    }

    #[test]
    fn test_normalized_accessors() {
        let color = Color::from_rgb(255, 0, 51);
        let (r, g, b) = color.normalized_rgb();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-3);

        let (_, _, _, a) = color.normalized_rgba();
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_parse_and_display() {
        let color: Color = "#3C54FF".parse().unwrap();
        assert_eq!(color.to_string(), "#3C54FF");

        let color: Color = "0x33225599".parse().unwrap();
        assert_eq!(color.to_string(), "#33225599");

        assert!("not-a-code".parse::<Color>().is_err());
    }
}
