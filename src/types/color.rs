//! 32-bit ARGB color for annotation entities

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TraceError};

/// A color packed as `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Create a color from a packed `0xAARRGGBB` value
    pub const fn from_argb_u32(value: u32) -> Self {
        Color(value)
    }

    /// Create a color from its four channels
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create an opaque color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::from_argb(0xFF, r, g, b)
    }

    /// Packed `0xAARRGGBB` value
    pub const fn to_argb_u32(&self) -> u32 {
        self.0
    }

    /// Alpha channel
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Same color with the alpha channel replaced
    pub const fn with_alpha(&self, alpha: u8) -> Self {
        Color((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Common color constants
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_8000);
    pub const LIME: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const YELLOW: Color = Color(0xFFFF_FF00);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Formats as `#AARRGGBB` with uppercase hex digits
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = TraceError;

    /// Parse a `#AARRGGBB` token; hex digits are case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        s.strip_prefix('#')
            .filter(|hex| !hex.is_empty() && hex.len() <= 8)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .map(Color)
            .ok_or_else(|| TraceError::InvalidColor {
                token: s.to_string(),
            })
    }
}
