//! Font reference carried by text entities

use std::fmt;

/// Font used to outline text glyphs.
///
/// Only a reference: glyph shaping is done by the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Font family name
    pub family: String,
    /// Em size in device units
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl Font {
    /// Create a regular font of the given family and size
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Font {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }

    /// Set the bold flag
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the italic flag
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::new("Sans", 12.0)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}pt", self.family, self.size)?;
        if self.bold {
            write!(f, ", Bold")?;
        }
        if self.italic {
            write!(f, ", Italic")?;
        }
        Ok(())
    }
}
