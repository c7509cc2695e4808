//! Default appearance of newly created entities

use crate::types::{Color, Font};

/// Stroke size and color given to a new entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyle {
    /// Stroke size in device units
    pub size: u32,
    /// Stroke and fill color
    pub color: Color,
}

impl VariantStyle {
    /// Wires: size 4, red
    pub const WIRE: VariantStyle = VariantStyle {
        size: 4,
        color: Color::RED,
    };

    /// Pins: size 2, blue
    pub const PIN: VariantStyle = VariantStyle {
        size: 2,
        color: Color::BLUE,
    };

    /// Text labels: size 1, yellow
    pub const TEXT: VariantStyle = VariantStyle {
        size: 1,
        color: Color::YELLOW,
    };
}

/// Defaults used by tools and by the importer when building entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDefaults {
    /// Style of new wires
    pub wire: VariantStyle,
    /// Style of new pins
    pub pin: VariantStyle,
    /// Style of new text labels
    pub text: VariantStyle,
    /// Initial content of a placed text label
    pub text_content: String,
    /// Font of new and imported text labels
    pub font: Font,
}

impl Default for EntityDefaults {
    fn default() -> Self {
        EntityDefaults {
            wire: VariantStyle::WIRE,
            pin: VariantStyle::PIN,
            text: VariantStyle::TEXT,
            text_content: "TEXT".to_string(),
            font: Font::default(),
        }
    }
}
