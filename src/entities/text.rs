//! Text entity: a rotated label

use super::{EntityCommon, VariantStyle};
use crate::properties::{PropertyDescriptor, PropertyValue};
use crate::render::{highlight_width, CoordinateTransform, GlyphRun, Pen, Surface, HIGHLIGHT_ALPHA};
use crate::types::{normalize_angle, Font, LayerAffinity, Point};

/// A single-line text label
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Shared attributes (layer, net, component, size, color)
    pub common: EntityCommon,
    /// Label content; must not contain spaces or quotes to survive saving
    pub text: String,
    /// Rotation in degrees, kept in `[0, 360)`
    angle: f64,
    /// Anchor point; rotation happens about it
    pub location: Point,
    /// Font the glyph outline is built from
    pub font: Font,
}

impl Text {
    /// Leading token of a persisted text line
    pub const TYPE_TAG: &'static str = "TEXT";

    /// Create a `TEXT` label on `layer` with the default text style
    pub fn new(layer: LayerAffinity) -> Self {
        Text::with_style(layer, VariantStyle::TEXT)
    }

    /// Create a `TEXT` label on `layer` with an explicit size and color
    pub fn with_style(layer: LayerAffinity, style: VariantStyle) -> Self {
        Text {
            common: EntityCommon::styled(layer, style),
            text: "TEXT".to_string(),
            angle: 0.0,
            location: Point::ORIGIN,
            font: Font::default(),
        }
    }

    /// Set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Rotation in degrees, in `[0, 360)`
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Set the rotation; the value is reduced into `[0, 360)`
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = normalize_angle(angle);
    }

    /// Rotate by `delta` degrees
    pub fn rotate(&mut self, delta: f64) {
        self.set_angle(self.angle + delta);
    }

    /// Fill the glyph outline, with a widened translucent pass first when `highlighted`
    pub fn draw(
        &self,
        target_layer: LayerAffinity,
        transform: &dyn CoordinateTransform,
        surface: &mut dyn Surface,
        highlighted: bool,
    ) {
        if !self.common.layer.is_drawn_on(target_layer) {
            return;
        }
        let run = GlyphRun {
            text: &self.text,
            origin: transform.to_device(self.location),
            angle: self.angle,
            font: &self.font,
        };

        if highlighted {
            let halo = Pen::new(
                self.common.color.with_alpha(HIGHLIGHT_ALPHA),
                highlight_width(self.common.size),
            );
            surface.fill_glyph_path(&run, halo);
        }

        surface.fill_glyph_path(&run, Pen::new(self.common.color, 0.0));
    }
}

impl Default for Text {
    fn default() -> Self {
        Text::new(LayerAffinity::BOTH)
    }
}

fn get_text(t: &Text) -> PropertyValue {
    PropertyValue::String(t.text.clone())
}

fn set_text(t: &mut Text, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::String(s) => {
            t.text = s.clone();
            true
        }
        _ => false,
    }
}

fn get_font(t: &Text) -> PropertyValue {
    PropertyValue::Font(t.font.clone())
}

fn set_font(t: &mut Text, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::Font(font) => {
            t.font = font.clone();
            true
        }
        _ => false,
    }
}

fn get_angle(t: &Text) -> PropertyValue {
    PropertyValue::Float(t.angle)
}

fn set_angle(t: &mut Text, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::Float(a) => {
            t.set_angle(*a);
            true
        }
        _ => false,
    }
}

/// Text-specific properties, appended after the base ones
pub const TEXT_PROPERTIES: &[PropertyDescriptor<Text>] = &[
    PropertyDescriptor {
        name: "Text",
        category: "Text",
        read_only: false,
        get: get_text,
        set: set_text,
    },
    PropertyDescriptor {
        name: "Font",
        category: "Text",
        read_only: false,
        get: get_font,
        set: set_font,
    },
    PropertyDescriptor {
        name: "Angle",
        category: "Text",
        read_only: false,
        get: get_angle,
        set: set_angle,
    },
];
