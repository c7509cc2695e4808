//! Pin entity: a numbered component pin on a net

use super::{EntityCommon, VariantStyle};
use crate::properties::{PropertyDescriptor, PropertyValue};
use crate::render::{highlight_width, CoordinateTransform, Pen, Surface, HIGHLIGHT_ALPHA};
use crate::types::{DeviceRect, LayerAffinity, Point};

/// Half-size of the pin marker square, in device units
pub const PIN_HALF_SIZE: f32 = 5.0;

/// Half-size of the highlight halo square, in device units
pub const PIN_HALO_HALF_SIZE: f32 = 7.0;

/// A component pin marker
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    /// Shared attributes (layer, net, component, size, color)
    pub common: EntityCommon,
    /// Pin number within the component (e.g. `3`, `A12`)
    pub number: String,
    /// Marker center in normalized image coordinates
    pub location: Point,
}

impl Pin {
    /// Leading token of a persisted pin line
    pub const TYPE_TAG: &'static str = "PIN";

    /// Create a pin on `layer` with the default pin style
    pub fn new(layer: LayerAffinity) -> Self {
        Pin::with_style(layer, VariantStyle::PIN)
    }

    /// Create a pin on `layer` with an explicit size and color
    pub fn with_style(layer: LayerAffinity, style: VariantStyle) -> Self {
        Pin {
            common: EntityCommon::styled(layer, style),
            number: "0".to_string(),
            location: Point::ORIGIN,
        }
    }

    /// Stroke the marker square, with a wider halo underneath when `highlighted`
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
        let center = transform.to_device(self.location);

        if highlighted {
            let halo = Pen::new(
                self.common.color.with_alpha(HIGHLIGHT_ALPHA),
                highlight_width(self.common.size),
            );
            surface.stroke_rect(DeviceRect::centered_square(center, PIN_HALO_HALF_SIZE), halo);
        }

        surface.stroke_rect(
            DeviceRect::centered_square(center, PIN_HALF_SIZE),
            Pen::new(self.common.color, self.common.size as f32),
        );
    }
}

impl Default for Pin {
    fn default() -> Self {
        Pin::new(LayerAffinity::BOTH)
    }
}

fn get_number(p: &Pin) -> PropertyValue {
    PropertyValue::String(p.number.clone())
}

fn set_number(p: &mut Pin, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::String(s) => {
            p.number = s.clone();
            true
        }
        _ => false,
    }
}

/// Pin-specific properties, appended after the base ones
pub const PIN_PROPERTIES: &[PropertyDescriptor<Pin>] = &[PropertyDescriptor {
    name: "Number",
    category: "Component",
    read_only: false,
    get: get_number,
    set: set_number,
}];
