//! Wire entity: a polyline tracing a net

use super::{EntityCommon, VariantStyle};
use crate::render::{highlight_width, CoordinateTransform, Pen, Surface, HIGHLIGHT_ALPHA};
use crate::types::{LayerAffinity, Point};

/// A polyline connecting committed points.
///
/// While a wire is being drawn, `preview_point` follows the pointer and an
/// extra segment from the last committed point to it is shown when
/// `show_preview` is set. Neither is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    /// Shared attributes (layer, net, component, size, color)
    pub common: EntityCommon,
    /// Committed points, in drawing order
    pub points: Vec<Point>,
    /// Pointer position the next left click would append
    pub preview_point: Point,
    /// Draw the segment from the last point to `preview_point`
    pub show_preview: bool,
}

impl Wire {
    /// Leading token of a persisted wire line
    pub const TYPE_TAG: &'static str = "WIRE";

    /// Create an empty wire with the default wire style
    pub fn new(layer: LayerAffinity) -> Self {
        Wire::with_style(layer, VariantStyle::WIRE)
    }

    /// Create an empty wire on `layer` with an explicit size and color
    pub fn with_style(layer: LayerAffinity, style: VariantStyle) -> Self {
        Wire {
            common: EntityCommon::styled(layer, style),
            points: Vec::new(),
            preview_point: Point::ORIGIN,
            show_preview: false,
        }
    }

    /// Commit the preview point as the next wire point
    pub fn add_preview_point(&mut self) {
        self.points.push(self.preview_point);
    }

    /// Remove the last committed point, if any
    pub fn remove_last_point(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Copy with points and attributes kept and preview state reset
    pub fn committed_copy(&self) -> Wire {
        Wire {
            common: self.common.clone(),
            points: self.points.clone(),
            preview_point: Point::ORIGIN,
            show_preview: false,
        }
    }

    fn draw_segment(
        &self,
        from: Point,
        to: Point,
        transform: &dyn CoordinateTransform,
        surface: &mut dyn Surface,
        highlighted: bool,
    ) {
        let segment = [transform.to_device(from), transform.to_device(to)];
        if highlighted {
            let halo = Pen::new(
                self.common.color.with_alpha(HIGHLIGHT_ALPHA),
                highlight_width(self.common.size),
            );
            surface.stroke_polyline(&segment, halo);
        }
        surface.stroke_polyline(&segment, Pen::new(self.common.color, self.common.size as f32));
    }

    /// Draw if the wire belongs on `target_layer`
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
        for pair in self.points.windows(2) {
            self.draw_segment(pair[0], pair[1], transform, surface, highlighted);
        }

        if self.show_preview {
            if let Some(&last) = self.points.last() {
                self.draw_segment(last, self.preview_point, transform, surface, highlighted);
            }
        }
    }
}

impl Default for Wire {
    fn default() -> Self {
        Wire::new(LayerAffinity::BOTH)
    }
}
