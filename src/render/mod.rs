//! Drawing collaborators.
//!
//! Entities and tools never touch pixels themselves. They are handed a
//! [`CoordinateTransform`] that maps normalized image points onto the
//! surface being painted (top or bottom image) and a [`Surface`] exposing a
//! handful of stroke/fill primitives. Hosts implement both; the crate ships
//! a [`Viewport`] transform and a recording [`DisplayList`] surface.

mod display_list;

pub use display_list::{DisplayList, DrawCommand};

use crate::types::{Color, DevicePoint, DeviceRect, Font, Point};

/// Alpha applied to the highlight halo drawn around selected entities
pub const HIGHLIGHT_ALPHA: u8 = 180;

/// Halo width for an entity of stroke size `size`, i.e. `3 * size / 2`
pub fn highlight_width(size: u32) -> f32 {
    (3 * u64::from(size) / 2) as f32
}

/// Maps normalized image points to device coordinates
pub trait CoordinateTransform {
    fn to_device(&self, p: Point) -> DevicePoint;
}

impl<F> CoordinateTransform for F
where
    F: Fn(Point) -> DevicePoint,
{
    fn to_device(&self, p: Point) -> DevicePoint {
        self(p)
    }
}

/// Stroke color and width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
}

impl Pen {
    pub const fn new(color: Color, width: f32) -> Self {
        Pen { color, width }
    }
}

/// A line of text to be outlined and filled by the surface
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun<'a> {
    pub text: &'a str,
    /// Anchor in device space; rotation happens about this point
    pub origin: DevicePoint,
    /// Clockwise rotation in degrees
    pub angle: f64,
    pub font: &'a Font,
}

/// Drawing primitives required from the host
pub trait Surface {
    /// Stroke connected line segments through `points`
    fn stroke_polyline(&mut self, points: &[DevicePoint], pen: Pen);

    /// Stroke a rectangle outline
    fn stroke_rect(&mut self, rect: DeviceRect, pen: Pen);

    /// Fill the glyph outline of `run` with `pen.color`.
    ///
    /// A `pen.width` above zero widens the outline by that amount before
    /// filling.
    fn fill_glyph_path(&mut self, run: &GlyphRun<'_>, pen: Pen);
}

/// Maps the normalized unit square onto a device rectangle.
///
/// This is the transform an image panel uses when the reference image is
/// stretched over `rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub rect: DeviceRect,
}

impl Viewport {
    pub const fn new(rect: DeviceRect) -> Self {
        Viewport { rect }
    }

    /// Convert a device position (e.g. a pointer location) back into
    /// normalized image space
    pub fn to_normalized(&self, p: DevicePoint) -> Point {
        let w = if self.rect.width == 0.0 { 1.0 } else { self.rect.width };
        let h = if self.rect.height == 0.0 { 1.0 } else { self.rect.height };
        Point::new(
            ((p.x - self.rect.x) / w) as f64,
            ((p.y - self.rect.y) / h) as f64,
        )
    }

    /// Whether a device position lies over the image
    pub fn contains(&self, p: DevicePoint) -> bool {
        self.rect.contains(p)
    }
}

impl CoordinateTransform for Viewport {
    fn to_device(&self, p: Point) -> DevicePoint {
        DevicePoint::new(
            self.rect.x + (p.x as f32) * self.rect.width,
            self.rect.y + (p.y as f32) * self.rect.height,
        )
    }
}
