//! Normalized image points and device-space coordinates

use crate::error::{Result, TraceError};
use std::fmt;
use std::str::FromStr;

/// A point in image-relative space.
///
/// Both coordinates are conceptually in `[0, 1]` (0 = left/top edge of the
/// reference image, 1 = right/bottom edge) but the range is not enforced;
/// values may transiently leave it while editing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The image origin
    pub const ORIGIN: Point = Point::new(0.0, 0.0);
}

/// Formats as `(x;y)` with `.` as decimal separator
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({};{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = TraceError;

    /// Parse a `(x;y)` token
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TraceError::InvalidPoint {
            token: s.to_string(),
        };

        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let (x, y) = inner.split_once(';').ok_or_else(invalid)?;

        let x = x.parse::<f64>().map_err(|_| invalid())?;
        let y = y.parse::<f64>().map_err(|_| invalid())?;
        Ok(Point::new(x, y))
    }
}

/// A position on a drawing surface, as produced by a coordinate transform
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DevicePoint {
    pub x: f32,
    pub y: f32,
}

impl DevicePoint {
    /// Create a new device point
    pub const fn new(x: f32, y: f32) -> Self {
        DevicePoint { x, y }
    }
}

/// An axis-aligned rectangle in device space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DeviceRect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        DeviceRect { x, y, width, height }
    }

    /// Square of side `2 * half_size` centered on `center`
    pub fn centered_square(center: DevicePoint, half_size: f32) -> Self {
        DeviceRect::new(
            center.x - half_size,
            center.y - half_size,
            half_size * 2.0,
            half_size * 2.0,
        )
    }

    /// Check if a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, p: DevicePoint) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}
