//! Recording surface

use super::{GlyphRun, Pen, Surface};
use crate::types::{DevicePoint, DeviceRect, Font};

/// A single recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polyline {
        points: Vec<DevicePoint>,
        pen: Pen,
    },
    Rect {
        rect: DeviceRect,
        pen: Pen,
    },
    Glyphs {
        text: String,
        origin: DevicePoint,
        angle: f64,
        font: Font,
        pen: Pen,
    },
}

/// A [`Surface`] that records every primitive in call order.
///
/// Hosts can replay the list onto their own renderer; tests inspect it.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay all recorded commands onto another surface
    pub fn replay(&self, target: &mut dyn Surface) {
        for command in &self.commands {
            match command {
                DrawCommand::Polyline { points, pen } => target.stroke_polyline(points, *pen),
                DrawCommand::Rect { rect, pen } => target.stroke_rect(*rect, *pen),
                DrawCommand::Glyphs {
                    text,
                    origin,
                    angle,
                    font,
                    pen,
                } => {
                    let run = GlyphRun {
                        text,
                        origin: *origin,
                        angle: *angle,
                        font,
                    };
                    target.fill_glyph_path(&run, *pen);
                }
            }
        }
    }
}

impl Surface for DisplayList {
    fn stroke_polyline(&mut self, points: &[DevicePoint], pen: Pen) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            pen,
        });
    }

    fn stroke_rect(&mut self, rect: DeviceRect, pen: Pen) {
        self.commands.push(DrawCommand::Rect { rect, pen });
    }

    fn fill_glyph_path(&mut self, run: &GlyphRun<'_>, pen: Pen) {
        self.commands.push(DrawCommand::Glyphs {
            text: run.text.to_string(),
            origin: run.origin,
            angle: run.angle,
            font: run.font.clone(),
            pen,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_records_in_order_and_replays() {
        let mut list = DisplayList::new();
        let pen = Pen::new(Color::RED, 2.0);
        list.stroke_rect(DeviceRect::new(0.0, 0.0, 1.0, 1.0), pen);
        list.stroke_polyline(&[DevicePoint::new(0.0, 0.0), DevicePoint::new(1.0, 1.0)], pen);
        let font = Font::default();
        list.fill_glyph_path(
            &GlyphRun {
                text: "U1",
                origin: DevicePoint::new(3.0, 4.0),
                angle: 90.0,
                font: &font,
            },
            pen,
        );
        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCommand::Rect { .. }));

        let mut copy = DisplayList::new();
        list.replay(&mut copy);
        assert_eq!(copy.commands(), list.commands());

        list.clear();
        assert!(list.is_empty());
    }
}
