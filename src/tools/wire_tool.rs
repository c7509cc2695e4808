//! Wire drawing tool

use super::{Action, Key, MouseButton};
use crate::entities::{VariantStyle, Wire};
use crate::render::{CoordinateTransform, Surface};
use crate::types::{LayerAffinity, Point};

/// Builds a wire point by point.
///
/// Left click commits the pointer position, right click finishes the wire
/// (or leaves the tool when nothing has been drawn), Backspace removes the
/// last point.
#[derive(Debug, Clone, PartialEq)]
pub struct WireTool {
    layer: LayerAffinity,
    style: VariantStyle,
    wire: Wire,
}

impl WireTool {
    /// Wire tool on `layer` with the default wire style
    pub fn new(layer: LayerAffinity, pointer_over: bool) -> Self {
        WireTool::with_style(layer, pointer_over, VariantStyle::WIRE)
    }

    /// Wire tool on `layer` drawing wires with `style`
    pub fn with_style(layer: LayerAffinity, pointer_over: bool, style: VariantStyle) -> Self {
        let mut wire = Wire::with_style(layer, style);
        wire.show_preview = pointer_over;
        WireTool { layer, style, wire }
    }

    /// The wire in progress
    pub fn wire(&self) -> &Wire {
        &self.wire
    }

    /// Start a fresh wire, keeping the preview flag.
    ///
    /// Returns the previous wire when it has enough points to be stored.
    pub fn reset_and_take_completed(&mut self) -> Option<Wire> {
        let mut fresh = Wire::with_style(self.layer, self.style);
        fresh.show_preview = self.wire.show_preview;
        let done = std::mem::replace(&mut self.wire, fresh);

        if done.points.len() >= 2 {
            Some(done.committed_copy())
        } else {
            None
        }
    }

    /// Left click appends a point, right click finishes or leaves
    pub fn handle_click(&mut self, button: MouseButton, position: Point) -> Action {
        self.handle_move(position);

        match button {
            MouseButton::Left => {
                self.wire.add_preview_point();
                Action::None
            }
            MouseButton::Right => match self.wire.points.len() {
                0 => Action::AbortAndExit,
                1 => {
                    self.reset_and_take_completed();
                    Action::None
                }
                _ => Action::CommitAndContinue,
            },
            MouseButton::Middle => Action::None,
        }
    }

    /// Track the pointer as the preview point
    pub fn handle_move(&mut self, position: Point) {
        self.wire.preview_point = position;
    }

    /// Show the preview segment only while the pointer is over an image
    pub fn handle_focus_change(&mut self, is_over_surface: bool) {
        self.wire.show_preview = is_over_surface;
    }

    /// Backspace removes the last point
    pub fn handle_key(&mut self, key: Key) {
        if key.is_delete_last() {
            self.wire.remove_last_point();
        }
    }

    /// Draw the wire in progress, preview segment included
    pub fn render_preview(
        &self,
        target_layer: LayerAffinity,
        transform: &dyn CoordinateTransform,
        surface: &mut dyn Surface,
    ) {
        self.wire.draw(target_layer, transform, surface, false);
    }
}
