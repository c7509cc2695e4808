//! Pin placement tool

use super::{Action, MouseButton};
use crate::entities::{Pin, VariantStyle};
use crate::render::{CoordinateTransform, Surface};
use crate::types::{LayerAffinity, Point};

/// Places pins at the pointer.
///
/// The pin follows the pointer; every left click stores a copy and the
/// same pin keeps following, so consecutive pins share number and net.
#[derive(Debug, Clone, PartialEq)]
pub struct PinTool {
    pin: Pin,
    show: bool,
}

impl PinTool {
    /// Pin tool on `layer` with the default pin style
    pub fn new(layer: LayerAffinity, pointer_over: bool) -> Self {
        PinTool::with_style(layer, pointer_over, VariantStyle::PIN)
    }

    /// Pin tool on `layer` placing pins with `style`
    pub fn with_style(layer: LayerAffinity, pointer_over: bool, style: VariantStyle) -> Self {
        PinTool {
            pin: Pin::with_style(layer, style),
            show: pointer_over,
        }
    }

    /// The pin following the pointer
    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    /// Edit the pin about to be placed (number, net, component)
    pub fn pin_mut(&mut self) -> &mut Pin {
        &mut self.pin
    }

    /// Whether the preview is drawn
    pub fn is_shown(&self) -> bool {
        self.show
    }

    /// Copy of the current pin; the tool keeps its state
    pub fn take_copy(&self) -> Pin {
        self.pin.clone()
    }

    /// Left click places a copy, right click leaves the tool
    pub fn handle_click(&mut self, button: MouseButton, position: Point) -> Action {
        self.handle_move(position);

        match button {
            MouseButton::Left => {
                log::debug!("placing pin {} at {}", self.pin.number, position);
                Action::CommitAndContinue
            }
            MouseButton::Right => Action::AbortAndExit,
            MouseButton::Middle => Action::None,
        }
    }

    /// Move the pin to the pointer
    pub fn handle_move(&mut self, position: Point) {
        self.pin.location = position;
    }

    /// Show the pin only while the pointer is over an image
    pub fn handle_focus_change(&mut self, is_over_surface: bool) {
        self.show = is_over_surface;
    }

    /// Draw the pin at the pointer when shown
    pub fn render_preview(
        &self,
        target_layer: LayerAffinity,
        transform: &dyn CoordinateTransform,
        surface: &mut dyn Surface,
    ) {
        if self.show {
            self.pin.draw(target_layer, transform, surface, false);
        }
    }
}
