//! Text placement tool

use super::{Action, Key, MouseButton, ROTATE_STEP};
use crate::entities::{Text, VariantStyle};
use crate::render::{CoordinateTransform, Surface};
use crate::types::{LayerAffinity, Point};

/// Places text labels at the pointer; `r` rotates the label by 90 degrees
#[derive(Debug, Clone, PartialEq)]
pub struct TextTool {
    text: Text,
    show: bool,
}

impl TextTool {
    /// Text tool on `layer` with the default text style
    pub fn new(layer: LayerAffinity, pointer_over: bool) -> Self {
        TextTool::with_style(layer, pointer_over, VariantStyle::TEXT)
    }

    /// Text tool on `layer` placing labels with `style`
    pub fn with_style(layer: LayerAffinity, pointer_over: bool, style: VariantStyle) -> Self {
        TextTool {
            text: Text::with_style(layer, style),
            show: pointer_over,
        }
    }

    /// The label following the pointer
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Edit the label about to be placed
    pub fn text_mut(&mut self) -> &mut Text {
        &mut self.text
    }

    /// Whether the preview is drawn
    pub fn is_shown(&self) -> bool {
        self.show
    }

    /// Copy of the current label; the tool keeps its state
    pub fn take_copy(&self) -> Text {
        self.text.clone()
    }

    /// Left click places a copy, right click leaves the tool
    pub fn handle_click(&mut self, button: MouseButton, position: Point) -> Action {
        self.handle_move(position);

        match button {
            MouseButton::Left => {
                log::debug!("placing text '{}' at {}", self.text.text, position);
                Action::CommitAndContinue
            }
            MouseButton::Right => Action::AbortAndExit,
            MouseButton::Middle => Action::None,
        }
    }

    /// Move the label to the pointer
    pub fn handle_move(&mut self, position: Point) {
        self.text.location = position;
    }

    /// Show the label only while the pointer is over an image
    pub fn handle_focus_change(&mut self, is_over_surface: bool) {
        self.show = is_over_surface;
    }

    /// `r` rotates the label
    pub fn handle_key(&mut self, key: Key) {
        if key.is_rotate() {
            self.text.rotate(ROTATE_STEP);
        }
    }

    /// Draw the label at the pointer when shown
    pub fn render_preview(
        &self,
        target_layer: LayerAffinity,
        transform: &dyn CoordinateTransform,
        surface: &mut dyn Surface,
    ) {
        if self.show {
            self.text.draw(target_layer, transform, surface, false);
        }
    }
}
