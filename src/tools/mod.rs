//! Interactive tools turning pointer and keyboard input into entities.
//!
//! The host owns exactly one [`Tool`] at a time and switches between them
//! explicitly; a tool never changes into another one by itself. Each input
//! event returns an [`Action`] telling the host what to do with the entity
//! in progress.

mod pin_tool;
mod text_tool;
mod wire_tool;

pub use pin_tool::PinTool;
pub use text_tool::TextTool;
pub use wire_tool::WireTool;

use crate::entities::{Entity, EntityDefaults};
use crate::render::{CoordinateTransform, Surface};
use crate::types::{LayerAffinity, Point};

/// Degrees added by one rotate key press
pub const ROTATE_STEP: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the editor and tools react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Escape,
    Char(char),
}

impl Key {
    /// Removes the last wire point
    pub fn is_delete_last(&self) -> bool {
        *self == Key::Backspace
    }

    /// Rotates a text label by [`ROTATE_STEP`]
    pub fn is_rotate(&self) -> bool {
        matches!(self, Key::Char('r' | 'R'))
    }
}

/// Input delivered to the active tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Click(MouseButton, Point),
    Move(Point),
    /// Pointer entered (`true`) or left (`false`) an image surface
    Focus(bool),
    Key(Key),
}

/// What the host should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Nothing to store
    #[default]
    None,
    /// Take the completed entity and keep the tool active
    CommitAndContinue,
    /// Drop the entity in progress and return to [`Tool::Select`]
    AbortAndExit,
    /// Take the completed entity, then return to [`Tool::Select`]
    CommitAndExit,
}

impl Action {
    /// The host should store the tool's completed entity
    pub fn commits(&self) -> bool {
        matches!(self, Action::CommitAndContinue | Action::CommitAndExit)
    }

    /// The host should return to [`Tool::Select`]
    pub fn exits(&self) -> bool {
        matches!(self, Action::AbortAndExit | Action::CommitAndExit)
    }
}

/// The active tool
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Tool {
    /// Idle; selection is handled by the host's list widget
    #[default]
    Select,
    DrawingWire(WireTool),
    PlacingPin(PinTool),
    PlacingText(TextTool),
}

impl Tool {
    /// Start drawing wires on `layer`
    pub fn begin_wire(layer: LayerAffinity, pointer_over: bool, defaults: &EntityDefaults) -> Self {
        Tool::DrawingWire(WireTool::with_style(layer, pointer_over, defaults.wire))
    }

    /// Start placing pins on `layer`
    pub fn begin_pin(layer: LayerAffinity, pointer_over: bool, defaults: &EntityDefaults) -> Self {
        Tool::PlacingPin(PinTool::with_style(layer, pointer_over, defaults.pin))
    }

    /// Start placing text labels on `layer`
    pub fn begin_text(layer: LayerAffinity, pointer_over: bool, defaults: &EntityDefaults) -> Self {
        let mut tool = TextTool::with_style(layer, pointer_over, defaults.text);
        let text = tool.text_mut();
        text.text = defaults.text_content.clone();
        text.font = defaults.font.clone();
        Tool::PlacingText(tool)
    }

    /// Short lowercase name for status bars and logs
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::DrawingWire(_) => "wire",
            Tool::PlacingPin(_) => "pin",
            Tool::PlacingText(_) => "text",
        }
    }

    /// Whether no tool is active
    pub fn is_select(&self) -> bool {
        matches!(self, Tool::Select)
    }

    /// Hand over the entity finished so far and re-arm for the next one
    pub fn reset_and_take_completed(&mut self) -> Option<Entity> {
        match self {
            Tool::Select => None,
            Tool::DrawingWire(t) => t.reset_and_take_completed().map(Entity::Wire),
            Tool::PlacingPin(t) => Some(Entity::Pin(t.take_copy())),
            Tool::PlacingText(t) => Some(Entity::Text(t.take_copy())),
        }
    }

    /// Forward a click; the returned action tells the host what to store
    pub fn handle_click(&mut self, button: MouseButton, position: Point) -> Action {
        match self {
            Tool::Select => Action::None,
            Tool::DrawingWire(t) => t.handle_click(button, position),
            Tool::PlacingPin(t) => t.handle_click(button, position),
            Tool::PlacingText(t) => t.handle_click(button, position),
        }
    }

    /// Forward a pointer move
    pub fn handle_move(&mut self, position: Point) {
        match self {
            Tool::Select => {}
            Tool::DrawingWire(t) => t.handle_move(position),
            Tool::PlacingPin(t) => t.handle_move(position),
            Tool::PlacingText(t) => t.handle_move(position),
        }
    }

    /// Forward the pointer entering or leaving an image
    pub fn handle_focus_change(&mut self, is_over_surface: bool) {
        match self {
            Tool::Select => {}
            Tool::DrawingWire(t) => t.handle_focus_change(is_over_surface),
            Tool::PlacingPin(t) => t.handle_focus_change(is_over_surface),
            Tool::PlacingText(t) => t.handle_focus_change(is_over_surface),
        }
    }

    /// Forward a key the editor did not consume
    pub fn handle_key(&mut self, key: Key) {
        match self {
            Tool::Select | Tool::PlacingPin(_) => {}
            Tool::DrawingWire(t) => t.handle_key(key),
            Tool::PlacingText(t) => t.handle_key(key),
        }
    }

    /// Dispatch one input event
    pub fn handle(&mut self, event: InputEvent) -> Action {
        match event {
            InputEvent::Click(button, position) => self.handle_click(button, position),
            InputEvent::Move(position) => {
                self.handle_move(position);
                Action::None
            }
            InputEvent::Focus(over) => {
                self.handle_focus_change(over);
                Action::None
            }
            InputEvent::Key(key) => {
                self.handle_key(key);
                Action::None
            }
        }
    }

    /// Draw the entity in progress
    pub fn render_preview(
        &self,
        target_layer: LayerAffinity,
        transform: &dyn CoordinateTransform,
        surface: &mut dyn Surface,
    ) {
        match self {
            Tool::Select => {}
            Tool::DrawingWire(t) => t.render_preview(target_layer, transform, surface),
            Tool::PlacingPin(t) => t.render_preview(target_layer, transform, surface),
            Tool::PlacingText(t) => t.render_preview(target_layer, transform, surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DisplayList;
    use crate::types::DevicePoint;

    fn identity(p: Point) -> DevicePoint {
        DevicePoint::new(p.x as f32, p.y as f32)
    }

    #[test]
    fn test_select_is_inert() {
        let mut tool = Tool::Select;
        assert_eq!(tool.handle(InputEvent::Click(MouseButton::Left, Point::ORIGIN)), Action::None);
        assert_eq!(tool.handle(InputEvent::Click(MouseButton::Right, Point::ORIGIN)), Action::None);
        assert_eq!(tool.handle(InputEvent::Move(Point::new(0.5, 0.5))), Action::None);
        assert_eq!(tool.handle(InputEvent::Focus(true)), Action::None);
        assert_eq!(tool.handle(InputEvent::Key(Key::Backspace)), Action::None);
        assert!(tool.reset_and_take_completed().is_none());

        let mut surface = DisplayList::new();
        tool.render_preview(LayerAffinity::TOP, &identity, &mut surface);
        assert!(surface.is_empty());
        assert_eq!(tool, Tool::Select);
    }

    #[test]
    fn test_action_flags() {
        assert!(!Action::None.commits() && !Action::None.exits());
        assert!(Action::CommitAndContinue.commits() && !Action::CommitAndContinue.exits());
        assert!(!Action::AbortAndExit.commits() && Action::AbortAndExit.exits());
        assert!(Action::CommitAndExit.commits() && Action::CommitAndExit.exits());
    }

    #[test]
    fn test_key_mapping() {
        assert!(Key::Backspace.is_delete_last());
        assert!(!Key::Delete.is_delete_last());
        assert!(Key::Char('r').is_rotate());
        assert!(Key::Char('R').is_rotate());
        assert!(!Key::Char('t').is_rotate());
    }

    #[test]
    fn test_begin_text_uses_defaults() {
        let defaults = EntityDefaults {
            text_content: "LABEL".into(),
            ..EntityDefaults::default()
        };
        match Tool::begin_text(LayerAffinity::TOP, false, &defaults) {
            Tool::PlacingText(t) => assert_eq!(t.text().text, "LABEL"),
            other => panic!("unexpected tool {:?}", other),
        }
    }

    #[test]
    fn test_names() {
        let d = EntityDefaults::default();
        assert_eq!(Tool::Select.name(), "select");
        assert_eq!(Tool::begin_wire(LayerAffinity::TOP, false, &d).name(), "wire");
        assert_eq!(Tool::begin_pin(LayerAffinity::TOP, false, &d).name(), "pin");
        assert_eq!(Tool::begin_text(LayerAffinity::TOP, false, &d).name(), "text");
    }
}
