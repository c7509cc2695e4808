//! Top-level editor state.
//!
//! [`Editor`] owns the entity list and the active [`Tool`], and applies the
//! [`Action`] a tool reports back after each input event.

use std::io::{BufRead, Write};

use crate::entities::{Entity, EntityDefaults};
use crate::error::Result;
use crate::io::{export_all, EntityReader, EntityWriter, ImportConfiguration};
use crate::notification::NotificationCollection;
use crate::properties::{PropertyList, PropertyValue};
use crate::render::{CoordinateTransform, Surface};
use crate::tools::{Action, InputEvent, Key, Tool};
use crate::types::{LayerAffinity, Point};

/// Pointer position mirrored on both board images
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Crosshair {
    /// Last pointer position in normalized image coordinates
    pub location: Point,
    /// Pointer is over one of the images
    pub show: bool,
}

/// Project state: entities, active tool, layer selection
#[derive(Debug, Clone, Default)]
pub struct Editor {
    entities: Vec<Entity>,
    tool: Tool,
    active_layers: LayerAffinity,
    crosshair: Crosshair,
    pointer_over: bool,
    defaults: EntityDefaults,
}

impl Editor {
    /// Empty project in select mode with both layers active
    pub fn new() -> Self {
        Editor::default()
    }

    /// Use `defaults` for every entity created by a tool or read back by
    /// [`Editor::read_from`] from now on
    pub fn with_defaults(mut self, defaults: EntityDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Persisted entities, in list order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Direct access to the entity list
    pub fn entities_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.entities
    }

    /// The active tool
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Mutable access to the active tool, e.g. to edit the pin number
    pub fn tool_mut(&mut self) -> &mut Tool {
        &mut self.tool
    }

    /// Defaults applied to new and imported entities
    pub fn defaults(&self) -> &EntityDefaults {
        &self.defaults
    }

    /// Pointer position mirrored on both images
    pub fn crosshair(&self) -> Crosshair {
        self.crosshair
    }

    /// Layers new entities are drawn on
    pub fn active_layers(&self) -> LayerAffinity {
        self.active_layers
    }

    /// Layers new entities are drawn on
    pub fn set_active_layers(&mut self, layers: LayerAffinity) {
        self.active_layers = layers;
    }

    /// Whether the pointer is over an image
    pub fn is_pointer_over(&self) -> bool {
        self.pointer_over
    }

    // Tool transitions

    /// Switch to the wire tool
    pub fn begin_wire(&mut self) {
        self.cancel_tool();
        self.tool = Tool::begin_wire(self.active_layers, self.pointer_over, &self.defaults);
        log::debug!("tool: {}", self.tool.name());
    }

    /// Switch to the pin tool
    pub fn begin_pin(&mut self) {
        self.cancel_tool();
        self.tool = Tool::begin_pin(self.active_layers, self.pointer_over, &self.defaults);
        log::debug!("tool: {}", self.tool.name());
    }

    /// Switch to the text tool
    pub fn begin_text(&mut self) {
        self.cancel_tool();
        self.tool = Tool::begin_text(self.active_layers, self.pointer_over, &self.defaults);
        log::debug!("tool: {}", self.tool.name());
    }

    /// Drop the entity in progress, return to select and clear the selection
    pub fn cancel_tool(&mut self) {
        self.tool = Tool::Select;
        self.clear_selection();
    }

    /// Feed one input event through the editor and the active tool
    pub fn dispatch(&mut self, event: InputEvent) -> Action {
        match event {
            InputEvent::Move(position) => {
                self.crosshair.location = position;
            }
            InputEvent::Focus(over) => {
                self.crosshair.show = over;
                self.pointer_over = over;
            }
            InputEvent::Key(key) => {
                self.handle_key(key);
                return Action::None;
            }
            InputEvent::Click(..) => {}
        }

        let action = self.tool.handle(event);
        self.apply_action(action);
        action
    }

    fn apply_action(&mut self, action: Action) {
        if action.commits() {
            match self.tool.reset_and_take_completed() {
                Some(entity) => self.commit(entity),
                None => log::warn!("{} tool reported a commit with nothing to take", self.tool.name()),
            }
        }
        if action.exits() {
            self.cancel_tool();
        }
    }

    fn commit(&mut self, entity: Entity) {
        if let Entity::Wire(wire) = &entity {
            if wire.points.len() < 2 {
                log::warn!("refusing wire with {} point(s)", wire.points.len());
                return;
            }
        }
        log::debug!("committed {}", entity);
        self.entities.push(entity.committed_copy());
    }

    /// Editor shortcuts; anything unbound goes to the active tool
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Escape => self.cancel_tool(),
            Key::Delete => {
                self.delete_selected();
            }
            Key::Char(c) => match c.to_ascii_uppercase() {
                'W' => self.begin_wire(),
                'P' => self.begin_pin(),
                'T' => self.begin_text(),
                '0' => self.active_layers = LayerAffinity::BOTH,
                '1' => self.active_layers.toggle(LayerAffinity::TOP),
                '2' => self.active_layers.toggle(LayerAffinity::BOTTOM),
                _ => self.tool.handle_key(key),
            },
            Key::Backspace => self.tool.handle_key(key),
        }
    }

    // Selection

    /// Replace the selection; out-of-range indices are ignored
    pub fn set_selection<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.clear_selection();
        for index in indices {
            if let Some(entity) = self.entities.get_mut(index) {
                entity.set_selected(true);
            }
        }
    }

    /// Indices of the selected entities, ascending
    pub fn selected_indices(&self) -> Vec<usize> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    /// Deselect every entity
    pub fn clear_selection(&mut self) {
        for entity in &mut self.entities {
            entity.set_selected(false);
        }
    }

    /// Remove every selected entity, returning how many were removed
    pub fn delete_selected(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !e.is_selected());
        before - self.entities.len()
    }

    /// Properties shared by the whole selection
    pub fn selection_properties(&self) -> PropertyList {
        PropertyList::intersect(
            self.entities
                .iter()
                .filter(|e| e.is_selected())
                .map(Entity::properties),
        )
    }

    /// Apply one edited property to every selected entity.
    ///
    /// Returns the number of entities that accepted the value.
    pub fn apply_property(&mut self, name: &str, value: &PropertyValue) -> usize {
        self.entities
            .iter_mut()
            .filter(|e| e.is_selected())
            .map(|e| e.change_property(name, value))
            .filter(|changed| *changed)
            .count()
    }

    /// Draw the tool preview, then every entity, onto one board side
    pub fn render(
        &self,
        target_layer: LayerAffinity,
        transform: &dyn CoordinateTransform,
        surface: &mut dyn Surface,
    ) {
        self.tool.render_preview(target_layer, transform, surface);
        for entity in &self.entities {
            entity.draw(target_layer, transform, surface, entity.is_selected());
        }
    }

    /// Start a new project
    pub fn reset(&mut self) {
        self.cancel_tool();
        self.entities.clear();
    }

    /// One persisted line per entity, in list order
    pub fn export_lines(&self) -> Vec<String> {
        export_all(&self.entities)
    }

    /// Write every entity as one line; returns the number written
    pub fn write_to<W: Write>(&self, writer: W) -> Result<usize> {
        let mut writer = EntityWriter::new(writer);
        writer.write_all(&self.entities)?;
        writer.flush()?;
        Ok(writer.written())
    }

    /// Replace the project with the entities read from `reader`.
    ///
    /// Imported entities get the editor's [`EntityDefaults`] for attributes
    /// the line format does not carry; `config.defaults` is overridden.
    pub fn read_from<R: BufRead>(
        &mut self,
        reader: R,
        mut config: ImportConfiguration,
    ) -> Result<NotificationCollection> {
        self.reset();
        config.defaults = self.defaults.clone();
        let notifications = EntityReader::new(reader)
            .with_configuration(config)
            .read_into(&mut self.entities)?;
        log::info!(
            "loaded {} entities ({} notifications)",
            self.entities.len(),
            notifications.len()
        );
        Ok(notifications)
    }

    /// One summary line per entity, in list order
    pub fn labels(&self) -> Vec<String> {
        self.entities.iter().map(Entity::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Pin, Text, Wire};
    use crate::render::DisplayList;
    use crate::tools::MouseButton;
    use crate::types::{DevicePoint, Font};

    fn identity(p: Point) -> DevicePoint {
        DevicePoint::new(p.x as f32, p.y as f32)
    }

    fn click(editor: &mut Editor, button: MouseButton, x: f64, y: f64) -> Action {
        editor.dispatch(InputEvent::Click(button, Point::new(x, y)))
    }

    fn sample_editor() -> Editor {
        let mut editor = Editor::new();
        let mut wire = Wire::new(LayerAffinity::BOTH);
        wire.points = vec![Point::new(0.1, 0.1), Point::new(0.2, 0.2)];
        let mut pin = Pin::new(LayerAffinity::TOP);
        pin.number = "3".into();
        editor.entities_mut().push(wire.into());
        editor.entities_mut().push(pin.into());
        editor.entities_mut().push(Text::new(LayerAffinity::BOTTOM).into());
        editor
    }

    #[test]
    fn test_wire_commit_flow() {
        let mut editor = Editor::new();
        editor.begin_wire();
        click(&mut editor, MouseButton::Left, 0.1, 0.2);
        click(&mut editor, MouseButton::Left, 0.3, 0.4);
        assert_eq!(click(&mut editor, MouseButton::Right, 0.0, 0.0), Action::CommitAndContinue);

        assert_eq!(editor.entities().len(), 1);
        assert_eq!(editor.tool().name(), "wire");
        match &editor.entities()[0] {
            Entity::Wire(w) => {
                assert_eq!(w.points, vec![Point::new(0.1, 0.2), Point::new(0.3, 0.4)]);
                assert!(!w.show_preview);
            }
            other => panic!("unexpected entity {:?}", other),
        }

        assert_eq!(click(&mut editor, MouseButton::Right, 0.0, 0.0), Action::AbortAndExit);
        assert!(editor.tool().is_select());
        assert_eq!(editor.entities().len(), 1);
    }

    #[test]
    fn test_pin_tool_stays_active() {
        let mut editor = Editor::new();
        editor.begin_pin();
        for i in 0..3 {
            click(&mut editor, MouseButton::Left, 0.1 * i as f64, 0.5);
        }
        assert_eq!(editor.entities().len(), 3);
        assert_eq!(editor.tool().name(), "pin");
        click(&mut editor, MouseButton::Right, 0.0, 0.0);
        assert!(editor.tool().is_select());
        assert_eq!(editor.entities().len(), 3);
    }

    #[test]
    fn test_pointer_tracking() {
        let mut editor = Editor::new();
        editor.dispatch(InputEvent::Focus(true));
        editor.dispatch(InputEvent::Move(Point::new(0.4, 0.6)));
        assert!(editor.crosshair().show);
        assert_eq!(editor.crosshair().location, Point::new(0.4, 0.6));

        editor.begin_pin();
        match editor.tool() {
            Tool::PlacingPin(t) => assert!(t.is_shown()),
            other => panic!("unexpected tool {:?}", other),
        }

        editor.dispatch(InputEvent::Focus(false));
        assert!(!editor.crosshair().show);
        assert!(!editor.is_pointer_over());
    }

    #[test]
    fn test_key_shortcuts() {
        let mut editor = Editor::new();
        editor.handle_key(Key::Char('w'));
        assert_eq!(editor.tool().name(), "wire");
        editor.handle_key(Key::Char('T'));
        assert_eq!(editor.tool().name(), "text");
        editor.handle_key(Key::Char('p'));
        assert_eq!(editor.tool().name(), "pin");
        editor.handle_key(Key::Escape);
        assert!(editor.tool().is_select());

        editor.handle_key(Key::Char('1'));
        assert_eq!(editor.active_layers(), LayerAffinity::BOTTOM);
        editor.handle_key(Key::Char('2'));
        assert_eq!(editor.active_layers(), LayerAffinity::NONE);
        editor.handle_key(Key::Char('0'));
        assert_eq!(editor.active_layers(), LayerAffinity::BOTH);
    }

    #[test]
    fn test_new_tools_use_active_layers() {
        let mut editor = Editor::new();
        editor.set_active_layers(LayerAffinity::TOP);
        editor.begin_pin();
        click(&mut editor, MouseButton::Left, 0.5, 0.5);
        assert_eq!(editor.entities()[0].layer(), LayerAffinity::TOP);
    }

    #[test]
    fn test_rotate_key_forwarded_to_text_tool() {
        let mut editor = Editor::new();
        editor.begin_text();
        editor.dispatch(InputEvent::Key(Key::Char('r')));
        match editor.tool() {
            Tool::PlacingText(t) => assert_eq!(t.text().angle(), 90.0),
            other => panic!("unexpected tool {:?}", other),
        }
    }

    #[test]
    fn test_selection_and_delete() {
        let mut editor = sample_editor();
        editor.set_selection([0, 2, 99]);
        assert_eq!(editor.selected_indices(), vec![0, 2]);

        editor.handle_key(Key::Delete);
        assert_eq!(editor.entities().len(), 1);
        assert_eq!(editor.entities()[0].type_tag(), "PIN");
        assert!(editor.selected_indices().is_empty());
    }

    #[test]
    fn test_cancel_clears_selection() {
        let mut editor = sample_editor();
        editor.set_selection([1]);
        editor.begin_wire();
        assert!(editor.selected_indices().is_empty());
    }

    #[test]
    fn test_selection_properties_and_apply() {
        let mut editor = sample_editor();
        editor.set_selection([0, 1, 2]);
        let names: Vec<_> = editor.selection_properties().names().map(String::from).collect();
        assert_eq!(names, vec!["Net", "Layer", "Size", "Component", "Color"]);

        assert_eq!(editor.apply_property("Net", &"GND".into()), 3);
        assert!(editor.entities().iter().all(|e| e.common().net_name == "GND"));
        assert_eq!(editor.apply_property("Number", &"9".into()), 1);
    }

    #[test]
    fn test_render_highlights_selection() {
        let mut editor = sample_editor();
        let mut plain = DisplayList::new();
        editor.render(LayerAffinity::TOP, &identity, &mut plain);

        editor.set_selection([1]);
        let mut highlighted = DisplayList::new();
        editor.render(LayerAffinity::TOP, &identity, &mut highlighted);
        assert_eq!(highlighted.len(), plain.len() + 1);
    }

    #[test]
    fn test_write_and_read_back() {
        let editor = sample_editor();
        let mut buffer = Vec::new();
        assert_eq!(editor.write_to(&mut buffer).unwrap(), 3);

        let mut loaded = Editor::new();
        loaded.entities_mut().push(Pin::default().into());
        let notes = loaded
            .read_from(buffer.as_slice(), ImportConfiguration::default())
            .unwrap();
        assert!(notes.is_empty());
        assert_eq!(loaded.export_lines(), editor.export_lines());
    }

    #[test]
    fn test_read_uses_editor_defaults() {
        let mut defaults = EntityDefaults::default();
        defaults.pin.size = 9;
        defaults.font = Font::new("Mono", 8.0);
        let mut editor = Editor::new().with_defaults(defaults);

        editor.begin_pin();
        click(&mut editor, MouseButton::Left, 0.5, 0.5);
        editor.begin_text();
        click(&mut editor, MouseButton::Left, 0.2, 0.2);
        let placed = editor.entities().to_vec();

        let mut buffer = Vec::new();
        editor.write_to(&mut buffer).unwrap();
        editor
            .read_from(buffer.as_slice(), ImportConfiguration::default())
            .unwrap();
        assert_eq!(editor.entities(), placed.as_slice());
        assert_eq!(editor.entities()[0].common().size, 9);
    }

    #[test]
    fn test_labels() {
        let editor = sample_editor();
        let labels = editor.labels();
        assert_eq!(labels.len(), 3);
        assert!(labels[0].starts_with("WIRE : Net "));
        assert!(labels[1].starts_with("PIN : .3 : Net "));
        assert!(labels[2].starts_with("TEXT : 'TEXT'"));
    }

    #[test]
    fn test_reset() {
        let mut editor = sample_editor();
        editor.begin_wire();
        editor.reset();
        assert!(editor.entities().is_empty());
        assert!(editor.tool().is_select());
    }
}
