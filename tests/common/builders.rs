//! Entity and editor builders shared by integration tests.

#![allow(dead_code)]

use circuit_trace::{
    Color, Editor, Entity, InputEvent, LayerAffinity, MouseButton, Pin, Point, Text, Wire,
};

pub fn wire(layer: LayerAffinity, net: &str, points: &[(f64, f64)]) -> Wire {
    let mut wire = Wire::new(layer);
    wire.common.net_name = net.to_string();
    wire.points = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
    wire
}

pub fn pin(layer: LayerAffinity, component: &str, number: &str, net: &str, at: (f64, f64)) -> Pin {
    let mut pin = Pin::new(layer);
    pin.common.component = component.to_string();
    pin.common.net_name = net.to_string();
    pin.number = number.to_string();
    pin.location = Point::new(at.0, at.1);
    pin
}

pub fn text(layer: LayerAffinity, label: &str, net: &str, at: (f64, f64)) -> Text {
    let mut text = Text::new(layer).with_text(label);
    text.common.net_name = net.to_string();
    text.common.component = "U1".to_string();
    text.location = Point::new(at.0, at.1);
    text
}

/// One entity of every variant, on different layers
pub fn mixed_entities() -> Vec<Entity> {
    let mut gnd = wire(LayerAffinity::BOTH, "GND", &[(0.1, 0.2), (0.3, 0.4), (0.5, 0.4)]);
    gnd.common.color = Color::GREEN;
    vec![
        gnd.into(),
        pin(LayerAffinity::TOP, "U1", "3", "VCC", (0.5, 0.5)).into(),
        text(LayerAffinity::BOTTOM, "R12", "VCC", (0.25, 0.75)).into(),
    ]
}

/// An editor already holding [`mixed_entities`]
pub fn populated_editor() -> Editor {
    let mut editor = Editor::new();
    editor.entities_mut().extend(mixed_entities());
    editor
}

pub fn click(editor: &mut Editor, button: MouseButton, x: f64, y: f64) {
    editor.dispatch(InputEvent::Click(button, Point::new(x, y)));
}
