//! Tool state machine tests driven through the editor.

mod common;

use common::builders::*;
use common::{identity, round_trip};
use circuit_trace::render::DisplayList;
use circuit_trace::tools::{PinTool, TextTool, WireTool};
use circuit_trace::{
    Action, Editor, Entity, EntityDefaults, InputEvent, Key, LayerAffinity, MouseButton, Point,
    Tool,
};
use proptest::prelude::*;

#[test]
fn test_wire_click_sequence_commits() {
    let mut tool = Tool::begin_wire(LayerAffinity::BOTH, true, &EntityDefaults::default());
    let p1 = Point::new(0.1, 0.2);
    let p2 = Point::new(0.3, 0.4);
    assert_eq!(tool.handle_click(MouseButton::Left, p1), Action::None);
    assert_eq!(tool.handle_click(MouseButton::Left, p2), Action::None);
    assert_eq!(tool.handle_click(MouseButton::Right, Point::ORIGIN), Action::CommitAndContinue);

    let Some(Entity::Wire(wire)) = tool.reset_and_take_completed() else {
        panic!("expected a completed wire");
    };
    assert_eq!(wire.points, vec![p1, p2]);
}

#[test]
fn test_single_point_wire_never_commits() {
    let mut editor = Editor::new();
    editor.begin_wire();
    click(&mut editor, MouseButton::Left, 0.1, 0.2);

    // the dangling point is dropped and the tool stays armed
    assert_eq!(
        editor.dispatch(InputEvent::Click(MouseButton::Right, Point::ORIGIN)),
        Action::None
    );
    assert_eq!(editor.tool().name(), "wire");

    assert_eq!(
        editor.dispatch(InputEvent::Click(MouseButton::Right, Point::ORIGIN)),
        Action::AbortAndExit
    );
    assert!(editor.tool().is_select());
    assert!(editor.entities().is_empty());
}

#[test]
fn test_backspace_then_commit() {
    let mut editor = Editor::new();
    editor.begin_wire();
    click(&mut editor, MouseButton::Left, 0.1, 0.1);
    click(&mut editor, MouseButton::Left, 0.2, 0.2);
    click(&mut editor, MouseButton::Left, 0.9, 0.9);
    editor.dispatch(InputEvent::Key(Key::Backspace));
    click(&mut editor, MouseButton::Right, 0.0, 0.0);

    let Entity::Wire(wire) = &editor.entities()[0] else {
        panic!("expected a wire");
    };
    assert_eq!(wire.points, vec![Point::new(0.1, 0.1), Point::new(0.2, 0.2)]);
}

#[test]
fn test_pin_and_text_tools_persist() {
    let mut editor = Editor::new();
    editor.begin_pin();
    click(&mut editor, MouseButton::Left, 0.1, 0.1);
    click(&mut editor, MouseButton::Left, 0.2, 0.2);
    assert_eq!(editor.entities().len(), 2);
    assert_eq!(editor.tool().name(), "pin");

    editor.begin_text();
    click(&mut editor, MouseButton::Left, 0.3, 0.3);
    editor.dispatch(InputEvent::Key(Key::Char('r')));
    click(&mut editor, MouseButton::Left, 0.4, 0.4);
    assert_eq!(editor.entities().len(), 4);
    click(&mut editor, MouseButton::Right, 0.0, 0.0);
    assert!(editor.tool().is_select());

    let Entity::Text(last) = &editor.entities()[3] else {
        panic!("expected a text");
    };
    assert_eq!(last.angle(), 90.0);
    assert_eq!(last.location, Point::new(0.4, 0.4));
}

#[test]
fn test_text_rotation_wraps() {
    let mut tool = TextTool::new(LayerAffinity::TOP, true);
    tool.text_mut().set_angle(350.0);
    tool.handle_key(Key::Char('r'));
    tool.handle_key(Key::Char('r'));
    assert_eq!(tool.text().angle(), 170.0);
    assert!(Entity::Text(tool.take_copy()).export().ends_with(" 0"));
}

#[test]
fn test_preview_follows_layer_and_focus() {
    let mut editor = Editor::new();
    editor.set_active_layers(LayerAffinity::BOTTOM);
    editor.begin_pin();

    let mut top = DisplayList::new();
    let mut bottom = DisplayList::new();
    editor.dispatch(InputEvent::Focus(true));
    editor.dispatch(InputEvent::Move(Point::new(0.5, 0.5)));
    editor.render(LayerAffinity::TOP, &identity, &mut top);
    editor.render(LayerAffinity::BOTTOM, &identity, &mut bottom);
    assert!(top.is_empty());
    assert_eq!(bottom.len(), 1);
}

fn layer_strategy() -> impl Strategy<Value = LayerAffinity> {
    prop_oneof![
        Just(LayerAffinity::NONE),
        Just(LayerAffinity::TOP),
        Just(LayerAffinity::BOTTOM),
        Just(LayerAffinity::BOTH),
    ]
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (0.0f64..1.0, 0.0f64..1.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn prop_tool_wire_round_trips(
        layer in layer_strategy(),
        net in "[A-Za-z0-9_]{0,8}",
        points in prop::collection::vec(point_strategy(), 2..8),
    ) {
        let mut tool = WireTool::new(layer, true);
        for p in &points {
            tool.handle_click(MouseButton::Left, *p);
        }
        prop_assert_eq!(tool.handle_click(MouseButton::Right, Point::ORIGIN), Action::CommitAndContinue);
        let mut wire = tool.reset_and_take_completed().unwrap();
        wire.common.net_name = net;

        let entity = Entity::Wire(wire);
        prop_assert_eq!(round_trip(&entity), entity);
    }

    #[test]
    fn prop_tool_pin_round_trips(
        layer in layer_strategy(),
        component in "[A-Z0-9]{0,4}",
        number in "[A-Z0-9]{1,4}",
        at in point_strategy(),
    ) {
        let mut tool = PinTool::new(layer, true);
        tool.pin_mut().common.component = component;
        tool.pin_mut().number = number;
        tool.handle_click(MouseButton::Left, at);

        let entity = Entity::Pin(tool.take_copy());
        prop_assert_eq!(round_trip(&entity), entity);
    }

    #[test]
    fn prop_tool_text_round_trip_drops_angle(
        layer in layer_strategy(),
        label in "[A-Za-z0-9]{0,8}",
        rotations in 0usize..8,
        at in point_strategy(),
    ) {
        let mut tool = TextTool::new(layer, true);
        tool.text_mut().text = label;
        for _ in 0..rotations {
            tool.handle_key(Key::Char('r'));
        }
        tool.handle_click(MouseButton::Left, at);

        let mut text = tool.take_copy();
        let Entity::Text(back) = round_trip(&Entity::Text(text.clone())) else {
            panic!("expected a text");
        };
        prop_assert_eq!(back.angle(), 0.0);
        text.set_angle(0.0);
        prop_assert_eq!(back, text);
    }

    #[test]
    fn prop_persisted_wires_have_two_points(clicks in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut editor = Editor::new();
        editor.begin_wire();
        for left in clicks {
            let button = if left { MouseButton::Left } else { MouseButton::Right };
            if editor.tool().is_select() {
                editor.begin_wire();
            }
            editor.dispatch(InputEvent::Click(button, Point::new(0.5, 0.5)));
        }
        for entity in editor.entities() {
            let Entity::Wire(wire) = entity else {
                panic!("only wires are drawn here");
            };
            prop_assert!(wire.points.len() >= 2);
        }
    }
}
