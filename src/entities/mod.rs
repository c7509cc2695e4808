//! Annotation entities: wires, pins and text labels

use crate::properties::{self, PropertyDescriptor, PropertyList, PropertyValue, BASIC_CATEGORY};
use crate::render::{CoordinateTransform, Surface};
use crate::types::{Color, LayerAffinity};
use std::fmt;

pub mod defaults;
pub mod pin;
pub mod text;
pub mod wire;

pub use defaults::{EntityDefaults, VariantStyle};
pub use pin::Pin;
pub use text::Text;
pub use wire::Wire;

/// Attributes shared by every entity variant
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Layer(s) the entity is drawn on
    pub layer: LayerAffinity,
    /// Electrical net name
    pub net_name: String,
    /// Component designator (e.g. `U1`)
    pub component: String,
    /// Stroke size in device units, at least 1
    pub size: u32,
    /// Stroke and fill color
    pub color: Color,
    /// Host-managed selection flag, never persisted
    pub selected: bool,
}

impl EntityCommon {
    /// Create common data for `layer` with the given style
    pub fn styled(layer: LayerAffinity, style: VariantStyle) -> Self {
        EntityCommon {
            layer,
            net_name: String::new(),
            component: String::new(),
            size: style.size.max(1),
            color: style.color,
            selected: false,
        }
    }

    /// Set the stroke size, clamped to at least 1
    pub fn set_size(&mut self, size: i64) {
        self.size = size.clamp(1, u32::MAX as i64) as u32;
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        EntityCommon::styled(LayerAffinity::BOTH, VariantStyle {
            size: 1,
            color: Color::WHITE,
        })
    }
}

fn get_net(c: &EntityCommon) -> PropertyValue {
    PropertyValue::String(c.net_name.clone())
}

fn set_net(c: &mut EntityCommon, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::String(s) => {
            c.net_name = s.clone();
            true
        }
        _ => false,
    }
}

fn get_layer(c: &EntityCommon) -> PropertyValue {
    PropertyValue::Layer(c.layer)
}

fn set_layer(c: &mut EntityCommon, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::Layer(l) => {
            c.layer = *l;
            true
        }
        _ => false,
    }
}

fn get_size(c: &EntityCommon) -> PropertyValue {
    PropertyValue::Integer(c.size as i64)
}

fn set_size(c: &mut EntityCommon, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::Integer(i) => {
            c.set_size(*i);
            true
        }
        _ => false,
    }
}

fn get_component(c: &EntityCommon) -> PropertyValue {
    PropertyValue::String(c.component.clone())
}

fn set_component(c: &mut EntityCommon, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::String(s) => {
            c.component = s.clone();
            true
        }
        _ => false,
    }
}

fn get_color(c: &EntityCommon) -> PropertyValue {
    PropertyValue::Color(c.color)
}

fn set_color(c: &mut EntityCommon, v: &PropertyValue) -> bool {
    match v {
        PropertyValue::Color(color) => {
            c.color = *color;
            true
        }
        _ => false,
    }
}

/// Properties shared by all variants, in display order
pub const BASE_PROPERTIES: &[PropertyDescriptor<EntityCommon>] = &[
    PropertyDescriptor {
        name: "Net",
        category: BASIC_CATEGORY,
        read_only: false,
        get: get_net,
        set: set_net,
    },
    PropertyDescriptor {
        name: "Layer",
        category: BASIC_CATEGORY,
        read_only: false,
        get: get_layer,
        set: set_layer,
    },
    PropertyDescriptor {
        name: "Size",
        category: BASIC_CATEGORY,
        read_only: false,
        get: get_size,
        set: set_size,
    },
    PropertyDescriptor {
        name: "Component",
        category: BASIC_CATEGORY,
        read_only: false,
        get: get_component,
        set: set_component,
    },
    PropertyDescriptor {
        name: "Color",
        category: BASIC_CATEGORY,
        read_only: false,
        get: get_color,
        set: set_color,
    },
];

/// A persisted annotation
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Wire(Wire),
    Pin(Pin),
    Text(Text),
}

impl Entity {
    /// Tag that starts the entity's persisted line
    pub fn type_tag(&self) -> &'static str {
        match self {
            Entity::Wire(_) => Wire::TYPE_TAG,
            Entity::Pin(_) => Pin::TYPE_TAG,
            Entity::Text(_) => Text::TYPE_TAG,
        }
    }

    /// Attributes shared by every variant
    pub fn common(&self) -> &EntityCommon {
        match self {
            Entity::Wire(e) => &e.common,
            Entity::Pin(e) => &e.common,
            Entity::Text(e) => &e.common,
        }
    }

    /// Mutable access to the shared attributes
    pub fn common_mut(&mut self) -> &mut EntityCommon {
        match self {
            Entity::Wire(e) => &mut e.common,
            Entity::Pin(e) => &mut e.common,
            Entity::Text(e) => &mut e.common,
        }
    }

    /// Layer(s) the entity is drawn on
    pub fn layer(&self) -> LayerAffinity {
        self.common().layer
    }

    /// Whether the host has this entity selected
    pub fn is_selected(&self) -> bool {
        self.common().selected
    }

    /// Set the host selection flag
    pub fn set_selected(&mut self, selected: bool) {
        self.common_mut().selected = selected;
    }

    /// Draw the entity if it belongs on `target_layer`.
    ///
    /// `highlighted` adds a wider translucent halo under the nominal stroke.
    pub fn draw(
        &self,
        target_layer: LayerAffinity,
        transform: &dyn CoordinateTransform,
        surface: &mut dyn Surface,
        highlighted: bool,
    ) {
        match self {
            Entity::Wire(e) => e.draw(target_layer, transform, surface, highlighted),
            Entity::Pin(e) => e.draw(target_layer, transform, surface, highlighted),
            Entity::Text(e) => e.draw(target_layer, transform, surface, highlighted),
        }
    }

    /// Serialize to one persisted line
    pub fn export(&self) -> String {
        crate::io::export_entity(self)
    }

    /// Base properties followed by the variant's own
    pub fn properties(&self) -> PropertyList {
        let mut list = PropertyList::new();
        properties::collect(BASE_PROPERTIES, self.common(), &mut list);
        match self {
            Entity::Wire(_) => {}
            Entity::Pin(e) => properties::collect(pin::PIN_PROPERTIES, e, &mut list),
            Entity::Text(e) => properties::collect(text::TEXT_PROPERTIES, e, &mut list),
        }
        list
    }

    /// Apply an edited property.
    ///
    /// Unknown names and values of the wrong kind are ignored; returns
    /// whether the entity was changed.
    pub fn change_property(&mut self, name: &str, value: &PropertyValue) -> bool {
        if properties::apply(BASE_PROPERTIES, self.common_mut(), name, value) {
            return true;
        }
        match self {
            Entity::Wire(_) => false,
            Entity::Pin(e) => properties::apply(pin::PIN_PROPERTIES, e, name, value),
            Entity::Text(e) => properties::apply(text::TEXT_PROPERTIES, e, name, value),
        }
    }

    /// Copy of this entity with transient preview state reset
    pub fn committed_copy(&self) -> Entity {
        match self {
            Entity::Wire(e) => Entity::Wire(e.committed_copy()),
            Entity::Pin(e) => Entity::Pin(e.clone()),
            Entity::Text(e) => Entity::Text(e.clone()),
        }
    }
}

impl From<Wire> for Entity {
    fn from(w: Wire) -> Self {
        Entity::Wire(w)
    }
}

impl From<Pin> for Entity {
    fn from(p: Pin) -> Self {
        Entity::Pin(p)
    }
}

impl From<Text> for Entity {
    fn from(t: Text) -> Self {
        Entity::Text(t)
    }
}

/// One-line summary used by entity list widgets
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Wire(e) => write!(f, "WIRE : Net {} : {}", e.common.net_name, e.common.color),
            Entity::Pin(e) => write!(
                f,
                "PIN : {}.{} : Net {} : {}",
                e.common.component, e.number, e.common.net_name, e.common.color
            ),
            Entity::Text(e) => write!(
                f,
                "TEXT : '{}' : Net {} : {}",
                e.text, e.common.net_name, e.common.color
            ),
        }
    }
}
