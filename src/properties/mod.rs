//! Property bridge.
//!
//! Entities project their attributes into an ordered [`PropertyList`] of
//! named, typed, categorized values. A host property grid edits that list
//! and hands each change back as a `(name, value)` pair which every selected
//! entity applies through its descriptor table.

mod descriptor;

pub use descriptor::{apply, collect, PropertyDescriptor};

use indexmap::IndexMap;
use std::fmt;

use crate::types::{Color, Font, LayerAffinity, Point};

/// Category used for the shared entity attributes
pub const BASIC_CATEGORY: &str = "Basic";

/// Typed value of a property entry
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Color(Color),
    Layer(LayerAffinity),
    Points(Vec<Point>),
    Font(Font),
}

impl PropertyValue {
    /// Name of the value kind, for display and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Float(_) => "float",
            PropertyValue::Color(_) => "color",
            PropertyValue::Layer(_) => "layer",
            PropertyValue::Points(_) => "points",
            PropertyValue::Font(_) => "font",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(x) => write!(f, "{}", x),
            PropertyValue::Color(c) => write!(f, "{}", c),
            PropertyValue::Layer(l) => write!(f, "{}", l),
            PropertyValue::Points(points) => {
                let parts: Vec<String> = points.iter().map(Point::to_string).collect();
                f.write_str(&parts.join(" "))
            }
            PropertyValue::Font(font) => write!(f, "{}", font),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(x: f64) -> Self {
        PropertyValue::Float(x)
    }
}

impl From<Color> for PropertyValue {
    fn from(c: Color) -> Self {
        PropertyValue::Color(c)
    }
}

impl From<LayerAffinity> for PropertyValue {
    fn from(l: LayerAffinity) -> Self {
        PropertyValue::Layer(l)
    }
}

impl From<Font> for PropertyValue {
    fn from(font: Font) -> Self {
        PropertyValue::Font(font)
    }
}

/// One named entry of a property list
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
    pub category: String,
    pub read_only: bool,
    pub visible: bool,
}

impl Property {
    /// Create an editable, visible property in the basic category
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Property {
            name: name.into(),
            value: value.into(),
            category: BASIC_CATEGORY.to_string(),
            read_only: false,
            visible: true,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Ordered list of properties keyed by unique name.
///
/// Insertion order is the display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyList {
    entries: IndexMap<String, Property>,
}

impl PropertyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property. A property with the same name is replaced in place.
    pub fn add(&mut self, property: Property) {
        self.entries.insert(property.name.clone(), property);
    }

    /// Remove a property by name, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Property> {
        self.entries.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at a display position
    pub fn get_index(&self, index: usize) -> Option<&Property> {
        self.entries.get_index(index).map(|(_, p)| p)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.values()
    }

    /// Property names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Drop every entry whose name is absent from `other`
    pub fn retain_common(&mut self, other: &PropertyList) {
        self.entries.retain(|name, _| other.contains(name));
    }

    /// Merge the lists of a multi-selection.
    ///
    /// The first list is the baseline (its order and values are kept); every
    /// later list removes the baseline names it lacks. No lists yields an
    /// empty list.
    pub fn intersect<I>(lists: I) -> PropertyList
    where
        I: IntoIterator<Item = PropertyList>,
    {
        let mut lists = lists.into_iter();
        let Some(mut merged) = lists.next() else {
            return PropertyList::new();
        };
        for list in lists {
            merged.retain_common(&list);
        }
        merged
    }
}

impl FromIterator<Property> for PropertyList {
    fn from_iter<T: IntoIterator<Item = Property>>(iter: T) -> Self {
        let mut list = PropertyList::new();
        for property in iter {
            list.add(property);
        }
        list
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = indexmap::map::Values<'a, String, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
