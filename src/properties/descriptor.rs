//! Static property descriptor tables

use super::{Property, PropertyList, PropertyValue};

/// Getter/setter pair projecting one field of `T` as a named property.
///
/// `set` returns `false` when the value has the wrong kind for the field;
/// the field is then left untouched.
pub struct PropertyDescriptor<T> {
    pub name: &'static str,
    pub category: &'static str,
    pub read_only: bool,
    pub get: fn(&T) -> PropertyValue,
    pub set: fn(&mut T, &PropertyValue) -> bool,
}

impl<T> PropertyDescriptor<T> {
    /// Build the property entry for `target`
    pub fn to_property(&self, target: &T) -> Property {
        Property::new(self.name, (self.get)(target))
            .with_category(self.category)
            .with_read_only(self.read_only)
    }
}

/// Append one entry per descriptor, in table order
pub fn collect<T>(table: &[PropertyDescriptor<T>], target: &T, list: &mut PropertyList) {
    for descriptor in table {
        list.add(descriptor.to_property(target));
    }
}

/// Apply `value` through the descriptor named `name`.
///
/// Returns `true` if a writable descriptor matched and accepted the value.
pub fn apply<T>(
    table: &[PropertyDescriptor<T>],
    target: &mut T,
    name: &str,
    value: &PropertyValue,
) -> bool {
    table
        .iter()
        .find(|d| d.name == name && !d.read_only)
        .map(|d| (d.set)(target, value))
        .unwrap_or(false)
}
