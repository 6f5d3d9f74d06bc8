// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt::Debug;
use std::ops::{BitOr, BitOrAssign};

use ahash::RandomState;
use hashbrown::HashMap;

use super::PropertyKey;
use crate::ecmascript::{
    abstract_operations::testing_and_comparison::same_value,
    builtins::{BuiltinFunction, NativeProperty},
    types::{PropertyDescriptor, Value},
};

/// Property attribute bits. Each bit is queried independently.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PropertyAttributes(u8);

impl PropertyAttributes {
    pub const NONE: Self = Self(0);
    pub const WRITABLE: Self = Self(1 << 0);
    pub const ENUMERABLE: Self = Self(1 << 1);
    pub const CONFIGURABLE: Self = Self(1 << 2);
    pub const ALL: Self = Self(0b111);

    pub const fn new(writable: bool, enumerable: bool, configurable: bool) -> Self {
        Self::NONE
            .with_writable(writable)
            .with_enumerable(enumerable)
            .with_configurable(configurable)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_writable(self) -> bool {
        self.contains(Self::WRITABLE)
    }

    pub const fn is_enumerable(self) -> bool {
        self.contains(Self::ENUMERABLE)
    }

    pub const fn is_configurable(self) -> bool {
        self.contains(Self::CONFIGURABLE)
    }

    const fn with_bit(self, bit: Self, value: bool) -> Self {
        if value {
            Self(self.0 | bit.0)
        } else {
            Self(self.0 & !bit.0)
        }
    }

    pub const fn with_writable(self, value: bool) -> Self {
        self.with_bit(Self::WRITABLE, value)
    }

    pub const fn with_enumerable(self, value: bool) -> Self {
        self.with_bit(Self::ENUMERABLE, value)
    }

    pub const fn with_configurable(self, value: bool) -> Self {
        self.with_bit(Self::CONFIGURABLE, value)
    }
}

impl BitOr for PropertyAttributes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for PropertyAttributes {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl Debug for PropertyAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.is_writable(), 'W'),
            flag(self.is_enumerable(), 'E'),
            flag(self.is_configurable(), 'C')
        )
    }
}

/// The contents of a property slot.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Data(Value),
    Accessor {
        get: Option<BuiltinFunction>,
        set: Option<BuiltinFunction>,
    },
    /// Accessor whose getter and setter are host closures.
    Native(NativeProperty),
}

#[derive(Debug, Clone)]
pub struct PropertySlot {
    pub(crate) value: PropertyValue,
    pub(crate) attributes: PropertyAttributes,
}

impl PropertySlot {
    pub fn data(value: Value, attributes: PropertyAttributes) -> Self {
        Self {
            value: PropertyValue::Data(value),
            attributes,
        }
    }

    pub fn native(native: NativeProperty, enumerable: bool, configurable: bool) -> Self {
        Self {
            value: PropertyValue::Native(native),
            attributes: PropertyAttributes::new(false, enumerable, configurable),
        }
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn attributes(&self) -> PropertyAttributes {
        self.attributes
    }

    pub fn is_accessor(&self) -> bool {
        !matches!(self.value, PropertyValue::Data(_))
    }

    /// Creates a new slot out of a descriptor. Absent fields take their
    /// default values.
    pub(crate) fn from_descriptor(mut descriptor: PropertyDescriptor) -> Self {
        let attributes = PropertyAttributes::new(
            descriptor.writable.unwrap_or(false),
            descriptor.enumerable.unwrap_or(false),
            descriptor.configurable.unwrap_or(false),
        );
        let value = if let Some(native) = descriptor.native.take() {
            PropertyValue::Native(native)
        } else if descriptor.is_accessor_descriptor() {
            PropertyValue::Accessor {
                get: descriptor.get.flatten(),
                set: descriptor.set.flatten(),
            }
        } else {
            PropertyValue::Data(descriptor.value.unwrap_or(Value::Undefined))
        };
        let attributes = if matches!(value, PropertyValue::Data(_)) {
            attributes
        } else {
            attributes.with_writable(false)
        };
        Self { value, attributes }
    }

    pub(crate) fn to_property_descriptor(&self) -> PropertyDescriptor {
        let enumerable = Some(self.attributes.is_enumerable());
        let configurable = Some(self.attributes.is_configurable());
        match &self.value {
            PropertyValue::Data(value) => PropertyDescriptor {
                value: Some(*value),
                writable: Some(self.attributes.is_writable()),
                enumerable,
                configurable,
                ..Default::default()
            },
            PropertyValue::Accessor { get, set } => PropertyDescriptor {
                get: Some(*get),
                set: Some(*set),
                enumerable,
                configurable,
                ..Default::default()
            },
            PropertyValue::Native(native) => PropertyDescriptor {
                native: Some(native.clone()),
                enumerable,
                configurable,
                ..Default::default()
            },
        }
    }

    /// Applies a descriptor to an existing slot after checking it against
    /// the slot's current attributes. Returns false if the change is not
    /// allowed.
    pub(crate) fn validate_and_apply(&mut self, mut descriptor: PropertyDescriptor) -> bool {
        // 5. If current.[[Configurable]] is false, then
        if !self.attributes.is_configurable() {
            // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]] is true, return false.
            if descriptor.configurable == Some(true) {
                return false;
            }
            // b. If Desc has an [[Enumerable]] field and Desc.[[Enumerable]] is not current.[[Enumerable]], return false.
            if descriptor
                .enumerable
                .is_some_and(|enumerable| enumerable != self.attributes.is_enumerable())
            {
                return false;
            }
            // c. If IsGenericDescriptor(Desc) is false and IsAccessorDescriptor(Desc) is not IsAccessorDescriptor(current), return false.
            if !descriptor.is_generic_descriptor()
                && descriptor.is_accessor_descriptor() != self.is_accessor()
            {
                return false;
            }
            match &self.value {
                PropertyValue::Data(current_value) => {
                    // e. Else if current.[[Writable]] is false, then
                    if !self.attributes.is_writable() {
                        // i. If Desc has a [[Writable]] field and Desc.[[Writable]] is true, return false.
                        if descriptor.writable == Some(true) {
                            return false;
                        }
                        // ii. If Desc has a [[Value]] field and SameValue(Desc.[[Value]], current.[[Value]]) is false, return false.
                        if descriptor
                            .value
                            .is_some_and(|value| !same_value(value, *current_value))
                        {
                            return false;
                        }
                    }
                }
                // d. If IsAccessorDescriptor(current) is true, then
                _ => {
                    // i. If Desc has a [[Get]] or [[Set]] field, return false.
                    if descriptor.get.is_some()
                        || descriptor.set.is_some()
                        || descriptor.native.is_some()
                    {
                        return false;
                    }
                }
            }
        }

        // 6. If O is not undefined, then
        if let Some(native) = descriptor.native.take() {
            self.value = PropertyValue::Native(native);
            self.attributes = self.attributes.with_writable(false);
        } else if descriptor.get.is_some() || descriptor.set.is_some() {
            // a. If IsDataDescriptor(current) is true and IsAccessorDescriptor(Desc) is true, then
            //    replace the data property with an accessor property.
            let (mut get, mut set) = match self.value {
                PropertyValue::Accessor { get, set } => (get, set),
                _ => (None, None),
            };
            if let Some(new_get) = descriptor.get {
                get = new_get;
            }
            if let Some(new_set) = descriptor.set {
                set = new_set;
            }
            self.value = PropertyValue::Accessor { get, set };
            self.attributes = self.attributes.with_writable(false);
        } else if descriptor.is_data_descriptor() {
            // b. Else if IsAccessorDescriptor(current) is true and IsDataDescriptor(Desc) is true, then
            //    replace the accessor property with a data property.
            if self.is_accessor() {
                self.value = PropertyValue::Data(Value::Undefined);
                self.attributes = self.attributes.with_writable(false);
            }
            if let Some(value) = descriptor.value {
                self.value = PropertyValue::Data(value);
            }
            if let Some(writable) = descriptor.writable {
                self.attributes = self.attributes.with_writable(writable);
            }
        }
        if let Some(enumerable) = descriptor.enumerable {
            self.attributes = self.attributes.with_enumerable(enumerable);
        }
        if let Some(configurable) = descriptor.configurable {
            self.attributes = self.attributes.with_configurable(configurable);
        }
        // 7. Return true.
        true
    }
}

/// Own properties of an object in insertion order.
#[derive(Debug, Default)]
pub struct PropertyStorage {
    keys: Vec<PropertyKey>,
    slots: HashMap<PropertyKey, PropertySlot, RandomState>,
}

impl PropertyStorage {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        self.slots.contains_key(key)
    }

    pub fn get(&self, key: &PropertyKey) -> Option<&PropertySlot> {
        self.slots.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &PropertyKey) -> Option<&mut PropertySlot> {
        self.slots.get_mut(key)
    }

    /// Inserts a slot, returning the previous slot under the same key. A
    /// replaced key keeps its original position.
    pub(crate) fn insert(&mut self, key: PropertyKey, slot: PropertySlot) -> Option<PropertySlot> {
        let previous = self.slots.insert(key, slot);
        if previous.is_none() {
            self.keys.push(key);
        }
        previous
    }

    pub(crate) fn remove(&mut self, key: &PropertyKey) -> Option<PropertySlot> {
        let removed = self.slots.remove(key)?;
        self.keys.retain(|k| k != key);
        Some(removed)
    }

    pub fn keys(&self) -> impl Iterator<Item = PropertyKey> + '_ {
        self.keys.iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropertyKey, &PropertySlot)> + '_ {
        self.keys.iter().map(|key| (*key, &self.slots[key]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_bits_are_independent() {
        let attributes = PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE;
        assert!(attributes.is_writable());
        assert!(!attributes.is_enumerable());
        assert!(attributes.is_configurable());
        assert_eq!(attributes, PropertyAttributes::new(true, false, true));
        assert_eq!(attributes.with_writable(false), PropertyAttributes::CONFIGURABLE);
        assert_eq!(format!("{attributes:?}"), "W-C");
    }

    #[test]
    fn non_configurable_data_rejects_redefinition() {
        let mut slot = PropertySlot::data(Value::from(1), PropertyAttributes::NONE);
        assert!(!slot.validate_and_apply(PropertyDescriptor {
            value: Some(Value::from(2)),
            ..Default::default()
        }));
        assert!(!slot.validate_and_apply(PropertyDescriptor {
            configurable: Some(true),
            ..Default::default()
        }));
        // Same value is allowed.
        assert!(slot.validate_and_apply(PropertyDescriptor {
            value: Some(Value::from(1)),
            ..Default::default()
        }));
    }

    #[test]
    fn configurable_data_becomes_accessor() {
        let mut slot = PropertySlot::data(Value::from(1), PropertyAttributes::ALL);
        assert!(slot.validate_and_apply(PropertyDescriptor {
            native: Some(NativeProperty::new()),
            ..Default::default()
        }));
        assert!(slot.is_accessor());
        assert!(!slot.attributes().is_writable());
        assert!(slot.attributes().is_configurable());
    }
}
