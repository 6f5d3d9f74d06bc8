// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builtins::NativeProperty,
    execution::Agent,
    types::{PropertyAttributes, PropertyKey, PropertySlot, Value},
};

#[doc(hidden)]
#[derive(Default, Clone, Copy)]
pub struct NoKey;

#[doc(hidden)]
#[derive(Default, Clone, Copy)]
pub struct NoDefinition;

#[doc(hidden)]
#[derive(Clone, Copy)]
pub struct CreatorKey(PropertyKey);

#[doc(hidden)]
#[derive(Clone, Copy)]
pub struct CreatorValue(Value);

#[doc(hidden)]
#[derive(Clone, Copy)]
pub struct CreatorReadOnlyValue(Value);

#[doc(hidden)]
#[derive(Clone)]
pub struct CreatorNativeAccessor(NativeProperty);

/// Builder struct for creating object properties in embedders.
pub struct PropertyBuilder<'agent, K, D> {
    pub(crate) agent: &'agent mut Agent,
    key: K,
    definition: D,
    enumerable: bool,
    configurable: bool,
}

impl<'agent> PropertyBuilder<'agent, NoKey, NoDefinition> {
    /// Create a new property builder. Properties are enumerable and
    /// configurable unless told otherwise.
    pub(crate) fn new(agent: &'agent mut Agent) -> Self {
        PropertyBuilder {
            agent,
            key: NoKey,
            definition: NoDefinition,
            enumerable: true,
            configurable: true,
        }
    }
}

impl<'agent, D> PropertyBuilder<'agent, NoKey, D> {
    /// Set the property key.
    pub fn with_key(self, key: PropertyKey) -> PropertyBuilder<'agent, CreatorKey, D> {
        PropertyBuilder {
            agent: self.agent,
            key: CreatorKey(key),
            definition: self.definition,
            enumerable: self.enumerable,
            configurable: self.configurable,
        }
    }

    /// Set the property key from a string, interning it on the heap.
    pub fn with_key_from_str(self, key: &str) -> PropertyBuilder<'agent, CreatorKey, D> {
        let key = PropertyKey::from_str(self.agent, key);
        self.with_key(key)
    }
}

impl<'agent, K> PropertyBuilder<'agent, K, NoDefinition> {
    /// Set the property value.
    pub fn with_value(self, value: Value) -> PropertyBuilder<'agent, K, CreatorValue> {
        PropertyBuilder {
            agent: self.agent,
            key: self.key,
            definition: CreatorValue(value),
            enumerable: self.enumerable,
            configurable: self.configurable,
        }
    }

    /// Set the property value and make it read-only.
    pub fn with_value_readonly(self, value: Value) -> PropertyBuilder<'agent, K, CreatorReadOnlyValue> {
        PropertyBuilder {
            agent: self.agent,
            key: self.key,
            definition: CreatorReadOnlyValue(value),
            enumerable: self.enumerable,
            configurable: self.configurable,
        }
    }

    /// Create a value for the property.
    pub fn with_value_creator(
        self,
        creator: impl FnOnce(&mut Agent) -> Value,
    ) -> PropertyBuilder<'agent, K, CreatorValue> {
        let value = creator(self.agent);
        self.with_value(value)
    }

    /// Create a value for the property and make it read-only.
    pub fn with_value_creator_readonly(
        self,
        creator: impl FnOnce(&mut Agent) -> Value,
    ) -> PropertyBuilder<'agent, K, CreatorReadOnlyValue> {
        let value = creator(self.agent);
        self.with_value_readonly(value)
    }

    /// Serve the property's reads and writes with host closures.
    pub fn with_native_accessor(
        self,
        native: NativeProperty,
    ) -> PropertyBuilder<'agent, K, CreatorNativeAccessor> {
        PropertyBuilder {
            agent: self.agent,
            key: self.key,
            definition: CreatorNativeAccessor(native),
            enumerable: self.enumerable,
            configurable: self.configurable,
        }
    }
}

impl<'agent, K, D> PropertyBuilder<'agent, K, D> {
    /// Set the `enumerable` flag of the property.
    pub fn with_enumerable(self, enumerable: bool) -> PropertyBuilder<'agent, K, D> {
        PropertyBuilder {
            agent: self.agent,
            key: self.key,
            definition: self.definition,
            enumerable,
            configurable: self.configurable,
        }
    }

    /// Set the `configurable` flag of the property.
    pub fn with_configurable(self, configurable: bool) -> PropertyBuilder<'agent, K, D> {
        PropertyBuilder {
            agent: self.agent,
            key: self.key,
            definition: self.definition,
            enumerable: self.enumerable,
            configurable,
        }
    }
}

impl PropertyBuilder<'_, CreatorKey, CreatorValue> {
    /// Builds the property.
    pub fn build(self) -> (PropertyKey, PropertySlot) {
        (
            self.key.0,
            PropertySlot::data(
                self.definition.0,
                PropertyAttributes::new(true, self.enumerable, self.configurable),
            ),
        )
    }
}

impl PropertyBuilder<'_, CreatorKey, CreatorReadOnlyValue> {
    /// Builds the property.
    pub fn build(self) -> (PropertyKey, PropertySlot) {
        (
            self.key.0,
            PropertySlot::data(
                self.definition.0,
                PropertyAttributes::new(false, self.enumerable, self.configurable),
            ),
        )
    }
}

impl PropertyBuilder<'_, CreatorKey, CreatorNativeAccessor> {
    /// Builds the property.
    pub fn build(self) -> (PropertyKey, PropertySlot) {
        (
            self.key.0,
            PropertySlot::native(self.definition.0, self.enumerable, self.configurable),
        )
    }
}
