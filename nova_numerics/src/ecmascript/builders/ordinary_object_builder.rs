// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::property_builder::{self, PropertyBuilder};
use crate::ecmascript::{
    builtins::{Builtin, BuiltinFunctionArgs, NativeProperty, create_builtin_function},
    execution::{Agent, RealmIdentifier},
    types::{
        IntoObject, IntoValue, Object, ObjectHeapData, OrdinaryObject, PropertyAttributes,
        PropertyKey, PropertySlot, PropertyStorage, Value,
    },
};

#[derive(Default, Clone, Copy)]
pub struct NoPrototype;

#[derive(Clone, Copy)]
pub struct CreatorPrototype(Object);

#[derive(Default, Clone, Copy)]
pub struct NoProperties;

#[derive(Clone)]
pub struct CreatorProperties(Vec<(PropertyKey, PropertySlot)>);

/// Builds an ordinary object into a reserved heap slot.
///
/// Every property registered on the builder must have a distinct key and the
/// number of properties must match the declared capacity; both are checked
/// when the object is built.
pub struct OrdinaryObjectBuilder<'agent, P, Pr> {
    pub(crate) agent: &'agent mut Agent,
    this: OrdinaryObject,
    realm: RealmIdentifier,
    prototype: P,
    extensible: bool,
    properties: Pr,
}

impl<'agent> OrdinaryObjectBuilder<'agent, NoPrototype, NoProperties> {
    #[must_use]
    pub fn new(agent: &'agent mut Agent, realm: RealmIdentifier) -> Self {
        let this = agent.heap.reserve_object();
        Self {
            agent,
            this,
            realm,
            prototype: NoPrototype,
            extensible: true,
            properties: NoProperties,
        }
    }

    #[must_use]
    pub(crate) fn new_intrinsic_object(
        agent: &'agent mut Agent,
        realm: RealmIdentifier,
        this: OrdinaryObject,
    ) -> Self {
        Self {
            agent,
            this,
            realm,
            prototype: NoPrototype,
            extensible: true,
            properties: NoProperties,
        }
    }
}

impl<P, Pr> OrdinaryObjectBuilder<'_, P, Pr> {
    #[must_use]
    pub fn with_extensible(self, extensible: bool) -> Self {
        Self { extensible, ..self }
    }
}

impl<'agent, Pr> OrdinaryObjectBuilder<'agent, NoPrototype, Pr> {
    #[must_use]
    pub fn with_prototype(
        self,
        prototype: impl IntoObject,
    ) -> OrdinaryObjectBuilder<'agent, CreatorPrototype, Pr> {
        OrdinaryObjectBuilder {
            agent: self.agent,
            this: self.this,
            realm: self.realm,
            prototype: CreatorPrototype(prototype.into_object()),
            extensible: self.extensible,
            properties: self.properties,
        }
    }
}

impl<'agent, P> OrdinaryObjectBuilder<'agent, P, NoProperties> {
    #[must_use]
    pub fn with_property_capacity(
        self,
        cap: usize,
    ) -> OrdinaryObjectBuilder<'agent, P, CreatorProperties> {
        OrdinaryObjectBuilder {
            agent: self.agent,
            this: self.this,
            realm: self.realm,
            prototype: self.prototype,
            extensible: self.extensible,
            properties: CreatorProperties(Vec::with_capacity(cap)),
        }
    }
}

impl<P> OrdinaryObjectBuilder<'_, P, CreatorProperties> {
    /// Adds a writable, enumerable and configurable data property.
    #[must_use]
    pub fn with_data_property(mut self, key: PropertyKey, value: Value) -> Self {
        self.properties
            .0
            .push((key, PropertySlot::data(value, PropertyAttributes::ALL)));
        self
    }

    #[must_use]
    pub fn with_property(
        mut self,
        creator: impl FnOnce(
            PropertyBuilder<'_, property_builder::NoKey, property_builder::NoDefinition>,
        ) -> (PropertyKey, PropertySlot),
    ) -> Self {
        let builder = PropertyBuilder::new(self.agent);
        let property = creator(builder);
        self.properties.0.push(property);
        self
    }

    /// Adds a non-enumerable, configurable accessor served by host closures.
    #[must_use]
    pub fn with_native_property(mut self, key: PropertyKey, native: NativeProperty) -> Self {
        self.properties
            .0
            .push((key, PropertySlot::native(native, false, true)));
        self
    }

    #[must_use]
    pub fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let function = create_builtin_function(
            self.agent,
            T::BEHAVIOUR,
            BuiltinFunctionArgs::new(T::LENGTH.into(), T::NAME, self.realm),
        );
        let key = match T::KEY {
            Some(symbol) => PropertyKey::from(symbol),
            None => PropertyKey::from_str(self.agent, T::NAME),
        };
        self.properties.0.push((
            key,
            PropertySlot::data(function.into_value(), T::ATTRIBUTES),
        ));
        self
    }
}

impl OrdinaryObjectBuilder<'_, NoPrototype, NoProperties> {
    pub fn build(self) -> OrdinaryObject {
        finish(self.agent, self.this, self.extensible, None, Vec::new())
    }
}

impl OrdinaryObjectBuilder<'_, CreatorPrototype, NoProperties> {
    pub fn build(self) -> OrdinaryObject {
        finish(
            self.agent,
            self.this,
            self.extensible,
            Some(self.prototype.0),
            Vec::new(),
        )
    }
}

impl OrdinaryObjectBuilder<'_, NoPrototype, CreatorProperties> {
    pub fn build(self) -> OrdinaryObject {
        assert_eq!(self.properties.0.len(), self.properties.0.capacity());
        finish(self.agent, self.this, self.extensible, None, self.properties.0)
    }
}

impl OrdinaryObjectBuilder<'_, CreatorPrototype, CreatorProperties> {
    pub fn build(self) -> OrdinaryObject {
        assert_eq!(self.properties.0.len(), self.properties.0.capacity());
        finish(
            self.agent,
            self.this,
            self.extensible,
            Some(self.prototype.0),
            self.properties.0,
        )
    }
}

fn finish(
    agent: &mut Agent,
    this: OrdinaryObject,
    extensible: bool,
    prototype: Option<Object>,
    properties: Vec<(PropertyKey, PropertySlot)>,
) -> OrdinaryObject {
    let duplicate = (1..properties.len()).find(|first_index| {
        properties[*first_index..]
            .iter()
            .any(|(key, _)| *key == properties[first_index - 1].0)
    });
    if let Some(index) = duplicate {
        panic!(
            "Duplicate key found: {}",
            properties[index - 1].0.as_display(agent)
        );
    }
    if agent.options.print_internals {
        eprintln!(
            "Built object #{} with {} properties",
            this.get_index(),
            properties.len()
        );
        for (key, slot) in properties.iter() {
            eprintln!("  {}: {:?}", key.as_display(agent), slot.attributes());
        }
    }
    let mut storage = PropertyStorage::with_capacity(properties.len());
    for (key, slot) in properties {
        storage.insert(key, slot);
    }
    let slot = agent
        .heap
        .objects
        .get_mut(this.get_index())
        .expect("Reserved object slot out of bounds");
    assert!(slot.is_none());
    *slot = Some(ObjectHeapData {
        extensible,
        prototype,
        properties: storage,
    });
    this
}
