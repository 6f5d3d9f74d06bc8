// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod internal_methods;
mod internal_slots;
mod property_key;
mod property_storage;

use std::ops::{Index, IndexMut};

pub use internal_methods::InternalMethods;
pub use internal_slots::InternalSlots;
pub use property_key::PropertyKey;
pub use property_storage::{PropertyAttributes, PropertySlot, PropertyStorage, PropertyValue};

use super::{IntoValue, Value};
use crate::{
    ecmascript::{
        builtins::{BuiltinFunction, error::Error},
        execution::Agent,
    },
    heap::{CreateHeapData, indexes::ObjectIndex},
};

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Object(OrdinaryObject),
    BuiltinFunction(BuiltinFunction),
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdinaryObject(pub(crate) ObjectIndex);

#[derive(Debug)]
pub struct ObjectHeapData {
    pub(crate) extensible: bool,
    pub(crate) prototype: Option<Object>,
    pub(crate) properties: PropertyStorage,
}

impl ObjectHeapData {
    pub(crate) fn new(prototype: Option<Object>, properties: PropertyStorage) -> Self {
        Self {
            extensible: true,
            prototype,
            properties,
        }
    }

    pub fn properties(&self) -> &PropertyStorage {
        &self.properties
    }
}

pub trait IntoObject
where
    Self: Sized + Copy,
{
    fn into_object(self) -> Object;
}

impl OrdinaryObject {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    /// ### [10.1.12 OrdinaryObjectCreate ( proto )](https://tc39.es/ecma262/#sec-ordinaryobjectcreate)
    pub fn create_empty(agent: &mut Agent, prototype: Option<Object>) -> Self {
        agent
            .heap
            .create(ObjectHeapData::new(prototype, PropertyStorage::default()))
    }
}

impl InternalSlots for OrdinaryObject {
    fn get_backing_object(self, _: &Agent) -> OrdinaryObject {
        self
    }
}

impl InternalMethods for OrdinaryObject {}

impl InternalSlots for Object {
    fn get_backing_object(self, agent: &Agent) -> OrdinaryObject {
        match self {
            Object::Object(data) => data,
            Object::BuiltinFunction(data) => data.get_backing_object(agent),
            Object::Error(data) => data.get_backing_object(agent),
        }
    }
}

impl InternalMethods for Object {}

impl IntoObject for Object {
    #[inline(always)]
    fn into_object(self) -> Object {
        self
    }
}

impl IntoObject for OrdinaryObject {
    fn into_object(self) -> Object {
        Object::Object(self)
    }
}

impl IntoValue for Object {
    fn into_value(self) -> Value {
        match self {
            Object::Object(data) => Value::Object(data),
            Object::BuiltinFunction(data) => Value::BuiltinFunction(data),
            Object::Error(data) => Value::Error(data),
        }
    }
}

impl IntoValue for OrdinaryObject {
    fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl From<OrdinaryObject> for Object {
    fn from(value: OrdinaryObject) -> Self {
        Object::Object(value)
    }
}

impl From<BuiltinFunction> for Object {
    fn from(value: BuiltinFunction) -> Self {
        Object::BuiltinFunction(value)
    }
}

impl From<Error> for Object {
    fn from(value: Error) -> Self {
        Object::Error(value)
    }
}

impl TryFrom<Value> for Object {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(data) => Ok(Object::Object(data)),
            Value::BuiltinFunction(data) => Ok(Object::BuiltinFunction(data)),
            Value::Error(data) => Ok(Object::Error(data)),
            _ => Err(()),
        }
    }
}

impl TryFrom<Value> for OrdinaryObject {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(data) => Ok(data),
            _ => Err(()),
        }
    }
}

impl Index<OrdinaryObject> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        self.heap
            .objects
            .get(index.get_index())
            .expect("Object out of bounds")
            .as_ref()
            .expect("Object slot empty")
    }
}

impl IndexMut<OrdinaryObject> for Agent {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        self.heap
            .objects
            .get_mut(index.get_index())
            .expect("Object out of bounds")
            .as_mut()
            .expect("Object slot empty")
    }
}
