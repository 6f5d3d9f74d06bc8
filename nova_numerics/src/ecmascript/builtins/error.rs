// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

use crate::{
    ecmascript::{
        execution::{Agent, agent::ExceptionType},
        types::{
            InternalMethods, InternalSlots, IntoObject, IntoValue, Object, OrdinaryObject, String,
            Value,
        },
    },
    heap::indexes::ErrorIndex,
};

/// ### [20.5 Error Objects](https://tc39.es/ecma262/#sec-error-objects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error(pub(crate) ErrorIndex);

#[derive(Debug)]
pub struct ErrorHeapData {
    pub(crate) kind: ExceptionType,
    pub(crate) message: Option<String>,
    /// The object holding the `name` and `message` properties.
    pub(crate) object_index: OrdinaryObject,
}

impl Error {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn kind(self, agent: &Agent) -> ExceptionType {
        agent[self].kind
    }
}

impl InternalSlots for Error {
    fn get_backing_object(self, agent: &Agent) -> OrdinaryObject {
        agent[self].object_index
    }
}

impl InternalMethods for Error {}

impl IntoObject for Error {
    fn into_object(self) -> Object {
        Object::Error(self)
    }
}

impl IntoValue for Error {
    fn into_value(self) -> Value {
        Value::Error(self)
    }
}

impl Index<Error> for Agent {
    type Output = ErrorHeapData;

    fn index(&self, index: Error) -> &Self::Output {
        self.heap
            .errors
            .get(index.get_index())
            .expect("Error out of bounds")
            .as_ref()
            .expect("Error slot empty")
    }
}

impl IndexMut<Error> for Agent {
    fn index_mut(&mut self, index: Error) -> &mut Self::Output {
        self.heap
            .errors
            .get_mut(index.get_index())
            .expect("Error out of bounds")
            .as_mut()
            .expect("Error slot empty")
    }
}
