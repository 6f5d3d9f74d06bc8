// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{InternalSlots, Object, PropertyKey};
use crate::ecmascript::{
    builtins::ordinary::{
        ordinary_define_own_property, ordinary_delete, ordinary_get, ordinary_get_own_property,
        ordinary_has_property, ordinary_own_property_keys, ordinary_set,
    },
    execution::{Agent, JsResult},
    types::{PropertyDescriptor, Value},
};

/// ### [6.1.7.2 Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-object-internal-methods-and-internal-slots)
///
/// None of the objects in this engine core are exotic, so every method
/// defaults to the ordinary algorithm run against the backing object.
pub trait InternalMethods
where
    Self: InternalSlots,
{
    /// ## \[\[GetPrototypeOf\]\]
    fn internal_get_prototype_of(self, agent: &mut Agent) -> JsResult<Option<Object>> {
        // 1. Return OrdinaryGetPrototypeOf(O).
        Ok(self.internal_prototype(agent))
    }

    /// ## \[\[GetOwnProperty\]\]
    fn internal_get_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
    ) -> JsResult<Option<PropertyDescriptor>> {
        // 1. Return OrdinaryGetOwnProperty(O, P).
        let backing_object = self.get_backing_object(agent);
        Ok(ordinary_get_own_property(agent, backing_object, property_key))
    }

    /// ## \[\[DefineOwnProperty\]\]
    fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        property_descriptor: PropertyDescriptor,
    ) -> JsResult<bool> {
        // 1. Return ? OrdinaryDefineOwnProperty(O, P, Desc).
        let backing_object = self.get_backing_object(agent);
        Ok(ordinary_define_own_property(
            agent,
            backing_object,
            property_key,
            property_descriptor,
        ))
    }

    /// ## \[\[HasProperty\]\]
    fn internal_has_property(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        // 1. Return ? OrdinaryHasProperty(O, P).
        ordinary_has_property(agent, self.into_object(), property_key)
    }

    /// ## \[\[Get\]\]
    fn internal_get(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        receiver: Value,
    ) -> JsResult<Value> {
        // 1. Return ? OrdinaryGet(O, P, Receiver).
        ordinary_get(agent, self.into_object(), property_key, receiver)
    }

    /// ## \[\[Set\]\]
    fn internal_set(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        value: Value,
        receiver: Value,
    ) -> JsResult<bool> {
        // 1. Return ? OrdinarySet(O, P, V, Receiver).
        ordinary_set(agent, self.into_object(), property_key, value, receiver)
    }

    /// ## \[\[Delete\]\]
    fn internal_delete(self, agent: &mut Agent, property_key: PropertyKey) -> JsResult<bool> {
        // 1. Return ? OrdinaryDelete(O, P).
        let backing_object = self.get_backing_object(agent);
        Ok(ordinary_delete(agent, backing_object, property_key))
    }

    /// ## \[\[OwnPropertyKeys\]\]
    fn internal_own_property_keys(self, agent: &mut Agent) -> JsResult<Vec<PropertyKey>> {
        // 1. Return OrdinaryOwnPropertyKeys(O).
        let backing_object = self.get_backing_object(agent);
        Ok(ordinary_own_property_keys(agent, backing_object))
    }
}
