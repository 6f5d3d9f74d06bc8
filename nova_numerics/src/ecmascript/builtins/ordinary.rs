// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)

use crate::ecmascript::{
    abstract_operations::operations_on_objects::{call_function, create_data_property},
    execution::{Agent, JsResult},
    types::{
        InternalMethods, InternalSlots, Object, OrdinaryObject, PropertyAttributes,
        PropertyDescriptor, PropertyKey, PropertySlot, PropertyValue, Value,
    },
};

/// ### [10.1.5.1 OrdinaryGetOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinarygetownproperty)
pub(crate) fn ordinary_get_own_property(
    agent: &Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
) -> Option<PropertyDescriptor> {
    // 1. If O does not have an own property with key P, return undefined.
    // 2-9. Let D be a newly created Property Descriptor populated from X.
    agent[object]
        .properties
        .get(&property_key)
        .map(PropertySlot::to_property_descriptor)
}

/// ### [10.1.6.1 OrdinaryDefineOwnProperty ( O, P, Desc )](https://tc39.es/ecma262/#sec-ordinarydefineownproperty)
pub(crate) fn ordinary_define_own_property(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
    descriptor: PropertyDescriptor,
) -> bool {
    // 2. Let extensible be ? IsExtensible(O).
    let data = &mut agent[object];
    let extensible = data.extensible;
    // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
    match data.properties.get_mut(&property_key) {
        Some(current) => current.validate_and_apply(descriptor),
        // 2. If current is undefined, then
        None => {
            // a. If extensible is false, return false.
            if !extensible {
                return false;
            }
            // c. If IsAccessorDescriptor(Desc) is true, then create an own
            //    accessor property; else create an own data property.
            data.properties
                .insert(property_key, PropertySlot::from_descriptor(descriptor));
            // e. Return true.
            true
        }
    }
}

/// ### [10.1.7.1 OrdinaryHasProperty ( O, P )](https://tc39.es/ecma262/#sec-ordinaryhasproperty)
pub(crate) fn ordinary_has_property(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
) -> JsResult<bool> {
    // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
    let backing_object = object.get_backing_object(agent);
    // 2. If hasOwn is not undefined, return true.
    if agent[backing_object].properties.contains_key(&property_key) {
        return Ok(true);
    }
    // 3. Let parent be ? O.[[GetPrototypeOf]]().
    // 4. If parent is not null, then
    if let Some(parent) = object.internal_get_prototype_of(agent)? {
        // a. Return ? parent.[[HasProperty]](P).
        return parent.internal_has_property(agent, property_key);
    }
    // 5. Return false.
    Ok(false)
}

/// ### [10.1.8.1 OrdinaryGet ( O, P, Receiver )](https://tc39.es/ecma262/#sec-ordinaryget)
pub(crate) fn ordinary_get(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    receiver: Value,
) -> JsResult<Value> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let backing_object = object.get_backing_object(agent);
    let Some(slot) = agent[backing_object]
        .properties
        .get(&property_key)
        .map(|slot| slot.value().clone())
    else {
        // 2. If desc is undefined, then
        // a. Let parent be ? O.[[GetPrototypeOf]]().
        let Some(parent) = object.internal_get_prototype_of(agent)? else {
            // b. If parent is null, return undefined.
            return Ok(Value::Undefined);
        };
        // c. Return ? parent.[[Get]](P, Receiver).
        return parent.internal_get(agent, property_key, receiver);
    };

    match slot {
        // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
        PropertyValue::Data(value) => Ok(value),
        // 4. Assert: IsAccessorDescriptor(desc) is true.
        // 5. Let getter be desc.[[Get]].
        PropertyValue::Accessor { get, .. } => match get {
            // 6. If getter is undefined, return undefined.
            None => Ok(Value::Undefined),
            // 7. Return ? Call(getter, Receiver).
            Some(getter) => call_function(agent, getter, receiver, None),
        },
        PropertyValue::Native(native) => {
            let owner = Object::try_from(receiver).unwrap_or(object);
            native.get(agent, owner)
        }
    }
}

/// ### [10.1.9.1 OrdinarySet ( O, P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinaryset)
pub(crate) fn ordinary_set(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
) -> JsResult<bool> {
    // 1. Let ownDesc be ? O.[[GetOwnProperty]](P).
    let backing_object = object.get_backing_object(agent);
    let own_slot = agent[backing_object].properties.get(&property_key).cloned();
    // 2. Return ? OrdinarySetWithOwnDescriptor(O, P, V, Receiver, ownDesc).
    ordinary_set_with_own_descriptor(agent, object, property_key, value, receiver, own_slot)
}

/// ### [10.1.9.2 OrdinarySetWithOwnDescriptor ( O, P, V, Receiver, ownDesc )](https://tc39.es/ecma262/#sec-ordinarysetwithowndescriptor)
fn ordinary_set_with_own_descriptor(
    agent: &mut Agent,
    object: Object,
    property_key: PropertyKey,
    value: Value,
    receiver: Value,
    own_slot: Option<PropertySlot>,
) -> JsResult<bool> {
    let own_slot = match own_slot {
        Some(own_slot) => own_slot,
        // 1. If ownDesc is undefined, then
        None => {
            // a. Let parent be ? O.[[GetPrototypeOf]]().
            // b. If parent is not null, then
            if let Some(parent) = object.internal_get_prototype_of(agent)? {
                // i. Return ? parent.[[Set]](P, V, Receiver).
                return parent.internal_set(agent, property_key, value, receiver);
            }
            // c. Else,
            // i. Set ownDesc to the PropertyDescriptor { [[Value]]: undefined,
            //    [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
            PropertySlot::data(Value::Undefined, PropertyAttributes::ALL)
        }
    };

    let attributes = own_slot.attributes();
    match own_slot.value {
        // 2. If IsDataDescriptor(ownDesc) is true, then
        PropertyValue::Data(_) => {
            // a. If ownDesc.[[Writable]] is false, return false.
            if !attributes.is_writable() {
                return Ok(false);
            }
            // b. If Receiver is not an Object, return false.
            let Ok(receiver) = Object::try_from(receiver) else {
                return Ok(false);
            };
            // c. Let existingDescriptor be ? Receiver.[[GetOwnProperty]](P).
            // d. If existingDescriptor is not undefined, then
            if let Some(existing_descriptor) =
                receiver.internal_get_own_property(agent, property_key)?
            {
                // i. If IsAccessorDescriptor(existingDescriptor) is true, return false.
                if existing_descriptor.is_accessor_descriptor() {
                    return Ok(false);
                }
                // ii. If existingDescriptor.[[Writable]] is false, return false.
                if existing_descriptor.writable == Some(false) {
                    return Ok(false);
                }
                // iii. Let valueDesc be the PropertyDescriptor { [[Value]]: V }.
                let value_descriptor = PropertyDescriptor {
                    value: Some(value),
                    ..Default::default()
                };
                // iv. Return ? Receiver.[[DefineOwnProperty]](P, valueDesc).
                receiver.internal_define_own_property(agent, property_key, value_descriptor)
            } else {
                // e. Else,
                // i. Assert: Receiver does not currently have a property P.
                // ii. Return ? CreateDataProperty(Receiver, P, V).
                create_data_property(agent, receiver, property_key, value)
            }
        }
        // 3. Assert: IsAccessorDescriptor(ownDesc) is true.
        // 4. Let setter be ownDesc.[[Set]].
        PropertyValue::Accessor { set, .. } => {
            // 5. If setter is undefined, return false.
            let Some(setter) = set else {
                return Ok(false);
            };
            // 6. Perform ? Call(setter, Receiver, « V »).
            call_function(agent, setter, receiver, Some(&[value]))?;
            // 7. Return true.
            Ok(true)
        }
        // A native accessor without a setter ignores the write instead of
        // failing it.
        PropertyValue::Native(native) => {
            let owner = Object::try_from(receiver).unwrap_or(object);
            native.set(agent, owner, value)?;
            Ok(true)
        }
    }
}

/// ### [10.1.10.1 OrdinaryDelete ( O, P )](https://tc39.es/ecma262/#sec-ordinarydelete)
pub(crate) fn ordinary_delete(
    agent: &mut Agent,
    object: OrdinaryObject,
    property_key: PropertyKey,
) -> bool {
    let properties = &mut agent[object].properties;
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let configurable = properties
        .get(&property_key)
        .map(|slot| slot.attributes().is_configurable());
    match configurable {
        // 2. If desc is undefined, return true.
        None => true,
        // 3. If desc.[[Configurable]] is true, then
        Some(true) => {
            // a. Remove the own property with name P from O.
            properties.remove(&property_key);
            // b. Return true.
            true
        }
        // 4. Return false.
        Some(false) => false,
    }
}

/// ### [10.1.11.1 OrdinaryOwnPropertyKeys ( O )](https://tc39.es/ecma262/#sec-ordinaryownpropertykeys)
///
/// Keys are returned in insertion order. There are no array index keys in
/// this engine core.
pub(crate) fn ordinary_own_property_keys(agent: &Agent, object: OrdinaryObject) -> Vec<PropertyKey> {
    agent[object].properties.keys().collect()
}
