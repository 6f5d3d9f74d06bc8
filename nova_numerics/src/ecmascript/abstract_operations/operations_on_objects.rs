// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)

use super::testing_and_comparison::is_callable;
use crate::ecmascript::{
    builtins::{ArgumentsList, BuiltinFunction},
    execution::{Agent, ExceptionType, JsResult},
    types::{
        InternalMethods, IntoObject, IntoValue, Object, PropertyDescriptor, PropertyKey, Value,
    },
};

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
///
/// The abstract operation Get takes arguments O (an Object) and P (a property
/// key) and returns either a normal completion containing an ECMAScript
/// language value or a throw completion. It is used to retrieve the value of a
/// specific property of an object.
pub fn get(agent: &mut Agent, o: impl IntoObject, p: PropertyKey) -> JsResult<Value> {
    let o = o.into_object();
    // 1. Return ? O.[[Get]](P, O).
    o.internal_get(agent, p, o.into_value())
}

/// ### [7.3.4 Set ( O, P, V, Throw )](https://tc39.es/ecma262/#sec-set-o-p-v-throw)
///
/// The abstract operation Set takes arguments O (an Object), P (a property
/// key), V (an ECMAScript language value), and Throw (a Boolean) and returns
/// either a normal completion containing UNUSED or a throw completion. It is
/// used to set the value of a specific property of an object. V is the new
/// value for the property.
pub fn set(
    agent: &mut Agent,
    o: impl IntoObject,
    p: PropertyKey,
    v: Value,
    throw: bool,
) -> JsResult<()> {
    let o = o.into_object();
    // 1. Let success be ? O.[[Set]](P, V, O).
    let success = o.internal_set(agent, p, v, o.into_value())?;
    // 2. If success is false and Throw is true, throw a TypeError exception.
    if !success && throw {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Could not set property."));
    }
    // 3. Return UNUSED.
    Ok(())
}

/// ### [7.3.5 CreateDataProperty ( O, P, V )](https://tc39.es/ecma262/#sec-createdataproperty)
///
/// The abstract operation CreateDataProperty takes arguments O (an Object), P
/// (a property key), and V (an ECMAScript language value) and returns either a
/// normal completion containing a Boolean or a throw completion. It is used to
/// create a new own property of an object.
///
/// > NOTE: This abstract operation creates a property whose attributes are set
/// > to the same defaults used for properties created by the ECMAScript language
/// > assignment operator. Normally, the property will not already exist. If it
/// > does exist and is not configurable or if O is not extensible,
/// > \[\[DefineOwnProperty]] will return false.
pub fn create_data_property(
    agent: &mut Agent,
    object: impl InternalMethods,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<bool> {
    // 1. Let newDesc be the PropertyDescriptor { [[Value]]: V, [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
    let new_desc = PropertyDescriptor::new_data_descriptor(value);
    // 2. Return ? O.[[DefineOwnProperty]](P, newDesc).
    object.internal_define_own_property(agent, property_key, new_desc)
}

/// ### [7.3.7 CreateDataPropertyOrThrow ( O, P, V )](https://tc39.es/ecma262/#sec-createdatapropertyorthrow)
///
/// The abstract operation CreateDataPropertyOrThrow takes arguments O (an
/// Object), P (a property key), and V (an ECMAScript language value) and
/// returns either a normal completion containing UNUSED or a throw completion.
/// It is used to create a new own property of an object. It throws a TypeError
/// exception if the requested property update cannot be performed.
pub fn create_data_property_or_throw(
    agent: &mut Agent,
    object: impl InternalMethods,
    property_key: PropertyKey,
    value: Value,
) -> JsResult<()> {
    // 1. Let success be ? CreateDataProperty(O, P, V).
    let success = create_data_property(agent, object, property_key, value)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        Err(agent.throw_exception(ExceptionType::TypeError, "Could not create property"))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.8 DefinePropertyOrThrow ( O, P, desc )](https://tc39.es/ecma262/#sec-definepropertyorthrow)
///
/// The abstract operation DefinePropertyOrThrow takes arguments O (an Object),
/// P (a property key), and desc (a Property Descriptor) and returns either a
/// normal completion containing UNUSED or a throw completion. It is used to
/// call the \[\[DefineOwnProperty]] internal method of an object in a manner
/// that will throw a TypeError exception if the requested property update
/// cannot be performed.
pub fn define_property_or_throw(
    agent: &mut Agent,
    object: impl InternalMethods,
    property_key: PropertyKey,
    desc: PropertyDescriptor,
) -> JsResult<()> {
    // 1. Let success be ? O.[[DefineOwnProperty]](P, desc).
    let success = object.internal_define_own_property(agent, property_key, desc)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Failed to define property on object",
        ))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.9 DeletePropertyOrThrow ( O, P )](https://tc39.es/ecma262/#sec-deletepropertyorthrow)
pub fn delete_property_or_throw(
    agent: &mut Agent,
    object: impl InternalMethods,
    property_key: PropertyKey,
) -> JsResult<()> {
    // 1. Let success be ? O.[[Delete]](P).
    let success = object.internal_delete(agent, property_key)?;
    // 2. If success is false, throw a TypeError exception.
    if !success {
        Err(agent.throw_exception(ExceptionType::TypeError, "Failed to delete property"))
    } else {
        // 3. Return UNUSED.
        Ok(())
    }
}

/// ### [7.3.11 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
///
/// The abstract operation GetMethod takes arguments V (an ECMAScript language
/// value) and P (a property key) and returns either a normal completion
/// containing either a function object or undefined, or a throw completion. It
/// is used to get the value of a specific property of an ECMAScript language
/// value when the value of the property is expected to be a function.
///
/// Primitive values have no wrapper objects in this engine core and so never
/// have methods.
pub(crate) fn get_method(
    agent: &mut Agent,
    v: Value,
    p: PropertyKey,
) -> JsResult<Option<BuiltinFunction>> {
    // 1. Let func be ? GetV(V, P).
    let func = match Object::try_from(v) {
        Ok(o) => get(agent, o, p)?,
        Err(_) => Value::Undefined,
    };
    // 2. If func is either undefined or null, return undefined.
    if func.is_undefined() || func.is_null() {
        return Ok(None);
    }
    // 3. If IsCallable(func) is false, throw a TypeError exception.
    // 4. Return func.
    match func {
        Value::BuiltinFunction(f) => Ok(Some(f)),
        _ => Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object")),
    }
}

/// ### [7.3.12 HasProperty ( O, P )](https://tc39.es/ecma262/#sec-hasproperty)
pub fn has_property(agent: &mut Agent, o: impl InternalMethods, p: PropertyKey) -> JsResult<bool> {
    // 1. Return ? O.[[HasProperty]](P).
    o.internal_has_property(agent, p)
}

/// ### [7.3.13 HasOwnProperty ( O, P )](https://tc39.es/ecma262/#sec-hasownproperty)
///
/// The abstract operation HasOwnProperty takes arguments O (an Object) and P
/// (a property key) and returns either a normal completion containing a
/// Boolean or a throw completion. It is used to determine whether an object
/// has an own property with the specified property key.
pub fn has_own_property(
    agent: &mut Agent,
    o: impl InternalMethods,
    p: PropertyKey,
) -> JsResult<bool> {
    // 1. Let desc be ? O.[[GetOwnProperty]](P).
    let desc = o.internal_get_own_property(agent, p)?;
    // 2. If desc is undefined, return false.
    // 3. Return true.
    Ok(desc.is_some())
}

/// ### [7.3.14 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
///
/// The abstract operation Call takes arguments F (an ECMAScript language
/// value) and V (an ECMAScript language value) and optional argument
/// argumentsList (a List of ECMAScript language values) and returns either a
/// normal completion containing an ECMAScript language value or a throw
/// completion. It is used to call the \[\[Call\]\] internal method of a
/// function object. F is the function object, V is an ECMAScript language
/// value that is the this value of the \[\[Call\]\], and argumentsList is the
/// value passed to the corresponding argument of the internal method. If
/// argumentsList is not present, a new empty List is used as its value.
pub fn call(
    agent: &mut Agent,
    f: Value,
    v: Value,
    arguments_list: Option<&[Value]>,
) -> JsResult<Value> {
    // 1. If argumentsList is not present, set argumentsList to a new empty List.
    // 2. If IsCallable(F) is false, throw a TypeError exception.
    if !is_callable(f) {
        return Err(agent.throw_exception(ExceptionType::TypeError, "Not a callable object"));
    }
    let Value::BuiltinFunction(f) = f else {
        unreachable!("Only builtin functions are callable");
    };
    // 3. Return ? F.[[Call]](V, argumentsList).
    call_function(agent, f, v, arguments_list)
}

/// Abstract operation Call specialized for a function.
pub fn call_function(
    agent: &mut Agent,
    f: BuiltinFunction,
    v: Value,
    arguments_list: Option<&[Value]>,
) -> JsResult<Value> {
    let arguments_list = ArgumentsList::new(arguments_list.unwrap_or(&[]));
    f.internal_call(agent, v, arguments_list)
}
