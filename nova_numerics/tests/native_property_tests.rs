// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{cell::Cell, rc::Rc};

use nova_numerics::ecmascript::{
    abstract_operations::operations_on_objects::{
        call, delete_property_or_throw, get, has_own_property, set,
    },
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    builtins::{Behaviour, BuiltinFunctionArgs, NativeProperty, create_builtin_function},
    execution::{Agent, ExceptionType, Options, RealmIdentifier, initialize_default_realm},
    types::{InternalMethods, Object, OrdinaryObject, PropertyKey, Value},
};

/// Exposes `counter` to scripts as an object with a `count` accessor and an
/// `increment()` method.
fn bind_counter(agent: &mut Agent, realm: RealmIdentifier, counter: Rc<Cell<i32>>) -> OrdinaryObject {
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let count = PropertyKey::from_str(agent, "count");
    let increment = PropertyKey::from_str(agent, "increment");

    let read = counter.clone();
    let write = counter.clone();
    let native = NativeProperty::new()
        .with_getter(move |_, _| Ok(Value::from(read.get())))
        .with_setter(move |agent, _, value| {
            let n = value.to_number(agent)?.into_f64();
            if !n.is_finite() {
                return Err(agent.throw_exception(ExceptionType::RangeError, "count must be finite"));
            }
            write.set(n as i32);
            Ok(())
        });

    let step = counter;
    let increment_function = create_builtin_function(
        agent,
        Behaviour::closure(move |_, _, _| {
            step.set(step.get() + 1);
            Ok(Value::from(step.get()))
        }),
        BuiltinFunctionArgs::new(0, "increment", realm),
    );

    OrdinaryObjectBuilder::new(agent, realm)
        .with_prototype(object_prototype)
        .with_property_capacity(2)
        .with_native_property(count, native)
        .with_data_property(increment, increment_function.into())
        .build()
}

#[test]
fn host_state_is_visible_through_accessor() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let counter = Rc::new(Cell::new(3));
    let object = bind_counter(&mut agent, realm, counter.clone());
    let count = PropertyKey::from_str(&mut agent, "count");

    assert_eq!(get(&mut agent, object, count).unwrap(), Value::from(3));
    counter.set(10);
    assert_eq!(get(&mut agent, object, count).unwrap(), Value::from(10));

    set(&mut agent, object, count, Value::from(-4), true).unwrap();
    assert_eq!(counter.get(), -4);

    let increment = PropertyKey::from_str(&mut agent, "increment");
    let increment = get(&mut agent, object, increment).unwrap();
    assert_eq!(
        call(&mut agent, increment, object.into(), None).unwrap(),
        Value::from(-3)
    );
    assert_eq!(get(&mut agent, object, count).unwrap(), Value::from(-3));
}

#[test]
fn setter_errors_propagate_to_the_caller() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let counter = Rc::new(Cell::new(0));
    let object = bind_counter(&mut agent, realm, counter.clone());
    let count = PropertyKey::from_str(&mut agent, "count");

    let error = set(&mut agent, object, count, Value::nan(), false).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::RangeError));
    assert_eq!(error.message(&agent), Some("count must be finite"));
    assert_eq!(counter.get(), 0);
}

#[test]
fn getter_only_accessor_ignores_writes() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "version");
    let object = OrdinaryObjectBuilder::new(&mut agent, realm)
        .with_property_capacity(1)
        .with_property(|builder| {
            builder
                .with_key(key)
                .with_native_accessor(NativeProperty::new().with_getter(|_, _| Ok(Value::from(2))))
                .with_enumerable(true)
                .with_configurable(false)
                .build()
        })
        .build();

    set(&mut agent, object, key, Value::from(9), true).unwrap();
    assert_eq!(get(&mut agent, object, key).unwrap(), Value::from(2));

    let descriptor = object
        .internal_get_own_property(&mut agent, key)
        .unwrap()
        .unwrap();
    assert_eq!(descriptor.enumerable, Some(true));
    assert_eq!(descriptor.configurable, Some(false));
    assert!(delete_property_or_throw(&mut agent, object, key).is_err());
}

#[test]
fn accessor_receives_the_object_it_was_read_through() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let key = PropertyKey::from_str(&mut agent, "self");
    let seen = Rc::new(Cell::new(None));
    let record = seen.clone();
    let holder = OrdinaryObjectBuilder::new(&mut agent, realm)
        .with_property_capacity(1)
        .with_native_property(
            key,
            NativeProperty::new()
                .with_getter(|_, owner| Ok(owner.into()))
                .with_setter(move |_, owner, _| {
                    record.set(Some(owner));
                    Ok(())
                }),
        )
        .build();
    let derived = OrdinaryObject::create_empty(&mut agent, Some(holder.into()));

    assert_eq!(get(&mut agent, derived, key).unwrap(), Value::from(derived));
    assert_eq!(get(&mut agent, holder, key).unwrap(), Value::from(holder));

    set(&mut agent, derived, key, Value::Null, true).unwrap();
    assert_eq!(seen.get(), Some(Object::from(derived)));
    assert!(!has_own_property(&mut agent, derived, key).unwrap());
}

#[test]
fn configurable_native_property_can_be_deleted() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let counter = Rc::new(Cell::new(0));
    let object = bind_counter(&mut agent, realm, counter);
    let count = PropertyKey::from_str(&mut agent, "count");

    delete_property_or_throw(&mut agent, object, count).unwrap();
    assert!(!has_own_property(&mut agent, object, count).unwrap());
    assert_eq!(get(&mut agent, object, count).unwrap(), Value::Undefined);
}
