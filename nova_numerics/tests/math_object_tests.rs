// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![cfg(feature = "math")]

use std::{cell::RefCell, rc::Rc};

use nova_numerics::ecmascript::{
    abstract_operations::operations_on_objects::{call_function, create_data_property_or_throw, get},
    builtins::{Behaviour, BuiltinFunction, BuiltinFunctionArgs, create_builtin_function},
    execution::{
        Agent, ExceptionType, Options, RandomSource, RealmIdentifier, SeededRandomSource,
        initialize_default_realm,
    },
    types::{InternalMethods, Number, Object, OrdinaryObject, PropertyKey, String, Value},
};

fn math_object(agent: &mut Agent, realm: RealmIdentifier) -> Object {
    let global = agent[realm].global_object();
    let key = PropertyKey::from_str(agent, "Math");
    Object::try_from(get(agent, global, key).unwrap()).unwrap()
}

fn math_function(agent: &mut Agent, realm: RealmIdentifier, name: &str) -> BuiltinFunction {
    let math = math_object(agent, realm);
    let key = PropertyKey::from_str(agent, name);
    BuiltinFunction::try_from(get(agent, math, key).unwrap()).unwrap()
}

fn call_math(agent: &mut Agent, realm: RealmIdentifier, name: &str, arguments: &[Value]) -> Value {
    let f = math_function(agent, realm, name);
    call_function(agent, f, Value::Undefined, Some(arguments)).unwrap()
}

/// An object whose `valueOf` appends `label` to `log` and returns `result`,
/// or throws a TypeError when `result` is `None`.
fn logging_object(
    agent: &mut Agent,
    realm: RealmIdentifier,
    log: &Rc<RefCell<Vec<&'static str>>>,
    label: &'static str,
    result: Option<f64>,
) -> Value {
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let object = OrdinaryObject::create_empty(agent, Some(object_prototype.into()));
    let log = log.clone();
    let value_of = create_builtin_function(
        agent,
        Behaviour::closure(move |agent, _, _| {
            log.borrow_mut().push(label);
            match result {
                Some(result) => Ok(Value::from(result)),
                None => Err(agent.throw_exception(ExceptionType::TypeError, label)),
            }
        }),
        BuiltinFunctionArgs::new(0, "valueOf", realm),
    );
    let key = PropertyKey::from_str(agent, "valueOf");
    create_data_property_or_throw(agent, object, key, value_of.into()).unwrap();
    object.into()
}

#[test]
fn math_is_reachable_from_the_global_object() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let math = math_object(&mut agent, realm);
    assert_eq!(
        math,
        Object::from(agent[realm].intrinsics().math())
    );

    let global = agent[realm].global_object();
    let key = PropertyKey::from_str(&mut agent, "Math");
    let descriptor = global
        .internal_get_own_property(&mut agent, key)
        .unwrap()
        .unwrap();
    assert_eq!(descriptor.writable, Some(true));
    assert_eq!(descriptor.enumerable, Some(false));
    assert_eq!(descriptor.configurable, Some(true));
}

#[test]
fn value_properties_are_frozen() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let math = math_object(&mut agent, realm);
    for (name, expected) in [
        ("E", std::f64::consts::E),
        ("LN10", std::f64::consts::LN_10),
        ("LN2", std::f64::consts::LN_2),
        ("LOG10E", std::f64::consts::LOG10_E),
        ("LOG2E", std::f64::consts::LOG2_E),
        ("PI", std::f64::consts::PI),
        ("SQRT1_2", std::f64::consts::FRAC_1_SQRT_2),
        ("SQRT2", std::f64::consts::SQRT_2),
    ] {
        let key = PropertyKey::from_str(&mut agent, name);
        let descriptor = math
            .internal_get_own_property(&mut agent, key)
            .unwrap()
            .unwrap();
        assert_eq!(descriptor.value, Some(Value::from(expected)), "{name}");
        assert_eq!(descriptor.writable, Some(false), "{name}");
        assert_eq!(descriptor.enumerable, Some(false), "{name}");
        assert_eq!(descriptor.configurable, Some(false), "{name}");
    }
}

#[test]
fn function_properties_have_names_and_lengths() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    for (name, length) in [
        ("abs", 1),
        ("atan2", 2),
        ("hypot", 2),
        ("imul", 2),
        ("max", 2),
        ("min", 2),
        ("pow", 2),
        ("random", 0),
        ("trunc", 1),
    ] {
        let f = math_function(&mut agent, realm, name);
        assert_eq!(f.length(&agent), length, "{name}");
        let initial_name = f.initial_name(&agent).unwrap();
        assert_eq!(initial_name.as_str(&agent), name);
    }
}

#[test]
fn object_prototype_to_string_reports_math_tag() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let math = math_object(&mut agent, realm);
    let object_prototype = agent[realm].intrinsics().object_prototype();
    let key = PropertyKey::from_str(&mut agent, "toString");
    let to_string = get(&mut agent, object_prototype, key).unwrap();
    let to_string = BuiltinFunction::try_from(to_string).unwrap();
    let result = call_function(&mut agent, to_string, math.into(), None).unwrap();
    let result = String::try_from(result).unwrap();
    assert_eq!(result.as_str(&agent), "[object Math]");
}

#[test]
fn arguments_are_coerced() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let text = Value::from_str(&mut agent, "  0x10 ");
    assert_eq!(call_math(&mut agent, realm, "sqrt", &[text]), Value::from(4));
    let text = Value::from_str(&mut agent, "-2.5");
    assert_eq!(call_math(&mut agent, realm, "round", &[text]), Value::from(-2));
    assert_eq!(
        call_math(&mut agent, realm, "abs", &[Value::Null]),
        Value::pos_zero()
    );
    assert!(
        Number::try_from(call_math(&mut agent, realm, "abs", &[]))
            .unwrap()
            .is_nan()
    );
    assert_eq!(
        call_math(&mut agent, realm, "max", &[Value::from(true), Value::from(false)]),
        Value::from(1)
    );
}

#[test]
fn max_coerces_left_to_right_and_stops_on_throw() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let log = Rc::new(RefCell::new(Vec::new()));
    let a = logging_object(&mut agent, realm, &log, "a", Some(1.0));
    let b = logging_object(&mut agent, realm, &log, "b", None);
    let c = logging_object(&mut agent, realm, &log, "c", Some(3.0));
    let max = math_function(&mut agent, realm, "max");
    let error = call_function(&mut agent, max, Value::Undefined, Some(&[a, b, c])).unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
    assert_eq!(error.message(&agent), Some("b"));
    assert_eq!(*log.borrow(), ["a", "b"]);
}

#[test]
fn min_coerces_every_argument_before_reporting_nan() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let log = Rc::new(RefCell::new(Vec::new()));
    let a = logging_object(&mut agent, realm, &log, "a", Some(1.0));
    let result = call_math(&mut agent, realm, "min", &[Value::nan(), a]);
    assert!(Number::try_from(result).unwrap().is_nan());
    assert_eq!(*log.borrow(), ["a"]);
}

#[test]
fn hypot_coerces_every_argument_before_reporting_infinity() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let log = Rc::new(RefCell::new(Vec::new()));
    let a = logging_object(&mut agent, realm, &log, "a", Some(1.0));
    let result = call_math(&mut agent, realm, "hypot", &[Value::pos_inf(), a]);
    assert_eq!(result, Value::pos_inf());
    assert_eq!(*log.borrow(), ["a"]);
}

#[test]
fn symbols_cannot_be_converted() {
    let mut agent = Agent::new(Options::default());
    let realm = initialize_default_realm(&mut agent);
    let symbol = nova_numerics::ecmascript::types::Symbol::new(&mut agent, Some("x"));
    let floor = math_function(&mut agent, realm, "floor");
    let error = call_function(&mut agent, floor, Value::Undefined, Some(&[symbol.into()]))
        .unwrap_err();
    assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
}

#[derive(Debug)]
struct MaxSource;

impl RandomSource for MaxSource {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }
}

#[test]
fn random_is_below_one_for_the_largest_draw() {
    let mut agent = Agent::with_random_source(Options::default(), Box::new(MaxSource));
    let realm = initialize_default_realm(&mut agent);
    let result = call_math(&mut agent, realm, "random", &[]);
    let result = Number::try_from(result).unwrap().into_f64();
    assert!(result < 1.0);
    assert!(result > 0.99);
}

#[test]
fn seeded_random_is_reproducible() {
    let draw = |seed: u64| {
        let mut agent =
            Agent::with_random_source(Options::default(), Box::new(SeededRandomSource::new(seed)));
        let realm = initialize_default_realm(&mut agent);
        (0..8)
            .map(|_| {
                let value = call_math(&mut agent, realm, "random", &[Value::from(1)]);
                Number::try_from(value).unwrap().into_f64()
            })
            .collect::<Vec<_>>()
    };
    let first = draw(42);
    assert_eq!(first, draw(42));
    assert!(first.iter().all(|value| (0.0..1.0).contains(value)));
}
