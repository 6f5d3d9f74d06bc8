// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.2 Testing and Comparison Operations](https://tc39.es/ecma262/#sec-testing-and-comparison-operations)

use crate::ecmascript::types::Value;

/// ### [7.2.3 IsCallable ( argument )](https://tc39.es/ecma262/#sec-iscallable)
///
/// The abstract operation IsCallable takes argument argument (an ECMAScript
/// language value) and returns a Boolean. It determines if argument is a
/// callable function with a \[\[Call\]\] internal method.
pub(crate) fn is_callable(argument: Value) -> bool {
    // 1. If argument is not an Object, return false.
    // 2. If argument has a [[Call]] internal method, return true.
    // 3. Return false.
    matches!(argument, Value::BuiltinFunction(_))
}

/// ### [7.2.10 SameValue ( x, y )](https://tc39.es/ecma262/#sec-samevalue)
///
/// The abstract operation SameValue takes arguments x (an ECMAScript language
/// value) and y (an ECMAScript language value) and returns a Boolean. It
/// determines whether or not the two arguments are the same value.
pub(crate) fn same_value(x: impl Into<Value>, y: impl Into<Value>) -> bool {
    match (x.into(), y.into()) {
        // 2. If x is a Number, then
        //    a. Return Number::sameValue(x, y).
        (Value::Number(x), Value::Number(y)) => x.same_value(y),
        // 3. Return SameValueNonNumber(x, y).
        (x, y) => x == y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        builtins::{Behaviour, BuiltinFunctionArgs, create_builtin_function},
        execution::{Agent, Options, initialize_default_realm},
        types::OrdinaryObject,
    };

    #[test]
    fn only_builtin_functions_are_callable() {
        let mut agent = Agent::new(Options::default());
        let realm = initialize_default_realm(&mut agent);
        let f = create_builtin_function(
            &mut agent,
            Behaviour::Regular(|_, _, _| Ok(Value::Undefined)),
            BuiltinFunctionArgs::new(0, "noop", realm),
        );
        let object = OrdinaryObject::create_empty(&mut agent, None);
        assert!(is_callable(f.into()));
        assert!(!is_callable(object.into()));
        assert!(!is_callable(Value::Undefined));
        assert!(!is_callable(Value::from(1)));
    }

    #[test]
    fn same_value_distinguishes_zeroes() {
        assert!(same_value(Value::nan(), Value::nan()));
        assert!(!same_value(Value::pos_zero(), Value::neg_zero()));
        assert!(same_value(1.5, 1.5));
        assert!(!same_value(Value::Undefined, Value::Null));
    }
}
