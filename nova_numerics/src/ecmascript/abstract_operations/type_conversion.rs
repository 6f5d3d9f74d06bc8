// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. To clarify the semantics of certain constructs it is useful to
//! define a set of conversion abstract operations. The conversion abstract
//! operations are polymorphic; they can accept a value of any ECMAScript
//! language type. But no other specification types are used with these
//! operations.

use super::{
    operations_on_objects::{call, call_function, get, get_method},
    testing_and_comparison::is_callable,
};
use crate::{
    ecmascript::{
        execution::{Agent, ExceptionType, JsResult},
        types::{IntoValue, Number, Object, PropertyKey, String, Value},
    },
    heap::WellKnownSymbolIndexes,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String = 1,
    Number,
}

impl PreferredType {
    const fn hint(self) -> &'static str {
        match self {
            PreferredType::String => "string",
            PreferredType::Number => "number",
        }
    }
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// The abstract operation ToPrimitive takes argument input (an ECMAScript
/// language value) and optional argument preferredType (STRING or NUMBER) and
/// returns either a normal completion containing an ECMAScript language value
/// or a throw completion. It converts its input argument to a non-Object type.
/// If an object is capable of converting to more than one primitive type, it
/// may use the optional hint preferredType to favour that type.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    let Ok(input) = Object::try_from(input) else {
        // 2. Return input.
        return Ok(input);
    };
    // a. Let exoticToPrim be ? GetMethod(input, @@toPrimitive).
    let exotic_to_prim = get_method(
        agent,
        input.into_value(),
        PropertyKey::from(WellKnownSymbolIndexes::ToPrimitive),
    )?;
    // b. If exoticToPrim is not undefined, then
    if let Some(exotic_to_prim) = exotic_to_prim {
        // i. If preferredType is not present, then
        //    1. Let hint be "default".
        // ii. Else if preferredType is STRING, then
        //    1. Let hint be "string".
        // iii. Else,
        //    1. Assert: preferredType is NUMBER.
        //    2. Let hint be "number".
        let hint = preferred_type.map_or("default", PreferredType::hint);
        let hint = String::from_str(agent, hint);
        // iv. Let result be ? Call(exoticToPrim, input, « hint »).
        let result = call_function(
            agent,
            exotic_to_prim,
            input.into_value(),
            Some(&[hint.into_value()]),
        )?;
        // v. If result is not an Object, return result.
        if !result.is_object() {
            return Ok(result);
        }
        // vi. Throw a TypeError exception.
        return Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert object to primitive value",
        ));
    }
    // c. If preferredType is not present, let preferredType be NUMBER.
    // d. Return ? OrdinaryToPrimitive(input, preferredType).
    ordinary_to_primitive(agent, input, preferred_type.unwrap_or(PreferredType::Number))
}

/// #### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// The abstract operation OrdinaryToPrimitive takes arguments O (an Object)
/// and hint (STRING or NUMBER) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion.
pub fn ordinary_to_primitive(
    agent: &mut Agent,
    o: Object,
    hint: PreferredType,
) -> JsResult<Value> {
    let to_string_key = PropertyKey::from_str(agent, "toString");
    let value_of_key = PropertyKey::from_str(agent, "valueOf");
    let method_names = match hint {
        // 1. If hint is STRING, then
        //    a. Let methodNames be « "toString", "valueOf" ».
        PreferredType::String => [to_string_key, value_of_key],
        // 2. Else,
        //    a. Let methodNames be « "valueOf", "toString" ».
        PreferredType::Number => [value_of_key, to_string_key],
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if is_callable(method) {
            // i. Let result be ? Call(method, O).
            let result = call(agent, method, o.into_value(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
///
/// The abstract operation ToNumber takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a Number
/// or a throw completion. It converts argument to a value of type Number.
pub fn to_number(agent: &mut Agent, argument: Value) -> JsResult<Number> {
    match argument {
        // 1. If argument is a Number, return argument.
        Value::Number(n) => Ok(n),
        // 2. If argument is either a Symbol or a BigInt, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a number",
        )),
        // 3. If argument is undefined, return NaN.
        Value::Undefined => Ok(Number::nan()),
        // 4. If argument is either null or false, return +0𝔽.
        Value::Null | Value::Boolean(false) => Ok(Number::pos_zero()),
        // 5. If argument is true, return 1𝔽.
        Value::Boolean(true) => Ok(Number::from(1)),
        // 6. If argument is a String, return StringToNumber(argument).
        Value::String(s) => Ok(string_to_number(s.as_str(agent))),
        // 7. Assert: argument is an Object.
        Value::Object(_) | Value::BuiltinFunction(_) | Value::Error(_) => {
            // 8. Let primValue be ? ToPrimitive(argument, NUMBER).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::Number))?;
            // 9. Assert: primValue is not an Object.
            debug_assert!(!prim_value.is_object());
            // 10. Return ? ToNumber(primValue).
            to_number(agent, prim_value)
        }
    }
}

/// Whitespace and line terminators trimmed by StringToNumber: the Unicode
/// `White_Space` set minus U+0085, plus U+FEFF.
pub(crate) fn is_trimmable_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
///
/// The abstract operation StringToNumber takes argument str (a String) and
/// returns a Number.
pub fn string_to_number(str: &str) -> Number {
    // 1. Let literal be ParseText(str, StringNumericLiteral).
    let literal = str.trim_matches(is_trimmable_whitespace);

    // StringNumericLiteral ::: StrWhiteSpace_opt
    if literal.is_empty() {
        return Number::pos_zero();
    }

    match literal {
        "Infinity" | "+Infinity" => return Number::pos_inf(),
        "-Infinity" => return Number::neg_inf(),
        _ => {}
    }

    // NonDecimalIntegerLiteral has no sign.
    let bytes = literal.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_non_decimal_integer(&literal[2..], radix);
        }
    }

    // 2. If literal is a List of errors, return NaN.
    // NOTE: fast_float also accepts "inf", "nan" and friends; those are not
    // StrDecimalLiterals.
    let is_decimal_literal = literal
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && literal.bytes().any(|b| b.is_ascii_digit());
    if !is_decimal_literal {
        return Number::nan();
    }

    // 3. Return the StringNumericValue of literal.
    match fast_float::parse::<f64, _>(literal) {
        Ok(value) => Number::from_f64(value),
        Err(_) => Number::nan(),
    }
}

/// The MV of a NonDecimalIntegerLiteral's digits. Values past 2^53 are
/// rounded through f64 accumulation.
fn parse_non_decimal_integer(digits: &str, radix: u32) -> Number {
    if digits.is_empty() {
        return Number::nan();
    }
    let mut value = 0f64;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return Number::nan();
        };
        value = value * radix as f64 + digit as f64;
    }
    Number::from_f64(value)
}

/// ### [7.1.6 ToInt32 ( argument )](https://tc39.es/ecma262/#sec-toint32)
///
/// The abstract operation ToInt32 takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing an
/// integral Number or a throw completion. It converts argument to one of 2**32
/// integral Number values in the inclusive interval from 𝔽(-2**31) to
/// 𝔽(2**31 - 1).
pub fn to_int32(agent: &mut Agent, argument: Value) -> JsResult<i32> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    Ok(number_to_int32(number))
}

/// ToInt32 steps 2 to 5 on an already coerced Number.
pub fn number_to_int32(number: Number) -> i32 {
    // 4. Let int32bit be int modulo 2**32.
    // 5. If int32bit ≥ 2**31, return 𝔽(int32bit - 2**32); otherwise return 𝔽(int32bit).
    number_to_uint32(number) as i32
}

/// ### [7.1.7 ToUint32 ( argument )](https://tc39.es/ecma262/#sec-touint32)
///
/// The abstract operation ToUint32 takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing an
/// integral Number or a throw completion. It converts argument to one of 2**32
/// integral Number values in the inclusive interval from +0𝔽 to 𝔽(2**32 - 1).
pub fn to_uint32(agent: &mut Agent, argument: Value) -> JsResult<u32> {
    // 1. Let number be ? ToNumber(argument).
    let number = to_number(agent, argument)?;
    Ok(number_to_uint32(number))
}

/// ToUint32 steps 2 to 5 on an already coerced Number.
pub fn number_to_uint32(number: Number) -> u32 {
    // 2. If number is not finite or number is either +0𝔽 or -0𝔽, return +0𝔽.
    if !number.is_finite() || number.is_pos_zero() || number.is_neg_zero() {
        return 0;
    }
    // 3. Let int be truncate(ℝ(number)).
    let int = number.into_f64().trunc();
    // 4. Let int32bit be int modulo 2**32.
    let int32bit = int.rem_euclid(4294967296.0);
    // 5. Return 𝔽(int32bit).
    int32bit as u32
}
