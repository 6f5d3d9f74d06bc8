// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IntoValue, Number, Object, OrdinaryObject, String, Symbol};
use crate::ecmascript::{
    abstract_operations::type_conversion::{to_int32, to_number, to_uint32},
    builtins::{BuiltinFunction, error::Error},
    execution::{Agent, JsResult},
};

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
///
/// Equality on `Value` compares heap handles by identity and Numbers by
/// SameValue, which makes `==` on two values the SameValue algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// ### [6.1.1 The Undefined Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-undefined-type)
    #[default]
    Undefined,

    /// ### [6.1.2 The Null Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-null-type)
    Null,

    /// ### [6.1.3 The Boolean Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-boolean-type)
    Boolean(bool),

    String(String),
    Symbol(Symbol),
    Number(Number),

    // Object variants
    Object(OrdinaryObject),
    BuiltinFunction(BuiltinFunction),
    Error(Error),
}

impl Value {
    pub const fn nan() -> Self {
        Self::Number(Number::nan())
    }

    pub const fn pos_zero() -> Self {
        Self::Number(Number::pos_zero())
    }

    pub const fn neg_zero() -> Self {
        Self::Number(Number::neg_zero())
    }

    pub const fn pos_inf() -> Self {
        Self::Number(Number::pos_inf())
    }

    pub const fn neg_inf() -> Self {
        Self::Number(Number::neg_inf())
    }

    pub const fn from_f64(value: f64) -> Self {
        Self::Number(Number::from_f64(value))
    }

    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        Self::String(String::from_str(agent, str))
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_object(self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::BuiltinFunction(_) | Value::Error(_)
        )
    }

    pub fn is_number(self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_symbol(self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn to_number(self, agent: &mut Agent) -> JsResult<Number> {
        to_number(agent, self)
    }

    pub fn to_uint32(self, agent: &mut Agent) -> JsResult<u32> {
        to_uint32(agent, self)
    }

    pub fn to_int32(self, agent: &mut Agent) -> JsResult<i32> {
        to_int32(agent, self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(value)
    }
}

impl From<BuiltinFunction> for Value {
    fn from(value: BuiltinFunction) -> Self {
        Value::BuiltinFunction(value)
    }
}

impl From<Error> for Value {
    fn from(value: Error) -> Self {
        Value::Error(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        value.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_equality_is_same_value_for_numbers() {
        assert_eq!(Value::nan(), Value::nan());
        assert_ne!(Value::pos_zero(), Value::neg_zero());
        assert_eq!(Value::from(1), Value::from_f64(1.0));
        assert_ne!(Value::Undefined, Value::Null);
    }

    #[test]
    fn default_value_is_undefined() {
        assert!(Value::default().is_undefined());
    }
}
