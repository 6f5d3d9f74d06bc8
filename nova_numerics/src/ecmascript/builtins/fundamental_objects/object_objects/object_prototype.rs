// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::operations_on_objects::get,
        builders::ordinary_object_builder::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin},
        execution::{Agent, ExceptionType, JsResult, RealmIdentifier},
        types::{Object, String, Value},
    },
    heap::WellKnownSymbolIndexes,
};

pub(crate) struct ObjectPrototype;

struct ObjectPrototypeToString;
impl Builtin for ObjectPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::to_string);
}

struct ObjectPrototypeValueOf;
impl Builtin for ObjectPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::value_of);
}

impl ObjectPrototype {
    /// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 3. Let O be ! ToObject(this value).
        let (builtin_tag, o) = match this_value {
            // 1. If the this value is undefined, return "[object Undefined]".
            Value::Undefined => return Ok(Value::from_str(agent, "[object Undefined]")),
            // 2. If the this value is null, return "[object Null]".
            Value::Null => return Ok(Value::from_str(agent, "[object Null]")),
            // Primitive wrapper objects do not exist in this engine core, so
            // primitives report the tag of their wrapper directly.
            // 9. Else if O has a [[BooleanData]] internal slot, let builtinTag be "Boolean".
            Value::Boolean(_) => return Ok(Value::from_str(agent, "[object Boolean]")),
            // 10. Else if O has a [[NumberData]] internal slot, let builtinTag be "Number".
            Value::Number(_) => return Ok(Value::from_str(agent, "[object Number]")),
            // 11. Else if O has a [[StringData]] internal slot, let builtinTag be "String".
            Value::String(_) => return Ok(Value::from_str(agent, "[object String]")),
            Value::Symbol(_) => return Ok(Value::from_str(agent, "[object Symbol]")),
            // 7. Else if O has a [[Call]] internal method, let builtinTag be "Function".
            Value::BuiltinFunction(f) => ("Function", Object::from(f)),
            // 8. Else if O has an [[ErrorData]] internal slot, let builtinTag be "Error".
            Value::Error(e) => ("Error", Object::from(e)),
            // 14. Else, let builtinTag be "Object".
            Value::Object(o) => ("Object", Object::from(o)),
        };
        // 15. Let tag be ? Get(O, @@toStringTag).
        let tag = get(agent, o, WellKnownSymbolIndexes::ToStringTag.into())?;
        let tag = match String::try_from(tag) {
            Ok(tag) => tag.as_str(agent).to_owned(),
            // 16. If tag is not a String, set tag to builtinTag.
            Err(_) => builtin_tag.to_owned(),
        };
        // 17. Return the string-concatenation of "[object ", tag, and "]".
        Ok(Value::from_str(agent, &format!("[object {tag}]")))
    }

    /// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
    fn value_of(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ToObject(this value).
        match this_value {
            Value::Undefined | Value::Null => Err(agent.throw_exception(
                ExceptionType::TypeError,
                "Cannot convert undefined or null to object",
            )),
            // The primitive stands in for its wrapper object.
            _ => Ok(this_value),
        }
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: RealmIdentifier) {
        // The Object prototype object:
        let intrinsics = agent.get_realm(realm).intrinsics();
        // is %Object.prototype%.
        let this = intrinsics.object_prototype();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            // has an [[Extensible]] internal slot whose value is true.
            .with_extensible(true)
            // has a [[Prototype]] internal slot whose value is null.
            .with_property_capacity(2)
            .with_builtin_function_property::<ObjectPrototypeToString>()
            .with_builtin_function_property::<ObjectPrototypeValueOf>()
            .build();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        execution::{Options, initialize_default_realm},
        types::{IntoValue, OrdinaryObject, PropertyKey},
    };

    fn to_string_of(agent: &mut Agent, value: Value) -> std::string::String {
        let result = ObjectPrototype::to_string(agent, value, ArgumentsList(&[])).unwrap();
        String::try_from(result).unwrap().as_str(agent).to_owned()
    }

    #[test]
    fn to_string_uses_builtin_tags() {
        let mut agent = Agent::new(Options::default());
        let realm = initialize_default_realm(&mut agent);
        assert_eq!(to_string_of(&mut agent, Value::Undefined), "[object Undefined]");
        assert_eq!(to_string_of(&mut agent, Value::Null), "[object Null]");
        assert_eq!(to_string_of(&mut agent, Value::from(1)), "[object Number]");
        let object_prototype = agent[realm].intrinsics().object_prototype();
        let object = OrdinaryObject::create_empty(&mut agent, Some(object_prototype.into()));
        assert_eq!(to_string_of(&mut agent, object.into_value()), "[object Object]");
        let error = agent.throw_exception(ExceptionType::TypeError, "boom");
        assert_eq!(to_string_of(&mut agent, error.value()), "[object Error]");
    }

    #[test]
    fn to_string_reads_to_string_tag() {
        let mut agent = Agent::new(Options::default());
        initialize_default_realm(&mut agent);
        let object = OrdinaryObject::create_empty(&mut agent, None);
        let tag = Value::from_str(&mut agent, "Custom");
        crate::ecmascript::abstract_operations::operations_on_objects::create_data_property(
            &mut agent,
            object,
            PropertyKey::from(WellKnownSymbolIndexes::ToStringTag),
            tag,
        )
        .unwrap();
        assert_eq!(to_string_of(&mut agent, object.into_value()), "[object Custom]");
    }

    #[test]
    fn value_of_rejects_undefined() {
        let mut agent = Agent::new(Options::default());
        initialize_default_realm(&mut agent);
        let error = ObjectPrototype::value_of(&mut agent, Value::Undefined, ArgumentsList(&[]))
            .unwrap_err();
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
        let result = ObjectPrototype::value_of(&mut agent, Value::from(2), ArgumentsList(&[]));
        assert_eq!(result.unwrap(), Value::from(2));
    }
}
