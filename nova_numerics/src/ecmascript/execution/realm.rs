// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod intrinsics;

pub use intrinsics::Intrinsics;

use super::{Agent, ExecutionContext, JsResult};
use crate::ecmascript::{
    abstract_operations::operations_on_objects::define_property_or_throw,
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    types::{IntoValue, Number, Object, PropertyDescriptor, PropertyKey, Value},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RealmIdentifier(u32);

impl RealmIdentifier {
    pub(crate) const fn from_index(value: usize) -> Self {
        Self(value as u32)
    }

    pub(crate) const fn into_index(self) -> usize {
        self.0 as usize
    }

    fn last(realms: &[Option<Realm>]) -> Self {
        assert!(!realms.is_empty());
        Self::from_index(realms.len() - 1)
    }
}

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
///
/// Before it is evaluated, all ECMAScript code must be associated with a
/// realm. Conceptually, a realm consists of a set of intrinsic objects, an
/// ECMAScript global environment and all of the ECMAScript code that is
/// loaded within the scope of that global environment.
#[derive(Debug)]
pub struct Realm {
    /// ### \[\[Intrinsics]]
    ///
    /// The intrinsic values used by code associated with this realm.
    pub(crate) intrinsics: Intrinsics,

    /// ### \[\[GlobalObject]]
    ///
    /// The global object for this realm.
    pub(crate) global_object: Object,
}

impl Realm {
    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    pub fn global_object(&self) -> Object {
        self.global_object
    }
}

/// ### [9.3.1 CreateRealm ( )](https://tc39.es/ecma262/#sec-createrealm)
///
/// The abstract operation CreateRealm takes no arguments and returns a Realm
/// Record.
pub fn create_realm(agent: &mut Agent) -> RealmIdentifier {
    // 1. Let realmRec be a new Realm Record.
    // 2. Perform CreateIntrinsics(realmRec).
    // NOTE: The intrinsic object slots are reserved up front so that their
    // handles can be referenced before the objects themselves are built.
    let intrinsics = Intrinsics::new(agent);
    // 4. Set realmRec.[[GlobalObject]] to undefined.
    // NOTE: The global object slot is reserved here and populated by
    // SetRealmGlobalObject.
    let global_object = agent.heap.reserve_object();
    agent.realms.push(Some(Realm {
        intrinsics,
        global_object: global_object.into(),
    }));
    let realm = RealmIdentifier::last(&agent.realms);
    Intrinsics::create_intrinsics(agent, realm);
    // 7. Return realmRec.
    realm
}

/// ### [9.3.3 SetRealmGlobalObject ( realmRec, globalObj, thisValue )](https://tc39.es/ecma262/#sec-setrealmglobalobject)
fn set_realm_global_object(agent: &mut Agent, realm: RealmIdentifier) {
    let Object::Object(global_object) = agent[realm].global_object else {
        unreachable!("Global object is always an ordinary object");
    };
    // 1. If globalObj is undefined, then
    // a. Let intrinsics be realmRec.[[Intrinsics]].
    // b. Set globalObj to OrdinaryObjectCreate(intrinsics.[[%Object.prototype%]]).
    let object_prototype = agent[realm].intrinsics().object_prototype();
    OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, global_object)
        .with_prototype(object_prototype)
        .build();
}

/// ### [9.3.4 SetDefaultGlobalBindings ( realmRec )](https://tc39.es/ecma262/#sec-setdefaultglobalbindings)
///
/// The abstract operation SetDefaultGlobalBindings takes argument realmRec
/// (a Realm Record) and returns either a normal completion containing an
/// Object or a throw completion.
fn set_default_global_bindings(agent: &mut Agent, realm: RealmIdentifier) -> JsResult<Object> {
    // 1. Let global be realmRec.[[GlobalObject]].
    let global = agent[realm].global_object;

    // 2. For each property of the Global Object specified in clause 19, do
    macro_rules! define_property {
        ($name:literal, $value:expr, $writable:expr, $enumerable:expr, $configurable:expr) => {
            // a. Let name be the String value of the property name.
            let name = PropertyKey::from_str(agent, $name);
            let value = $value;

            // b. Let desc be the fully populated data Property Descriptor for
            //    the property, containing the specified attributes for the
            //    property.
            let desc = PropertyDescriptor {
                value: Some(value),
                writable: Some($writable),
                enumerable: Some($enumerable),
                configurable: Some($configurable),
                ..Default::default()
            };

            // c. Perform ? DefinePropertyOrThrow(global, name, desc).
            define_property_or_throw(agent, global, name, desc)?;
        };
    }

    // 19.1 Value Properties of the Global Object
    // 19.1.1 globalThis
    define_property!("globalThis", global.into_value(), true, false, true);
    // 19.1.2 Infinity
    define_property!("Infinity", Number::pos_inf().into_value(), false, false, false);
    // 19.1.3 NaN
    define_property!("NaN", Number::nan().into_value(), false, false, false);
    // 19.1.4 undefined
    define_property!("undefined", Value::Undefined, false, false, false);

    // 19.4 Other Properties of the Global Object
    #[cfg(feature = "math")]
    {
        // 19.4.3 Math
        let math = agent[realm].intrinsics().math().into_value();
        define_property!("Math", math, true, false, true);
    }

    // 3. Return global.
    Ok(global)
}

/// ### [9.6 InitializeHostDefinedRealm ( )](https://tc39.es/ecma262/#sec-initializehostdefinedrealm)
///
/// Creates a realm with an ordinary global object and makes it the running
/// execution context's realm.
pub fn initialize_default_realm(agent: &mut Agent) -> RealmIdentifier {
    // 1. Let realm be CreateRealm().
    let realm = create_realm(agent);

    // 2. Let newContext be a new execution context.
    let new_context = ExecutionContext {
        // 3. Set the Function of newContext to null.
        function: None,
        // 4. Set the Realm of newContext to realm.
        realm,
    };

    // 6. Push newContext onto the execution context stack; newContext is now the running execution context.
    agent.execution_context_stack.push(new_context);

    // 9. Perform SetRealmGlobalObject(realm, global, thisValue).
    set_realm_global_object(agent, realm);

    // 10. Let globalObj be ? SetDefaultGlobalBindings(realm).
    set_default_global_bindings(agent, realm)
        .expect("Defining global bindings on a fresh global object cannot fail");

    // 12. Return UNUSED.
    realm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::get, execution::Options,
    };

    #[test]
    fn default_realm_has_global_bindings() {
        let mut agent = Agent::new(Options::default());
        let realm = initialize_default_realm(&mut agent);
        assert_eq!(agent.current_realm_id(), realm);
        let global = agent[realm].global_object();

        let key = PropertyKey::from_str(&mut agent, "globalThis");
        assert_eq!(get(&mut agent, global, key).unwrap(), global.into_value());

        let key = PropertyKey::from_str(&mut agent, "NaN");
        assert_eq!(get(&mut agent, global, key).unwrap(), Value::nan());

        let key = PropertyKey::from_str(&mut agent, "Infinity");
        assert_eq!(get(&mut agent, global, key).unwrap(), Value::pos_inf());
    }

    #[cfg(feature = "math")]
    #[test]
    fn default_realm_exposes_math() {
        let mut agent = Agent::new(Options::default());
        let realm = initialize_default_realm(&mut agent);
        let global = agent[realm].global_object();
        let key = PropertyKey::from_str(&mut agent, "Math");
        let math = get(&mut agent, global, key).unwrap();
        assert_eq!(math, agent[realm].intrinsics().math().into_value());
    }
}
