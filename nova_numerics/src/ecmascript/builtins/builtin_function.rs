// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt::Debug;
use std::{
    ops::{Deref, Index, IndexMut},
    rc::Rc,
};

use crate::{
    ecmascript::{
        execution::{Agent, ExecutionContext, JsResult, RealmIdentifier},
        types::{
            InternalMethods, InternalSlots, IntoObject, IntoValue, Object, ObjectHeapData,
            OrdinaryObject, PropertyAttributes, PropertyKey, PropertySlot, PropertyStorage,
            String, Value,
        },
    },
    heap::{CreateHeapData, WellKnownSymbolIndexes, indexes::BuiltinFunctionIndex},
};

/// The arguments of a builtin call. Reading past the end yields `undefined`.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentsList<'a>(pub(crate) &'a [Value]);

impl<'a> ArgumentsList<'a> {
    pub fn new(arguments: &'a [Value]) -> Self {
        Self(arguments)
    }
}

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ArgumentsList<'_> {
    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;

/// A host closure callable from script.
pub type ClosureFn = dyn for<'a> Fn(&mut Agent, Value, ArgumentsList<'a>) -> JsResult<Value>;

#[derive(Clone)]
pub enum Behaviour {
    Regular(RegularFn),
    Closure(Rc<ClosureFn>),
}

impl Behaviour {
    /// Wraps a host closure into a behaviour.
    pub fn closure(
        closure: impl for<'a> Fn(&mut Agent, Value, ArgumentsList<'a>) -> JsResult<Value> + 'static,
    ) -> Self {
        Behaviour::Closure(Rc::new(closure))
    }

    fn invoke(
        &self,
        agent: &mut Agent,
        this_argument: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        match self {
            Behaviour::Regular(func) => func(agent, this_argument, arguments_list),
            Behaviour::Closure(func) => func(agent, this_argument, arguments_list),
        }
    }
}

impl Debug for Behaviour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Behaviour::Regular(func) => f
                .debug_tuple("Regular")
                .field(&(*func as *const ()))
                .finish(),
            Behaviour::Closure(func) => f
                .debug_tuple("Closure")
                .field(&Rc::as_ptr(func).cast::<()>())
                .finish(),
        }
    }
}

impl PartialEq for Behaviour {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Behaviour::Regular(a), Behaviour::Regular(b)) => std::ptr::fn_addr_eq(*a, *b),
            (Behaviour::Closure(a), Behaviour::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

pub trait Builtin {
    const NAME: &'static str;
    /// Arity hint exposed as the function's `length`. Never enforced.
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;

    /// Set to Some if this builtin's property key is a well-known symbol
    /// instead of `NAME`.
    const KEY: Option<WellKnownSymbolIndexes> = None;

    /// If the builtin function is created as a property then this controls the
    /// property's `[[Writable]]` value.
    const WRITABLE: bool = true;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Enumerable]]` value.
    const ENUMERABLE: bool = false;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Configurable]]` value.
    const CONFIGURABLE: bool = true;

    /// The property attributes the builtin is registered with.
    const ATTRIBUTES: PropertyAttributes =
        PropertyAttributes::new(Self::WRITABLE, Self::ENUMERABLE, Self::CONFIGURABLE);
}

#[derive(Debug, Default)]
pub struct BuiltinFunctionArgs {
    pub length: u32,
    pub name: &'static str,
    pub realm: Option<RealmIdentifier>,
    pub prototype: Option<Object>,
}

impl BuiltinFunctionArgs {
    pub fn new(length: u32, name: &'static str, realm: RealmIdentifier) -> Self {
        Self {
            length,
            name,
            realm: Some(realm),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuiltinFunction(pub(crate) BuiltinFunctionIndex);

#[derive(Debug)]
pub struct BuiltinFunctionHeapData {
    /// The object holding the function's own properties.
    pub(crate) object_index: OrdinaryObject,
    pub(crate) length: u8,
    /// #### \[\[Realm]]
    pub(crate) realm: RealmIdentifier,
    /// #### \[\[InitialName]]
    pub(crate) initial_name: Option<String>,
    pub(crate) behaviour: Behaviour,
}

impl BuiltinFunction {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn length(self, agent: &Agent) -> u8 {
        agent[self].length
    }

    pub fn initial_name(self, agent: &Agent) -> Option<String> {
        agent[self].initial_name
    }

    /// ### [10.3.1 \[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
    pub fn internal_call(
        self,
        agent: &mut Agent,
        this_argument: Value,
        arguments_list: ArgumentsList,
    ) -> JsResult<Value> {
        // 1. Return ? BuiltinCallOrConstruct(F, thisArgument, argumentsList, undefined).
        builtin_call(agent, self, this_argument, arguments_list)
    }
}

impl InternalSlots for BuiltinFunction {
    fn get_backing_object(self, agent: &Agent) -> OrdinaryObject {
        agent[self].object_index
    }
}

impl InternalMethods for BuiltinFunction {}

impl IntoObject for BuiltinFunction {
    fn into_object(self) -> Object {
        Object::BuiltinFunction(self)
    }
}

impl IntoValue for BuiltinFunction {
    fn into_value(self) -> Value {
        Value::BuiltinFunction(self)
    }
}

impl TryFrom<Value> for BuiltinFunction {
    type Error = ();

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::BuiltinFunction(data) = value {
            Ok(data)
        } else {
            Err(())
        }
    }
}

impl Index<BuiltinFunction> for Agent {
    type Output = BuiltinFunctionHeapData;

    fn index(&self, index: BuiltinFunction) -> &Self::Output {
        self.heap
            .builtin_functions
            .get(index.get_index())
            .expect("BuiltinFunction out of bounds")
            .as_ref()
            .expect("BuiltinFunction slot empty")
    }
}

impl IndexMut<BuiltinFunction> for Agent {
    fn index_mut(&mut self, index: BuiltinFunction) -> &mut Self::Output {
        self.heap
            .builtin_functions
            .get_mut(index.get_index())
            .expect("BuiltinFunction out of bounds")
            .as_mut()
            .expect("BuiltinFunction slot empty")
    }
}

/// ### [10.3.3 BuiltinCallOrConstruct ( F, thisArgument, argumentsList, newTarget )](https://tc39.es/ecma262/#sec-builtincallorconstruct)
///
/// Only the call half: none of the builtins here are constructors.
fn builtin_call(
    agent: &mut Agent,
    f: BuiltinFunction,
    this_argument: Value,
    arguments_list: ArgumentsList,
) -> JsResult<Value> {
    let heap_data = &agent[f];
    // 5. Let calleeRealm be F.[[Realm]].
    let callee_realm = heap_data.realm;
    let behaviour = heap_data.behaviour.clone();
    // 3. Let calleeContext be a new execution context.
    let callee_context = ExecutionContext {
        // 4. Set the Function of calleeContext to F.
        function: Some(f),
        // 6. Set the Realm of calleeContext to calleeRealm.
        realm: callee_realm,
    };
    // 9. Push calleeContext onto the execution context stack; calleeContext is now the running execution context.
    agent.execution_context_stack.push(callee_context);
    if agent.options.print_internals {
        let name = agent
            .active_function()
            .and_then(|function| agent[function].initial_name)
            .map_or("<anonymous>", |name| name.as_str(agent));
        eprintln!(
            "Calling builtin {name} with {} argument(s)",
            arguments_list.len()
        );
    }
    // 10. Let result be the Completion Record that is the result of evaluating F in a manner that conforms to
    // the specification of F. thisArgument provides the this value. argumentsList provides the named parameters.
    let result = behaviour.invoke(agent, this_argument, arguments_list);
    // 12. Remove calleeContext from the execution context stack and restore callerContext as the running
    // execution context.
    agent.execution_context_stack.pop();
    // 13. Return ? result.
    result
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, additionalInternalSlotsList \[ , realm \[ , prototype \[ , prefix \] \] \] )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
///
/// The abstract operation CreateBuiltinFunction takes arguments behaviour (an
/// Abstract Closure, a set of algorithm steps, or some other definition of a
/// function's behaviour provided in this specification), length (a
/// non-negative integer or +∞), name (a property key or a Private Name), and
/// optional arguments realm (a Realm Record) and prototype (an Object or
/// null) and returns a function object.
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> BuiltinFunction {
    // 1. If realm is not present, set realm to the current Realm Record.
    let realm = args.realm.unwrap_or_else(|| agent.current_realm_id());

    // 2. If prototype is not present, set prototype to realm.[[Intrinsics]].[[%Function.prototype%]].
    let prototype = args
        .prototype
        .unwrap_or_else(|| agent[realm].intrinsics().function_prototype().into_object());

    // 10. Perform SetFunctionLength(func, length).
    // 12. Perform SetFunctionName(func, name).
    let length_key = PropertyKey::from_str(agent, "length");
    let name_key = PropertyKey::from_str(agent, "name");
    let initial_name = String::from_str(agent, args.name);
    let length = u8::try_from(args.length).unwrap_or(u8::MAX);
    let mut properties = PropertyStorage::with_capacity(2);
    properties.insert(
        length_key,
        PropertySlot::data(Value::from(args.length), PropertyAttributes::CONFIGURABLE),
    );
    properties.insert(
        name_key,
        PropertySlot::data(initial_name.into_value(), PropertyAttributes::CONFIGURABLE),
    );

    // 5. Let func be a new built-in function object that, when called, performs the action
    //    described by behaviour using the provided arguments as the values of the corresponding
    //    parameters specified by behaviour.
    // 6. Set func.[[Prototype]] to prototype.
    // 7. Set func.[[Extensible]] to true.
    let object_index = agent
        .heap
        .create(ObjectHeapData::new(Some(prototype), properties));
    // 8. Set func.[[Realm]] to realm.
    // 9. Set func.[[InitialName]] to null.
    agent.heap.create(BuiltinFunctionHeapData {
        object_index,
        length,
        realm,
        initial_name: Some(initial_name),
        behaviour,
    })
    // 13. Return func.
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{call_function, get},
        execution::{Options, initialize_default_realm},
    };

    fn add_one(agent: &mut Agent, _: Value, arguments: ArgumentsList) -> JsResult<Value> {
        let n = arguments.get(0).to_number(agent)?;
        Ok(Value::from_f64(n.into_f64() + 1.0))
    }

    #[test]
    fn arguments_list_pads_with_undefined() {
        let values = [Value::from(1)];
        let arguments = ArgumentsList::new(&values);
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments.get(0), Value::from(1));
        assert_eq!(arguments.get(1), Value::Undefined);
        assert_eq!(arguments.get(usize::MAX), Value::Undefined);
    }

    #[test]
    fn builtin_function_has_length_and_name() {
        let mut agent = Agent::new(Options::default());
        let realm = initialize_default_realm(&mut agent);
        let f = create_builtin_function(
            &mut agent,
            Behaviour::Regular(add_one),
            BuiltinFunctionArgs::new(1, "addOne", realm),
        );
        let length = PropertyKey::from_str(&mut agent, "length");
        let name = PropertyKey::from_str(&mut agent, "name");
        assert_eq!(get(&mut agent, f, length).unwrap(), Value::from(1));
        let name = get(&mut agent, f, name).unwrap();
        assert_eq!(name, Value::from_str(&mut agent, "addOne"));
        assert_eq!(
            f.internal_prototype(&agent),
            Some(agent[realm].intrinsics().function_prototype().into_object())
        );
    }

    #[test]
    fn call_pops_execution_context_on_error() {
        let mut agent = Agent::new(Options::default());
        let realm = initialize_default_realm(&mut agent);
        let f = create_builtin_function(
            &mut agent,
            Behaviour::Regular(add_one),
            BuiltinFunctionArgs::new(1, "addOne", realm),
        );
        let depth = agent.execution_context_stack.len();
        let symbol = crate::ecmascript::types::Symbol::new(&mut agent, None);
        let result = call_function(&mut agent, f, Value::Undefined, Some(&[symbol.into_value()]));
        assert!(result.is_err());
        assert_eq!(agent.execution_context_stack.len(), depth);

        let result = call_function(&mut agent, f, Value::Undefined, Some(&[Value::from(2)]));
        assert_eq!(result.unwrap(), Value::from(3));
        assert_eq!(agent.execution_context_stack.len(), depth);
    }

    #[test]
    fn active_function_tracks_the_running_builtin() {
        let mut agent = Agent::new(Options::default());
        let realm = initialize_default_realm(&mut agent);
        assert_eq!(agent.active_function(), None);
        let seen = Rc::new(Cell::new(None));
        let record = seen.clone();
        let f = create_builtin_function(
            &mut agent,
            Behaviour::closure(move |agent, _, _| {
                record.set(agent.active_function());
                Ok(Value::Undefined)
            }),
            BuiltinFunctionArgs::new(0, "whoAmI", realm),
        );
        call_function(&mut agent, f, Value::Undefined, None).unwrap();
        assert_eq!(seen.get(), Some(f));
        assert_eq!(agent.active_function(), None);
    }

    #[test]
    fn closure_behaviour_captures_host_state() {
        let mut agent = Agent::new(Options::default());
        let realm = initialize_default_realm(&mut agent);
        let offset = 10.0;
        let f = create_builtin_function(
            &mut agent,
            Behaviour::closure(move |agent, _, arguments| {
                let n = arguments.get(0).to_number(agent)?;
                Ok(Value::from_f64(n.into_f64() + offset))
            }),
            BuiltinFunctionArgs::new(1, "addOffset", realm),
        );
        let result = call_function(&mut agent, f, Value::Undefined, Some(&[Value::from(5)]));
        assert_eq!(result.unwrap(), Value::from(15));
    }
}
