// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)

use std::ops::{Index, IndexMut};

use super::{ExecutionContext, RandomSource, Realm, RealmIdentifier, ThreadRandomSource};
use crate::{
    ecmascript::{
        builtins::{BuiltinFunction, error::ErrorHeapData},
        types::{
            IntoObject, ObjectHeapData, PropertyAttributes, PropertyKey, PropertySlot,
            PropertyStorage, String, Value,
        },
    },
    heap::{CreateHeapData, Heap},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Accepted for embedder compatibility. This engine core never collects.
    pub disable_gc: bool,
    /// Print intrinsic object layouts and builtin calls to stderr.
    pub print_internals: bool,
}

pub type JsResult<T> = std::result::Result<T, JsError>;

/// A thrown ECMAScript value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> Value {
        self.0
    }

    /// The kind of the thrown error, if an error object was thrown.
    pub fn kind(self, agent: &Agent) -> Option<ExceptionType> {
        match self.0 {
            Value::Error(error) => Some(agent[error].kind),
            _ => None,
        }
    }

    /// The message of the thrown error, if an error object with a message
    /// was thrown.
    pub fn message(self, agent: &Agent) -> Option<&str> {
        match self.0 {
            Value::Error(error) => agent[error].message.map(|message| message.as_str(agent)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    AggregateError,
    EvalError,
    RangeError,
    ReferenceError,
    SyntaxError,
    TypeError,
    UriError,
}

impl ExceptionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExceptionType::Error => "Error",
            ExceptionType::AggregateError => "AggregateError",
            ExceptionType::EvalError => "EvalError",
            ExceptionType::RangeError => "RangeError",
            ExceptionType::ReferenceError => "ReferenceError",
            ExceptionType::SyntaxError => "SyntaxError",
            ExceptionType::TypeError => "TypeError",
            ExceptionType::UriError => "URIError",
        }
    }
}

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) options: Options,
    pub(crate) realms: Vec<Option<Realm>>,
    /// ### [execution context stack](https://tc39.es/ecma262/#execution-context-stack)
    pub(crate) execution_context_stack: Vec<ExecutionContext>,
    pub(crate) random_source: Box<dyn RandomSource>,
}

impl Agent {
    pub fn new(options: Options) -> Self {
        Self::with_random_source(options, Box::new(ThreadRandomSource))
    }

    pub fn with_random_source(options: Options, random_source: Box<dyn RandomSource>) -> Self {
        Self {
            heap: Heap::new(),
            options,
            realms: Vec::new(),
            execution_context_stack: Vec::new(),
            random_source,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn current_realm_id(&self) -> RealmIdentifier {
        self.running_execution_context().realm
    }

    pub fn current_realm(&self) -> &Realm {
        self.get_realm(self.current_realm_id())
    }

    pub fn get_realm(&self, id: RealmIdentifier) -> &Realm {
        &self[id]
    }

    pub fn get_realm_mut(&mut self, id: RealmIdentifier) -> &mut Realm {
        &mut self[id]
    }

    /// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
    pub fn throw_exception(&mut self, kind: ExceptionType, message: &str) -> JsError {
        let prototype = self
            .execution_context_stack
            .last()
            .map(|context| self[context.realm].intrinsics().object_prototype().into_object());
        let name = String::from_str(self, kind.as_str());
        let message = String::from_str(self, message);
        let name_key = PropertyKey::from_str(self, "name");
        let message_key = PropertyKey::from_str(self, "message");
        let attributes = PropertyAttributes::WRITABLE | PropertyAttributes::CONFIGURABLE;
        let mut properties = PropertyStorage::with_capacity(2);
        properties.insert(name_key, PropertySlot::data(name.into(), attributes));
        properties.insert(message_key, PropertySlot::data(message.into(), attributes));
        let object_index = self
            .heap
            .create(ObjectHeapData::new(prototype, properties));
        let error = self.heap.create(ErrorHeapData {
            kind,
            message: Some(message),
            object_index,
        });
        JsError(Value::Error(error))
    }

    /// ### [active function object](https://tc39.es/ecma262/#active-function-object)
    ///
    /// The Function of the running execution context, or `None` outside of
    /// any builtin call.
    pub fn active_function(&self) -> Option<BuiltinFunction> {
        self.execution_context_stack
            .last()
            .and_then(|context| context.function)
    }

    pub(crate) fn running_execution_context(&self) -> &ExecutionContext {
        self.execution_context_stack
            .last()
            .expect("No running execution context")
    }
}

impl Index<RealmIdentifier> for Agent {
    type Output = Realm;

    fn index(&self, index: RealmIdentifier) -> &Self::Output {
        self.realms
            .get(index.into_index())
            .expect("RealmIdentifier out of bounds")
            .as_ref()
            .expect("RealmIdentifier slot empty")
    }
}

impl IndexMut<RealmIdentifier> for Agent {
    fn index_mut(&mut self, index: RealmIdentifier) -> &mut Self::Output {
        self.realms
            .get_mut(index.into_index())
            .expect("RealmIdentifier out of bounds")
            .as_mut()
            .expect("RealmIdentifier slot empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thrown_error_exposes_kind_and_message() {
        let mut agent = Agent::new(Options::default());
        let error = agent.throw_exception(ExceptionType::TypeError, "Cannot convert");
        assert_eq!(error.kind(&agent), Some(ExceptionType::TypeError));
        assert_eq!(error.message(&agent), Some("Cannot convert"));
        assert!(matches!(error.value(), Value::Error(_)));
    }

    #[test]
    fn thrown_value_has_no_kind() {
        let agent = Agent::new(Options::default());
        let error = JsError::new(Value::from(3));
        assert_eq!(error.kind(&agent), None);
        assert_eq!(error.message(&agent), None);
    }
}
