// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt::Debug;
use std::rc::Rc;

use crate::ecmascript::{
    execution::{Agent, JsResult},
    types::{Object, Value},
};

/// Host getter of a native accessor. Receives the object the property was
/// read through.
pub type NativeGetter = dyn Fn(&mut Agent, Object) -> JsResult<Value>;

/// Host setter of a native accessor. Receives the object the property was
/// written through and the assigned value.
pub type NativeSetter = dyn Fn(&mut Agent, Object, Value) -> JsResult<()>;

/// An accessor property whose reads and writes are served by host closures.
///
/// A missing getter reads as `undefined` and a missing setter ignores
/// writes. Neither case is an error.
#[derive(Clone, Default)]
pub struct NativeProperty {
    getter: Option<Rc<NativeGetter>>,
    setter: Option<Rc<NativeSetter>>,
}

impl NativeProperty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(getter: Option<Rc<NativeGetter>>, setter: Option<Rc<NativeSetter>>) -> Self {
        Self { getter, setter }
    }

    pub fn with_getter(
        mut self,
        getter: impl Fn(&mut Agent, Object) -> JsResult<Value> + 'static,
    ) -> Self {
        self.getter = Some(Rc::new(getter));
        self
    }

    pub fn with_setter(
        mut self,
        setter: impl Fn(&mut Agent, Object, Value) -> JsResult<()> + 'static,
    ) -> Self {
        self.setter = Some(Rc::new(setter));
        self
    }

    pub fn has_getter(&self) -> bool {
        self.getter.is_some()
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }

    pub fn get(&self, agent: &mut Agent, owner: Object) -> JsResult<Value> {
        match &self.getter {
            Some(getter) => getter(agent, owner),
            None => Ok(Value::Undefined),
        }
    }

    pub fn set(&self, agent: &mut Agent, owner: Object, value: Value) -> JsResult<()> {
        match &self.setter {
            Some(setter) => setter(agent, owner, value),
            None => Ok(()),
        }
    }
}

impl Debug for NativeProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeProperty")
            .field("getter", &self.has_getter())
            .field("setter", &self.has_setter())
            .finish()
    }
}
