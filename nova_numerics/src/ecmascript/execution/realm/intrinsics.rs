// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.7.4 Well-Known Intrinsic Objects](https://tc39.es/ecma262/#sec-well-known-intrinsic-objects)

use super::RealmIdentifier;
#[cfg(feature = "math")]
use crate::ecmascript::numbers_and_dates::math_object::MathObject;
use crate::ecmascript::{
    execution::Agent,
    fundamental_objects::{
        function_objects::function_prototype::FunctionPrototype,
        object_objects::object_prototype::ObjectPrototype,
    },
    types::OrdinaryObject,
};

#[derive(Debug, Clone)]
pub struct Intrinsics {
    object_prototype: OrdinaryObject,
    function_prototype: OrdinaryObject,
    #[cfg(feature = "math")]
    math: OrdinaryObject,
}

impl Intrinsics {
    /// Reserves a heap slot for every intrinsic object.
    pub(crate) fn new(agent: &mut Agent) -> Self {
        Self {
            object_prototype: agent.heap.reserve_object(),
            function_prototype: agent.heap.reserve_object(),
            #[cfg(feature = "math")]
            math: agent.heap.reserve_object(),
        }
    }

    /// Builds every intrinsic object into its reserved slot. The order only
    /// matters in that nothing may read an intrinsic's properties before it
    /// has been built.
    pub(crate) fn create_intrinsics(agent: &mut Agent, realm: RealmIdentifier) {
        ObjectPrototype::create_intrinsic(agent, realm);
        FunctionPrototype::create_intrinsic(agent, realm);
        #[cfg(feature = "math")]
        MathObject::create_intrinsic(agent, realm);
    }

    /// %Object.prototype%
    pub fn object_prototype(&self) -> OrdinaryObject {
        self.object_prototype
    }

    /// %Function.prototype%
    pub fn function_prototype(&self) -> OrdinaryObject {
        self.function_prototype
    }

    /// %Math%
    #[cfg(feature = "math")]
    pub fn math(&self) -> OrdinaryObject {
        self.math
    }
}
