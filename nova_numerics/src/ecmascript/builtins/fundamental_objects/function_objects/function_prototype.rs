// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    builders::ordinary_object_builder::OrdinaryObjectBuilder,
    execution::{Agent, RealmIdentifier},
};

pub(crate) struct FunctionPrototype;

impl FunctionPrototype {
    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: RealmIdentifier) {
        let intrinsics = agent.get_realm(realm).intrinsics();
        let this = intrinsics.function_prototype();
        let object_prototype = intrinsics.object_prototype();

        // The Function prototype object:
        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            // has a [[Prototype]] internal slot whose value is %Object.prototype%.
            .with_prototype(object_prototype)
            .build();
    }
}
