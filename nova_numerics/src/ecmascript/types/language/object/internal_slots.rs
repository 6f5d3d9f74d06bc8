// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IntoObject, Object, OrdinaryObject};
use crate::ecmascript::execution::Agent;

/// ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)
///
/// Every object kind keeps its ordinary internal slots in a backing
/// [`OrdinaryObject`].
pub trait InternalSlots
where
    Self: Sized + IntoObject,
{
    fn get_backing_object(self, agent: &Agent) -> OrdinaryObject;

    /// #### \[\[Extensible\]\]
    fn internal_extensible(self, agent: &Agent) -> bool {
        agent[self.get_backing_object(agent)].extensible
    }

    /// #### \[\[Extensible\]\]
    fn internal_set_extensible(self, agent: &mut Agent, value: bool) {
        let backing_object = self.get_backing_object(agent);
        agent[backing_object].extensible = value;
    }

    /// #### \[\[Prototype\]\]
    fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        agent[self.get_backing_object(agent)].prototype
    }

    /// #### \[\[Prototype\]\]
    fn internal_set_prototype(self, agent: &mut Agent, prototype: Option<Object>) {
        let backing_object = self.get_backing_object(agent);
        agent[backing_object].prototype = prototype;
    }
}
