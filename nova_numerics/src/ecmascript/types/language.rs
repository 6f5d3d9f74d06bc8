// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod into_value;
mod number;
mod object;
mod string;
mod symbol;
mod value;

pub use into_value::IntoValue;
pub use number::{Number, NumberClass};
pub use object::{
    InternalMethods, InternalSlots, IntoObject, Object, ObjectHeapData, OrdinaryObject,
    PropertyAttributes, PropertyKey, PropertySlot, PropertyStorage, PropertyValue,
};
pub use string::{String, StringHeapData};
pub use symbol::{Symbol, SymbolHeapData};
pub use value::Value;
