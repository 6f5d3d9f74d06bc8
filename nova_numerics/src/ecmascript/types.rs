// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod language;
mod spec;

pub use language::{
    InternalMethods, InternalSlots, IntoObject, IntoValue, Number, NumberClass, Object,
    ObjectHeapData, OrdinaryObject, PropertyAttributes, PropertyKey, PropertySlot,
    PropertyStorage, PropertyValue, String, StringHeapData, Symbol, SymbolHeapData, Value,
};
pub use spec::PropertyDescriptor;
