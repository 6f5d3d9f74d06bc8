// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod heap_constants;
pub mod indexes;

use ahash::RandomState;
use hashbrown::HashMap;

pub use self::heap_constants::WellKnownSymbolIndexes;
use self::indexes::{BuiltinFunctionIndex, ErrorIndex, ObjectIndex, StringIndex, SymbolIndex};
use crate::ecmascript::{
    builtins::{BuiltinFunction, BuiltinFunctionHeapData, error::Error, error::ErrorHeapData},
    types::{
        ObjectHeapData, OrdinaryObject, String, StringHeapData, Symbol, SymbolHeapData,
    },
};

/// Storage of every heap-allocated value of an agent.
///
/// Entries are never freed: there is no collector in this engine core, so
/// handles stay valid for the lifetime of the agent.
#[derive(Debug)]
pub struct Heap {
    pub(crate) builtin_functions: Vec<Option<BuiltinFunctionHeapData>>,
    pub(crate) errors: Vec<Option<ErrorHeapData>>,
    pub(crate) objects: Vec<Option<ObjectHeapData>>,
    pub(crate) strings: Vec<Option<StringHeapData>>,
    pub(crate) symbols: Vec<Option<SymbolHeapData>>,
    /// Interning table: equal string contents always share one handle.
    string_lookup: HashMap<Box<str>, StringIndex, RandomState>,
}

pub trait CreateHeapData<T, F> {
    /// Allocates the given data on the heap and returns its handle.
    fn create(&mut self, data: T) -> F;
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        let mut heap = Self {
            builtin_functions: Vec::with_capacity(64),
            errors: Vec::new(),
            objects: Vec::with_capacity(64),
            strings: Vec::with_capacity(128),
            symbols: Vec::with_capacity(WellKnownSymbolIndexes::ALL.len()),
            string_lookup: HashMap::default(),
        };
        for well_known in WellKnownSymbolIndexes::ALL {
            let descriptor = heap.intern_string(well_known.description());
            let symbol: Symbol = heap.create(SymbolHeapData {
                descriptor: Some(descriptor),
            });
            debug_assert_eq!(symbol, Symbol::from(well_known));
        }
        heap
    }

    /// Returns the interned handle for `data`, allocating it on first use.
    pub(crate) fn intern_string(&mut self, data: &str) -> String {
        if let Some(index) = self.string_lookup.get(data) {
            return String(*index);
        }
        self.strings.push(Some(StringHeapData { data: data.into() }));
        let index = StringIndex::last(&self.strings);
        self.string_lookup.insert(data.into(), index);
        String(index)
    }

    /// Reserves an object slot that is filled in later by a builder.
    pub(crate) fn reserve_object(&mut self) -> OrdinaryObject {
        self.objects.push(None);
        OrdinaryObject(ObjectIndex::last(&self.objects))
    }
}

impl CreateHeapData<ObjectHeapData, OrdinaryObject> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> OrdinaryObject {
        self.objects.push(Some(data));
        OrdinaryObject(ObjectIndex::last(&self.objects))
    }
}

impl CreateHeapData<BuiltinFunctionHeapData, BuiltinFunction> for Heap {
    fn create(&mut self, data: BuiltinFunctionHeapData) -> BuiltinFunction {
        self.builtin_functions.push(Some(data));
        BuiltinFunction(BuiltinFunctionIndex::last(&self.builtin_functions))
    }
}

impl CreateHeapData<ErrorHeapData, Error> for Heap {
    fn create(&mut self, data: ErrorHeapData) -> Error {
        self.errors.push(Some(data));
        Error(ErrorIndex::last(&self.errors))
    }
}

impl CreateHeapData<SymbolHeapData, Symbol> for Heap {
    fn create(&mut self, data: SymbolHeapData) -> Symbol {
        self.symbols.push(Some(data));
        Symbol(SymbolIndex::last(&self.symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_symbols_are_preallocated() {
        let heap = Heap::new();
        assert_eq!(heap.symbols.len(), WellKnownSymbolIndexes::ALL.len());
        let to_string_tag = Symbol::from(WellKnownSymbolIndexes::ToStringTag);
        let descriptor = heap.symbols[to_string_tag.get_index()]
            .as_ref()
            .unwrap()
            .descriptor
            .unwrap();
        assert_eq!(
            &*heap.strings[descriptor.get_index()].as_ref().unwrap().data,
            "Symbol.toStringTag"
        );
    }

    #[test]
    fn strings_are_interned() {
        let mut heap = Heap::new();
        let before = heap.strings.len();
        let a = heap.intern_string("abs");
        let b = heap.intern_string("abs");
        let c = heap.intern_string("ceil");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(heap.strings.len(), before + 2);
    }
}
