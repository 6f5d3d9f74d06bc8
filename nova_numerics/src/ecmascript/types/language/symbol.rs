// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::ops::Index;

use super::{IntoValue, String, Value};
use crate::{
    ecmascript::execution::Agent,
    heap::{CreateHeapData, WellKnownSymbolIndexes, indexes::SymbolIndex},
};

/// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(pub(crate) SymbolIndex);

#[derive(Debug)]
pub struct SymbolHeapData {
    pub(crate) descriptor: Option<String>,
}

impl Symbol {
    pub(crate) const fn get_index(self) -> usize {
        self.0.into_index()
    }

    pub fn new(agent: &mut Agent, description: Option<&str>) -> Self {
        let descriptor = description.map(|description| String::from_str(agent, description));
        agent.heap.create(SymbolHeapData { descriptor })
    }

    /// The `[[Description]]` of the symbol.
    pub fn descriptor(self, agent: &Agent) -> Option<String> {
        agent[self].descriptor
    }
}

impl From<WellKnownSymbolIndexes> for Symbol {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        Self(value.into())
    }
}

impl IntoValue for Symbol {
    fn into_value(self) -> Value {
        Value::Symbol(self)
    }
}

impl Index<Symbol> for Agent {
    type Output = SymbolHeapData;

    fn index(&self, index: Symbol) -> &Self::Output {
        self.heap
            .symbols
            .get(index.get_index())
            .expect("Symbol out of bounds")
            .as_ref()
            .expect("Symbol slot empty")
    }
}
