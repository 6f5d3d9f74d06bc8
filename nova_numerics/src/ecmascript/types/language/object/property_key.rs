// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        execution::Agent,
        types::{IntoValue, String, Symbol, Value},
    },
    heap::WellKnownSymbolIndexes,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, str: &str) -> Self {
        Self::String(String::from_str(agent, str))
    }

    /// Human readable form of the key for diagnostics.
    pub(crate) fn as_display(self, agent: &Agent) -> std::string::String {
        match self {
            PropertyKey::String(data) => data.as_str(agent).to_owned(),
            PropertyKey::Symbol(symbol) => match symbol.descriptor(agent) {
                Some(descriptor) => format!("[{}]", descriptor.as_str(agent)),
                None => "[Symbol()]".to_owned(),
            },
        }
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<WellKnownSymbolIndexes> for PropertyKey {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        Self::Symbol(value.into())
    }
}

impl IntoValue for PropertyKey {
    fn into_value(self) -> Value {
        match self {
            PropertyKey::String(data) => Value::String(data),
            PropertyKey::Symbol(data) => Value::Symbol(data),
        }
    }
}
