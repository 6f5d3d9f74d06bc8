// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heap constants for initializing the heap
//!
//! The well-known symbols are allocated first so that their handles are
//! known statically.

use super::indexes::SymbolIndex;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellKnownSymbolIndexes {
    ToPrimitive,
    ToStringTag,
}

impl WellKnownSymbolIndexes {
    pub(crate) const ALL: [Self; 2] = [Self::ToPrimitive, Self::ToStringTag];

    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::ToPrimitive => "Symbol.toPrimitive",
            Self::ToStringTag => "Symbol.toStringTag",
        }
    }
}

impl From<WellKnownSymbolIndexes> for SymbolIndex {
    fn from(value: WellKnownSymbolIndexes) -> Self {
        SymbolIndex::from_u32_index(value as u32)
    }
}
