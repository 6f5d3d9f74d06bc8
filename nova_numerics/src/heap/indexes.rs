// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::fmt::Debug;
use std::{
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::size_of,
    num::NonZeroU32,
};

use crate::ecmascript::{
    builtins::{BuiltinFunctionHeapData, error::ErrorHeapData},
    types::{ObjectHeapData, StringHeapData, SymbolHeapData},
};

/// A struct containing a non-zero index into an array or
/// vector of `T`s. Due to the non-zero value, the offset
/// in the vector is offset by one.
pub struct BaseIndex<T: ?Sized>(NonZeroU32, PhantomData<T>);

const _INDEX_SIZE_IS_U32: () = assert!(size_of::<BaseIndex<()>>() == size_of::<u32>());
const _OPTION_INDEX_SIZE_IS_U32: () =
    assert!(size_of::<Option<BaseIndex<()>>>() == size_of::<u32>());

impl<T: ?Sized> Debug for BaseIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.into_u32_index().fmt(f)
    }
}

impl<T: ?Sized> Clone for BaseIndex<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for BaseIndex<T> {}

impl<T: ?Sized> PartialEq for BaseIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ?Sized> Eq for BaseIndex<T> {}

impl<T: ?Sized> PartialOrd for BaseIndex<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ?Sized> Ord for BaseIndex<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: ?Sized> Hash for BaseIndex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: ?Sized> BaseIndex<T> {
    pub const fn into_index(self) -> usize {
        self.0.get() as usize - 1
    }

    pub const fn into_u32_index(self) -> u32 {
        self.0.get() - 1
    }

    pub const fn from_index(value: usize) -> Self {
        assert!(value < u32::MAX as usize);
        Self::from_u32_index(value as u32)
    }

    pub const fn from_u32_index(value: u32) -> Self {
        assert!(value != u32::MAX);
        match NonZeroU32::new(value + 1) {
            Some(index) => Self(index, PhantomData),
            None => unreachable!(),
        }
    }

    /// Index of the most recently pushed entry of `vec`.
    pub fn last(vec: &[Option<T>]) -> Self
    where
        T: Sized,
    {
        assert!(!vec.is_empty());
        Self::from_index(vec.len() - 1)
    }
}

pub type BuiltinFunctionIndex = BaseIndex<BuiltinFunctionHeapData>;
pub type ErrorIndex = BaseIndex<ErrorHeapData>;
pub type ObjectIndex = BaseIndex<ObjectHeapData>;
pub type StringIndex = BaseIndex<StringHeapData>;
pub type SymbolIndex = BaseIndex<SymbolHeapData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_offset_by_one() {
        let index = ObjectIndex::from_index(0);
        assert_eq!(index.into_index(), 0);
        assert_eq!(index.into_u32_index(), 0);
        assert_eq!(ObjectIndex::from_u32_index(41).into_index(), 41);
    }

    #[test]
    fn option_index_is_niche_optimised() {
        assert_eq!(size_of::<Option<StringIndex>>(), size_of::<u32>());
    }

    #[test]
    fn last_points_at_final_entry() {
        let vec: Vec<Option<ObjectHeapData>> = vec![None, None, None];
        assert_eq!(ObjectIndex::last(&vec).into_index(), 2);
    }
}
