// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [10.3 Built-in Function Objects](https://tc39.es/ecma262/#sec-built-in-function-objects)
//!
//! Builtin functions, the native accessor properties used to bind host
//! state, and the intrinsic objects built out of them.

mod builtin_function;
pub mod error;
pub(crate) mod fundamental_objects;
mod native_property;
pub(crate) mod numbers_and_dates;
pub(crate) mod ordinary;

pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, BuiltinFunction, BuiltinFunctionArgs,
    BuiltinFunctionHeapData, ClosureFn, RegularFn, create_builtin_function,
};
pub use native_property::{NativeGetter, NativeProperty, NativeSetter};
