// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Nova numerics
//!
//! The Number core of the Nova JavaScript engine: the Number value and its
//! classification, the coercion protocol (`ToNumber`, `ToUint32`, `ToInt32`),
//! the `%Math%` intrinsic object and the native binding layer that lets host
//! code expose functions and accessor properties to scripts.
//!
//! The object model carried here is the minimum needed to host those pieces:
//! ordinary objects, builtin functions and error objects living in a
//! [`Heap`](heap::Heap) owned by an [`Agent`](ecmascript::execution::Agent).

pub mod ecmascript;
pub mod heap;
