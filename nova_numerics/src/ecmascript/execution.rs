// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod agent;
mod execution_context;
mod random_source;
mod realm;

pub use agent::{Agent, ExceptionType, JsError, JsResult, Options};
pub(crate) use execution_context::ExecutionContext;
pub use random_source::{RandomSource, SeededRandomSource, ThreadRandomSource};
pub use realm::{Intrinsics, Realm, RealmIdentifier, create_realm, initialize_default_realm};
