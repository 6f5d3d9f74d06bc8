// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Source of the uniformly distributed bits behind `Math.random`.
///
/// Each [`Agent`](super::Agent) owns its source, so agents never share
/// random state.
pub trait RandomSource: std::fmt::Debug {
    fn next_u32(&mut self) -> u32;
}

/// Draws from the thread-local generator of `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_u32(&mut self) -> u32 {
        rand::rng().next_u32()
    }
}

/// A deterministic source for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandomSource(StdRng);

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandomSource {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SeededRandomSource::new(7);
        let mut b = SeededRandomSource::new(7);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
