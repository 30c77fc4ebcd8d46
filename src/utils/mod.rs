/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, Hasher};

pub type DefaultBuildHasher = SeededState;

/// A [`BuildHasher`] keyed by an explicit 64-bit seed.
///
/// Every hasher it builds starts from the same seed, so a key hashes to the same value for
/// the whole life of the map that owns the state.  A fresh random seed makes the bucket of a
/// key unpredictable across runs, which blunts adversarially chosen keys.
///
/// The seed is hashed as a prefix of every key by a [`DefaultHasher`] with the default SipHash
/// key; it is not used as the SipHash key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededState {
    seed: u64,
}

impl SeededState {
    /// Creates a state with a randomly drawn seed.
    #[must_use]
    pub fn new() -> SeededState {
        SeededState::with_seed(rand::random())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> SeededState {
        SeededState { seed }
    }

    #[must_use]
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededState {
    fn default() -> SeededState {
        SeededState::new()
    }
}

impl BuildHasher for SeededState {
    type Hasher = DefaultHasher;

    fn build_hasher(&self) -> DefaultHasher {
        let mut hasher = DefaultHasher::new();

        hasher.write_u64(self.seed);

        hasher
    }
}
