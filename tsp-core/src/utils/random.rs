#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces an index uniformly distributed on the half-open interval [0, size).
    /// The size must be positive.
    fn uniform_index(&self, size: usize) -> usize;
}

/// A default random implementation backed by a small, fast RNG.
///
/// The instance is intended to be owned by one worker: it can be moved between threads,
/// but not shared.
pub struct DefaultRandom {
    rng: RefCell<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` which produces the same sequence for the same seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }

    /// Creates a new instance seeded from `seed` if it is present, from OS entropy otherwise.
    pub fn new_with_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::default, Self::new_with_seed)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_index(&self, size: usize) -> usize {
        debug_assert!(size > 0);

        if size <= 1 {
            return 0;
        }

        self.rng.borrow_mut().gen_range(0..size)
    }
}
