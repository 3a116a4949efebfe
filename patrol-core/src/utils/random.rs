#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way. Every consumer derives its own
/// generator, so results of parallel work do not depend on scheduling.
pub trait Random {
    /// Returns an independent RNG derived from the current state.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation. When created with a seed, it produces the same sequence of
/// values for the same sequence of calls.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with given seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        action(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn get_rng(&self) -> RandomGen {
        RandomGen::new_with_seed(self.with_rng(|rng| rng.next_u64()))
    }
}

/// Specifies underlying random generator type which is owned by a single worker.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: SmallRng,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` using given seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Produces real random value, uniformly distributed on [min, max).
    pub fn uniform_real(&mut self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON { min } else { self.rng.gen_range(min..max) }
    }

    /// Produces index value, uniformly distributed on [0, size).
    pub fn uniform_index(&mut self, size: usize) -> usize {
        assert!(size > 0);
        self.rng.gen_range(0..size)
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
