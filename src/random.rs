//! Pseudo random numbers for effects that need jitter.
//!
//! There is no process wide generator: each [`RandomSource`] owns its state
//! and is seeded explicitly, either by the caller or from OS entropy. Share
//! one between threads only behind your own synchronization, or create one
//! per thread.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: StdRng,
}

impl RandomSource {
    /// Same seed, same sequence.
    ///
    /// Sequences are stable for a given `rand` release but are not compatible
    /// with the C library `rand()`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the thread local OS backed generator.
    ///
    /// The chosen seed is logged at debug level so a run can be replayed with
    /// [`RandomSource::seeded`].
    pub fn from_entropy() -> Self {
        let seed = rand::rng().random::<u64>();
        debug!("Random source seeded with {seed}");
        Self::seeded(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[0, 1)`
    pub fn random_float(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform integer in `[0, max)`.
    ///
    /// Sampling is unbiased for every `max`, not `rand() % max`.
    ///
    /// # Panics
    ///
    /// When `max` is 0.
    pub fn random_int(&mut self, max: u32) -> u32 {
        assert!(max > 0, "random_int needs a non zero upper bound");
        self.rng.random_range(0..max)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
