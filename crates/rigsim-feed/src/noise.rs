//! Randomness sources for the sensor model.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed noise.
pub trait NoiseSource: Send {
    /// Sample a value in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}

/// Pseudo-random noise backed by `StdRng`.
pub struct RandomNoise {
    rng: StdRng,
}

impl RandomNoise {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible noise from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNoise {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl NoiseSource for RandomNoise {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        // Empty or NaN ranges would make gen_range panic
        if low.partial_cmp(&high) != Some(Ordering::Less) {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

impl std::fmt::Debug for RandomNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomNoise").finish_non_exhaustive()
    }
}

/// Noise that is always zero. Makes the model fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
        0.0
    }
}
