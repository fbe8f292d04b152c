//! Random sources for book packing and config randomization.
//!
//! Generation never touches a process-wide generator. Callers hand in a
//! [`RandomSource`], and reproducible output is a matter of seeding it the
//! same way before each run.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random values consumed by the bookshelf generator.
pub trait RandomSource {
    /// Uniform value in `[min, max)`.
    ///
    /// An empty or inverted range yields `min`.
    fn uniform(&mut self, min: f32, max: f32) -> f32;

    /// Random color with hue, saturation and value drawn uniformly.
    fn random_color(&mut self) -> Color {
        let hue = self.uniform(0.0, 360.0);
        let saturation = self.uniform(0.0, 1.0);
        let value = self.uniform(0.0, 1.0);
        Color::hsv(hue, saturation, value)
    }
}

/// PCG32-backed [`RandomSource`] with an explicit seed.
///
/// # Example
/// ```
/// use bevy_bookshelf::random::{RandomSource, SeededRandom};
///
/// let mut a = SeededRandom::new(7);
/// let mut b = SeededRandom::new(7);
/// assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: Pcg32,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Seed for `Some`, entropy for `None`.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        // random_range panics on empty ranges
        if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }
}
