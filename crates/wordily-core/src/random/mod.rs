//! Random selection seam.
//!
//! The app never reaches for a global generator; hosts inject a source so
//! selection stays reproducible under test.

pub mod mock;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform draw over `[0, bound)`. Callers guarantee `bound > 0`.
pub trait IndexRandom {
    fn next_index(&mut self, bound: usize) -> usize;
}

/// `rand`-backed source, seedable for reproducible sessions.
#[derive(Clone, Debug)]
pub struct StdIndexRandom {
    rng: StdRng,
}

impl StdIndexRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexRandom for StdIndexRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
