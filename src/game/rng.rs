//! Random root word selection
//!
//! The session never touches a global RNG; it asks an injected
//! [`RandomSource`] for an index instead.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of indices for picking a root word
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// PCG-backed source, reproducible when built from a seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always picks the same index (wrapped to the list length)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPick(pub usize);

impl RandomSource for FixedPick {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}
