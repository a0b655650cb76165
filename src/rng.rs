// src/rng.rs
//! Random Number Generation for Path Simulations
//!
//! Simulation quality hinges on two properties of the randomness source:
//!
//! 1. **Reproducibility**: same seed → same paths, which is what makes
//!    statistical tests and debugging sessions repeatable.
//! 2. **Independence across runs**: repeated simulations (and parallel
//!    batches) must not share a stream.
//!
//! Every path-generating function in this crate is generic over
//! [`rand::Rng`], so callers plug in whatever seeded generator they want;
//! [`RngFactory`] is the convenience layer that hands out one independent
//! stream per run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Factory handing out independent, reproducible RNG streams.
///
/// Each run gets its own `StdRng` seeded from `(base_seed, run_id)`, so a
/// batch of runs produces identical results whether it executes serially or
/// across a rayon thread pool.
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Create the RNG stream for a specific run.
    pub fn create_rng(&self, run_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(run_id))
    }
}

/// Seed a standalone `StdRng` from a `u64`.
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw a single standard normal variate, Z ~ N(0,1).
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
