//! Random source helpers.
//!
//! Every strategy receives the run's random source explicitly as
//! `&mut dyn RngCore`; nothing in the crate touches a global generator
//! except [`random_seed`], which is only used when no seed was configured.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Creates a seeded generator for a run.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the thread-local generator.
pub fn random_seed() -> u64 {
    rand::random()
}

/// Fisher-Yates shuffle driven by the supplied source.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RngCore) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
