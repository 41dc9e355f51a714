//! Permutation candidates.

use super::types::CandidateFactory;
use crate::random::shuffle;
use rand::RngCore;

/// Generates uniformly random permutations of `0..n`.
///
/// Pairs with [`ListOrderCrossover`](crate::operators::ListOrderCrossover),
/// [`PartiallyMappedCrossover`](crate::operators::PartiallyMappedCrossover)
/// and [`PermutationMutation`](crate::operators::PermutationMutation).
#[derive(Debug, Clone, Copy)]
pub struct PermutationFactory {
    n: usize,
}

impl PermutationFactory {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl CandidateFactory<Vec<usize>> for PermutationFactory {
    fn generate(&self, rng: &mut dyn RngCore) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..self.n).collect();
        shuffle(&mut perm, rng);
        perm
    }
}
