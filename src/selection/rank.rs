//! Linear rank selection.

use super::sus::universal_sample;
use super::{pick, SelectionStrategy};
use crate::candidate::EvaluatedCandidate;
use rand::RngCore;

/// Selection proportional to rank rather than raw score.
///
/// In a population of `n` sorted fittest-first, the candidate at index `i`
/// gets weight `n - i`, so the fittest has weight `n` and the weakest `1`.
/// Selection pressure no longer depends on the fitness scale or on outliers.
/// Sampling is done with stochastic universal sampling over those weights.
///
/// The population must be sorted fittest-first, which the engine guarantees.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankSelection;

impl<T: Clone> SelectionStrategy<T> for RankSelection {
    fn select(
        &self,
        population: &[EvaluatedCandidate<T>],
        _natural_fitness: bool,
        selection_size: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<T> {
        if population.is_empty() || selection_size == 0 {
            return Vec::new();
        }
        let n = population.len();
        let weights: Vec<f64> = (0..n).map(|i| (n - i) as f64).collect();
        let indices = universal_sample(&weights, selection_size, rng);
        pick(population, &indices)
    }
}
