//! Tournament selection.

use super::SelectionStrategy;
use crate::candidate::{is_fitter, EvaluatedCandidate};
use crate::error::EvolutionError;
use rand::{Rng, RngCore};

/// Pairwise tournaments with a probabilistic winner.
///
/// Each selection draws two candidates uniformly (with replacement). With
/// probability `selection_probability` the fitter one is selected, otherwise
/// the weaker one. On equal scores the first-drawn candidate counts as the
/// fitter. Higher probability means stronger selection pressure; 1.0 always
/// picks the fitter.
///
/// # Complexity
/// O(1) per selection, three random draws
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentSelection {
    selection_probability: f64,
}

impl TournamentSelection {
    /// # Errors
    /// [`EvolutionError::Configuration`] unless
    /// `0.5 < selection_probability <= 1.0`.
    pub fn new(selection_probability: f64) -> Result<Self, EvolutionError> {
        if !(selection_probability > 0.5 && selection_probability <= 1.0) {
            return Err(EvolutionError::config(format!(
                "tournament selection probability must be in (0.5, 1], got {selection_probability}"
            )));
        }
        Ok(Self {
            selection_probability,
        })
    }

    pub fn selection_probability(&self) -> f64 {
        self.selection_probability
    }
}

impl<T: Clone> SelectionStrategy<T> for TournamentSelection {
    fn select(
        &self,
        population: &[EvaluatedCandidate<T>],
        natural_fitness: bool,
        selection_size: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<T> {
        if population.is_empty() {
            return Vec::new();
        }
        let n = population.len();

        (0..selection_size)
            .map(|_| {
                let first = &population[rng.random_range(0..n)];
                let second = &population[rng.random_range(0..n)];
                let take_fitter = rng.random_bool(self.selection_probability);

                let (fitter, weaker) =
                    if is_fitter(second.fitness(), first.fitness(), natural_fitness) {
                        (second, first)
                    } else {
                        (first, second)
                    };
                let winner = if take_fitter { fitter } else { weaker };
                winner.candidate().clone()
            })
            .collect()
    }
}
