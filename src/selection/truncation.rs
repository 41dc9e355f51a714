//! Truncation selection.

use super::SelectionStrategy;
use crate::candidate::EvaluatedCandidate;
use crate::error::EvolutionError;
use rand::RngCore;

/// Keeps only the fittest fraction of the population.
///
/// `eligible = round(selection_ratio * population.len())`, clamped to
/// `1..=selection_size`. The `eligible` fittest candidates are cloned in
/// rank order, cycling until the quota is filled; the last pass takes only
/// what is still missing. Consumes no randomness.
///
/// ```
/// use u_evolve::selection::{SelectionStrategy, TruncationSelection};
/// use u_evolve::EvaluatedCandidate;
/// use u_evolve::random::create_rng;
///
/// let pop: Vec<_> = [9.0, 7.0, 5.0, 3.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &f)| EvaluatedCandidate::new(i, f))
///     .collect();
/// let selection = TruncationSelection::new(0.5).unwrap();
/// let picked = selection.select(&pop, true, 5, &mut create_rng(0));
/// assert_eq!(picked, vec![0, 1, 0, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruncationSelection {
    selection_ratio: f64,
}

impl TruncationSelection {
    /// # Errors
    /// [`EvolutionError::Configuration`] unless `0 < selection_ratio < 1`.
    pub fn new(selection_ratio: f64) -> Result<Self, EvolutionError> {
        if !(selection_ratio > 0.0 && selection_ratio < 1.0) {
            return Err(EvolutionError::config(format!(
                "selection ratio must be in (0, 1), got {selection_ratio}"
            )));
        }
        Ok(Self { selection_ratio })
    }

    pub fn selection_ratio(&self) -> f64 {
        self.selection_ratio
    }

    /// Number of top-ranked candidates that may be selected.
    fn eligible_count(&self, population_size: usize, selection_size: usize) -> usize {
        let eligible = (self.selection_ratio * population_size as f64).round() as usize;
        eligible.min(selection_size).max(1)
    }
}

impl<T: Clone> SelectionStrategy<T> for TruncationSelection {
    fn select(
        &self,
        population: &[EvaluatedCandidate<T>],
        _natural_fitness: bool,
        selection_size: usize,
        _rng: &mut dyn RngCore,
    ) -> Vec<T> {
        if population.is_empty() || selection_size == 0 {
            return Vec::new();
        }

        let eligible = self.eligible_count(population.len(), selection_size);
        let mut selection = Vec::with_capacity(selection_size);
        while selection.len() < selection_size {
            let count = eligible.min(selection_size - selection.len());
            selection.extend(
                population[..count]
                    .iter()
                    .map(|evaluated| evaluated.candidate().clone()),
            );
        }
        selection
    }
}
