//! Pairwise recombination.

use super::types::{check_size, EvolutionaryOperator};
use crate::error::EvolutionError;
use crate::number_sequence::NumberSequence;
use rand::{Rng, RngCore};

/// Recombines two parents.
///
/// Implementations return the offspring of one pair. To keep the population
/// size constant, a pair must yield exactly two children; the operator
/// checks the total after all pairs are processed.
pub trait Crossover<T>: Send + Sync {
    fn reproduce(
        &self,
        parent1: &T,
        parent2: &T,
        crossover_points: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<T>;
}

/// Drives a [`Crossover`] over a whole selection.
///
/// Candidates are paired in input order (0 with 1, 2 with 3, ...). For each
/// pair the number of crossover points is drawn from a [`NumberSequence`],
/// so the arity may be fixed or vary per pair. With probability
/// `1 - crossover_probability` a pair is passed through unchanged.
#[derive(Debug, Clone)]
pub struct CrossoverOperator<C> {
    crossover: C,
    crossover_points: NumberSequence<usize>,
    crossover_probability: f64,
}

impl<C> CrossoverOperator<C> {
    /// Recombines every pair using `crossover_points` points.
    pub fn new(crossover: C, crossover_points: impl Into<NumberSequence<usize>>) -> Self {
        Self {
            crossover,
            crossover_points: crossover_points.into(),
            crossover_probability: 1.0,
        }
    }

    /// Sets the probability that a pair is recombined.
    ///
    /// # Errors
    /// [`EvolutionError::Configuration`] unless `0.0 <= p <= 1.0`.
    pub fn with_probability(mut self, p: f64) -> Result<Self, EvolutionError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(EvolutionError::config(format!(
                "crossover probability must be in [0, 1], got {p}"
            )));
        }
        self.crossover_probability = p;
        Ok(self)
    }

    pub fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }
}

impl<T, C> EvolutionaryOperator<T> for CrossoverOperator<C>
where
    T: Clone,
    C: Crossover<T>,
{
    fn apply(&self, selected: &[T], rng: &mut dyn RngCore) -> Result<Vec<T>, EvolutionError> {
        if selected.len() % 2 != 0 {
            return Err(EvolutionError::config(format!(
                "crossover needs an even number of parents, got {}",
                selected.len()
            )));
        }

        let mut offspring = Vec::with_capacity(selected.len());
        for pair in selected.chunks_exact(2) {
            let recombine = self.crossover_probability >= 1.0
                || rng.random_bool(self.crossover_probability);
            if recombine {
                let points = self.crossover_points.next(rng);
                offspring.extend(self.crossover.reproduce(&pair[0], &pair[1], points, rng));
            } else {
                offspring.extend_from_slice(pair);
            }
        }

        check_size(
            <Self as EvolutionaryOperator<T>>::name(self),
            selected.len(),
            offspring.len(),
        )?;
        Ok(offspring)
    }

    fn requires_even_input(&self) -> bool {
        true
    }
}
