//! Stochastic universal sampling.

use super::roulette::fitness_weights;
use super::{pick, SelectionStrategy};
use crate::candidate::EvaluatedCandidate;
use rand::{Rng, RngCore};

/// Fitness-proportionate selection with a single spin.
///
/// The wheel is the same as [`RouletteWheelSelection`](super::RouletteWheelSelection),
/// but `selection_size` equally spaced pointers are placed after one random
/// offset. Every candidate is selected either `floor(e)` or `ceil(e)` times,
/// where `e` is its expected number of selections, which removes the spread
/// of independent spins.
///
/// Reference: Baker (1987), "Reducing Bias and Inefficiency in the Selection
/// Algorithm"
#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticUniversalSampling;

impl<T: Clone> SelectionStrategy<T> for StochasticUniversalSampling {
    fn select(
        &self,
        population: &[EvaluatedCandidate<T>],
        natural_fitness: bool,
        selection_size: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<T> {
        if population.is_empty() || selection_size == 0 {
            return Vec::new();
        }
        let weights = fitness_weights(population, natural_fitness);
        let indices = universal_sample(&weights, selection_size, rng);
        pick(population, &indices)
    }
}

/// Indices chosen by evenly spaced pointers over `weights`.
///
/// `weights` must be non-empty, non-negative and contain at least one
/// positive value. Draws exactly one random number.
pub(super) fn universal_sample(
    weights: &[f64],
    selection_size: usize,
    rng: &mut dyn RngCore,
) -> Vec<usize> {
    let total: f64 = weights.iter().sum();
    let step = total / selection_size as f64;
    let mut pointer = rng.random::<f64>() * step;

    let mut indices = Vec::with_capacity(selection_size);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        while indices.len() < selection_size && pointer < cumulative {
            indices.push(i);
            pointer += step;
        }
    }

    // Rounding can leave the last pointer just past the final boundary.
    if indices.len() < selection_size {
        let last_positive = weights.iter().rposition(|&w| w > 0.0).unwrap_or(0);
        indices.resize(selection_size, last_positive);
    }
    indices
}
