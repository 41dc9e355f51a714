//! Roulette-wheel selection.

use super::{pick, SelectionStrategy};
use crate::candidate::EvaluatedCandidate;
use rand::{Rng, RngCore};

/// Fitness-proportionate selection with independent spins.
///
/// Each candidate owns a slice of the wheel proportional to its weight: the
/// raw score for natural fitness, `1 / score` for inverted fitness, shifted
/// when scores go negative. See
/// [`fitness_weights`] for the edge cases. Every spin is independent, so the
/// fittest candidate may be drawn many times, or not at all.
///
/// **Warning**: Susceptible to super-individual dominance when fitness
/// variance is high.
///
/// # Complexity
/// O(n) to build the wheel, O(log n) per spin
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelection;

impl<T: Clone> SelectionStrategy<T> for RouletteWheelSelection {
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

        let cumulative: Vec<f64> = fitness_weights(population, natural_fitness)
            .into_iter()
            .scan(0.0, |sum, w| {
                *sum += w;
                Some(*sum)
            })
            .collect();
        let total = cumulative[cumulative.len() - 1];
        let last = cumulative.len() - 1;

        let indices: Vec<usize> = (0..selection_size)
            .map(|_| {
                let threshold = rng.random::<f64>() * total;
                cumulative.partition_point(|&c| c <= threshold).min(last)
            })
            .collect();
        pick(population, &indices)
    }
}

/// Added to shifted weights so the weakest candidate keeps a sliver of the
/// wheel.
const SHIFT_EPSILON: f64 = 1e-10;

/// Wheel weights for fitness-proportionate strategies.
///
/// - Natural fitness: the score itself. If any score is negative, every
///   score is shifted by the population minimum first (`f - min + eps`).
/// - Inverted fitness: `1 / score`. Candidates scoring exactly zero are
///   perfect; if any exist, only they get a (equal) share of the wheel. If
///   any score is negative, weights are `max - f + eps` instead.
/// - If every weight is zero, all candidates get equal weight.
///
/// In every case a fitter score gets at least the weight of a weaker one.
pub(super) fn fitness_weights<T>(
    population: &[EvaluatedCandidate<T>],
    natural_fitness: bool,
) -> Vec<f64> {
    let scores = population.iter().map(|e| e.fitness());
    let min = scores.clone().fold(f64::INFINITY, f64::min);
    let max = scores.clone().fold(f64::NEG_INFINITY, f64::max);

    let mut weights: Vec<f64> = if natural_fitness {
        if min < 0.0 {
            scores.map(|f| f - min + SHIFT_EPSILON).collect()
        } else {
            scores.collect()
        }
    } else if min < 0.0 {
        scores.map(|f| max - f + SHIFT_EPSILON).collect()
    } else if min == 0.0 {
        scores.map(|f| if f == 0.0 { 1.0 } else { 0.0 }).collect()
    } else {
        scores.map(|f| 1.0 / f).collect()
    };

    if weights.iter().all(|&w| w <= 0.0) {
        weights.iter_mut().for_each(|w| *w = 1.0);
    }
    weights
}
