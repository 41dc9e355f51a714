//! Sigma scaling.

use super::sus::universal_sample;
use super::{pick, SelectionStrategy};
use crate::candidate::EvaluatedCandidate;
use rand::RngCore;

/// Fitness-proportionate selection on scores rescaled by the spread of the
/// population.
///
/// Each score becomes `1 + (f - mean) / (2 * sigma)`, where `sigma` is the
/// population standard deviation. For inverted fitness the deviation is
/// negated, so below-average scores get above-average weight. Scaled values
/// that are zero or negative are raised to `0.1`; if `sigma` is zero every
/// candidate gets weight `1`. Sampling is stochastic universal sampling.
///
/// Early on, when variance is high, this damps super-individuals; late in a
/// run, when scores converge, it keeps the pressure up.
///
/// Reference: Forrest (1985), "Documentation for PRISONERS DILEMMA and NORMS
/// Programs That Use the Genetic Algorithm"
#[derive(Debug, Clone, Copy, Default)]
pub struct SigmaScaling;

const MIN_WEIGHT: f64 = 0.1;

fn sigma_weights<T>(population: &[EvaluatedCandidate<T>], natural_fitness: bool) -> Vec<f64> {
    let n = population.len() as f64;
    let mean = population.iter().map(|e| e.fitness()).sum::<f64>() / n;
    let variance = population
        .iter()
        .map(|e| (e.fitness() - mean).powi(2))
        .sum::<f64>()
        / n;
    let sigma = variance.sqrt();

    population
        .iter()
        .map(|e| {
            if sigma == 0.0 {
                return 1.0;
            }
            let deviation = if natural_fitness {
                e.fitness() - mean
            } else {
                mean - e.fitness()
            };
            let scaled = 1.0 + deviation / (2.0 * sigma);
            if scaled > 0.0 {
                scaled
            } else {
                MIN_WEIGHT
            }
        })
        .collect()
}

impl<T: Clone> SelectionStrategy<T> for SigmaScaling {
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
        let weights = sigma_weights(population, natural_fitness);
        let indices = universal_sample(&weights, selection_size, rng);
        pick(population, &indices)
    }
}
