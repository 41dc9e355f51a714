//! Selection strategies.
//!
//! A [`SelectionStrategy`] picks the parents of the next generation from a
//! population that is already sorted fittest first. Strategies differ in
//! selection pressure and in how they use randomness, but all of them:
//!
//! - return exactly `selection_size` candidates (an individual may be picked
//!   more than once),
//! - only return candidates present in the population,
//! - honor the fitness direction passed as `natural_fitness`,
//! - draw randomness only from the supplied source.
//!
//! # Provided Strategies
//!
//! - [`TruncationSelection`]: deterministic, top fraction cloned cyclically
//! - [`RouletteWheelSelection`]: fitness-proportionate, independent spins
//! - [`StochasticUniversalSampling`]: fitness-proportionate, evenly spaced pointers
//! - [`TournamentSelection`]: pairwise tournaments won by the fitter with probability `p`
//! - [`RankSelection`]: linear ranking over sorted positions
//! - [`SigmaScaling`]: fitness scaled by the population's standard deviation
//!
//! # References
//!
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection Algorithm"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod rank;
mod roulette;
mod sigma;
mod sus;
mod tournament;
mod truncation;

pub use rank::RankSelection;
pub use roulette::RouletteWheelSelection;
pub use sigma::SigmaScaling;
pub use sus::StochasticUniversalSampling;
pub use tournament::TournamentSelection;
pub use truncation::TruncationSelection;

use crate::candidate::EvaluatedCandidate;
use rand::RngCore;

/// Chooses parents from an evaluated population.
pub trait SelectionStrategy<T>: Send + Sync {
    /// Selects `selection_size` candidates from `population`.
    ///
    /// `population` is sorted fittest first under `natural_fitness`. An
    /// empty population yields an empty selection.
    fn select(
        &self,
        population: &[EvaluatedCandidate<T>],
        natural_fitness: bool,
        selection_size: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<T>;
}

impl<T, S> SelectionStrategy<T> for Box<S>
where
    S: SelectionStrategy<T> + ?Sized,
{
    fn select(
        &self,
        population: &[EvaluatedCandidate<T>],
        natural_fitness: bool,
        selection_size: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<T> {
        (**self).select(population, natural_fitness, selection_size, rng)
    }
}

/// Clones the candidates at `indices`.
fn pick<T: Clone>(population: &[EvaluatedCandidate<T>], indices: &[usize]) -> Vec<T> {
    indices
        .iter()
        .map(|&i| population[i].candidate().clone())
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::candidate::{sort_population, EvaluatedCandidate};

    /// Sorted population whose candidates are their original indices.
    pub fn population(fitness: &[f64], natural: bool) -> Vec<EvaluatedCandidate<usize>> {
        let mut pop: Vec<_> = fitness
            .iter()
            .enumerate()
            .map(|(i, &f)| EvaluatedCandidate::new(i, f))
            .collect();
        sort_population(&mut pop, natural);
        pop
    }

    /// How often each original index was selected.
    pub fn counts(selected: &[usize], n: usize) -> Vec<usize> {
        let mut counts = vec![0; n];
        for &i in selected {
            counts[i] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::population;
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn strategies() -> Vec<Box<dyn SelectionStrategy<usize>>> {
        vec![
            Box::new(TruncationSelection::new(0.5).unwrap()),
            Box::new(RouletteWheelSelection),
            Box::new(StochasticUniversalSampling),
            Box::new(TournamentSelection::new(0.7).unwrap()),
            Box::new(RankSelection),
            Box::new(SigmaScaling),
        ]
    }

    #[test]
    fn test_empty_population_or_zero_size() {
        let mut rng = create_rng(42);
        let empty: Vec<EvaluatedCandidate<usize>> = Vec::new();
        let pop = population(&[1.0, 2.0], true);
        for strategy in strategies() {
            assert!(strategy.select(&empty, true, 3, &mut rng).is_empty());
            assert!(strategy.select(&pop, true, 0, &mut rng).is_empty());
        }
    }

    proptest! {
        #[test]
        fn prop_exact_size_and_membership(
            fitness in prop::collection::vec(0.0f64..100.0, 1..30),
            selection_size in 0usize..60,
            natural in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let pop = population(&fitness, natural);
            let mut rng = create_rng(seed);
            for strategy in strategies() {
                let selected = strategy.select(&pop, natural, selection_size, &mut rng);
                prop_assert_eq!(selected.len(), selection_size);
                prop_assert!(selected.iter().all(|&i| i < fitness.len()));
            }
        }
    }
}
