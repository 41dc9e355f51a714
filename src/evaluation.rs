//! Fitness evaluation.
//!
//! A [`FitnessEvaluator`] scores one candidate at a time, with read-only
//! access to the whole unevaluated generation for relative or competitive
//! fitness. The engine may call it from several threads at once, so
//! evaluators must be `Send + Sync` and must not depend on the run's random
//! source.

use crate::candidate::{sort_population, EvaluatedCandidate};
use crate::error::{BoxError, EvolutionError};

/// Scores candidates.
///
/// # Implementing
///
/// ```
/// use u_evolve::{BoxError, FitnessEvaluator};
///
/// struct CountA;
///
/// impl FitnessEvaluator<String> for CountA {
///     fn fitness(&self, candidate: &String, _population: &[String]) -> Result<f64, BoxError> {
///         Ok(candidate.chars().filter(|&c| c == 'A').count() as f64)
///     }
///
///     fn is_natural(&self) -> bool {
///         true
///     }
/// }
/// ```
pub trait FitnessEvaluator<T>: Send + Sync {
    /// Computes the fitness of `candidate`.
    ///
    /// `population` is the full generation the candidate belongs to.
    /// Evaluators that need no context ignore it.
    fn fitness(&self, candidate: &T, population: &[T]) -> Result<f64, BoxError>;

    /// `true` if higher scores are fitter, `false` if lower scores are.
    ///
    /// Must return the same value for the whole run.
    fn is_natural(&self) -> bool;
}

/// Adapts a plain function into a [`FitnessEvaluator`].
///
/// ```
/// use u_evolve::{FitnessEvaluator, FnEvaluator};
///
/// let sphere = FnEvaluator::inverted(|x: &Vec<f64>| -> f64 { x.iter().map(|v| v * v).sum() });
/// assert_eq!(sphere.fitness(&vec![1.0, 2.0], &[]).unwrap(), 5.0);
/// assert!(!sphere.is_natural());
/// ```
#[derive(Debug, Clone)]
pub struct FnEvaluator<F> {
    function: F,
    natural: bool,
}

impl<F> FnEvaluator<F> {
    /// Higher scores are fitter.
    pub fn natural(function: F) -> Self {
        Self {
            function,
            natural: true,
        }
    }

    /// Lower scores are fitter.
    pub fn inverted(function: F) -> Self {
        Self {
            function,
            natural: false,
        }
    }
}

impl<T, F> FitnessEvaluator<T> for FnEvaluator<F>
where
    F: Fn(&T) -> f64 + Send + Sync,
{
    fn fitness(&self, candidate: &T, _population: &[T]) -> Result<f64, BoxError> {
        Ok((self.function)(candidate))
    }

    fn is_natural(&self) -> bool {
        self.natural
    }
}

/// Scores every candidate and returns the population sorted fittest first.
///
/// Scores are reassembled by position before the single stable sort, so the
/// outcome does not depend on whether evaluation ran in parallel. When
/// several candidates fail, the error for the lowest index is reported.
pub(crate) fn evaluate_population<T, E>(
    evaluator: &E,
    population: Vec<T>,
    parallel: bool,
) -> Result<Vec<EvaluatedCandidate<T>>, EvolutionError>
where
    T: Send + Sync,
    E: FitnessEvaluator<T> + ?Sized,
{
    let scores = score_all(evaluator, &population, parallel);

    let mut evaluated = Vec::with_capacity(population.len());
    for (index, (candidate, score)) in population.into_iter().zip(scores).enumerate() {
        let fitness = match score {
            Ok(f) if f.is_finite() => f,
            Ok(f) => {
                return Err(EvolutionError::Evaluation {
                    index,
                    source: format!("non-finite fitness score: {f}").into(),
                })
            }
            Err(source) => return Err(EvolutionError::Evaluation { index, source }),
        };
        evaluated.push(EvaluatedCandidate::new(candidate, fitness));
    }

    sort_population(&mut evaluated, evaluator.is_natural());
    Ok(evaluated)
}

#[cfg(feature = "parallel")]
fn score_all<T, E>(evaluator: &E, population: &[T], parallel: bool) -> Vec<Result<f64, BoxError>>
where
    T: Send + Sync,
    E: FitnessEvaluator<T> + ?Sized,
{
    use rayon::prelude::*;

    if parallel {
        population
            .par_iter()
            .map(|candidate| evaluator.fitness(candidate, population))
            .collect()
    } else {
        population
            .iter()
            .map(|candidate| evaluator.fitness(candidate, population))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all<T, E>(evaluator: &E, population: &[T], _parallel: bool) -> Vec<Result<f64, BoxError>>
where
    E: FitnessEvaluator<T> + ?Sized,
{
    population
        .iter()
        .map(|candidate| evaluator.fitness(candidate, population))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Length;

    impl FitnessEvaluator<String> for Length {
        fn fitness(&self, candidate: &String, _population: &[String]) -> Result<f64, BoxError> {
            Ok(candidate.len() as f64)
        }
        fn is_natural(&self) -> bool {
            true
        }
    }

    /// Fitness relative to the rest of the population.
    struct ShareOfTotal;

    impl FitnessEvaluator<u32> for ShareOfTotal {
        fn fitness(&self, candidate: &u32, population: &[u32]) -> Result<f64, BoxError> {
            let total: u32 = population.iter().sum();
            Ok(*candidate as f64 / total as f64)
        }
        fn is_natural(&self) -> bool {
            true
        }
    }

    struct FailsOn(&'static str);

    impl FitnessEvaluator<String> for FailsOn {
        fn fitness(&self, candidate: &String, _population: &[String]) -> Result<f64, BoxError> {
            if candidate == self.0 {
                Err(format!("cannot score {candidate}").into())
            } else {
                Ok(1.0)
            }
        }
        fn is_natural(&self) -> bool {
            false
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_evaluate_sorts_fittest_first() {
        let pop = strings(&["aa", "a", "aaaa", "aaa"]);
        let evaluated = evaluate_population(&Length, pop, false).unwrap();
        let fitness: Vec<f64> = evaluated.iter().map(|e| e.fitness()).collect();
        assert_eq!(fitness, vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_population_context_is_passed() {
        let evaluated = evaluate_population(&ShareOfTotal, vec![1, 3], false).unwrap();
        assert!((evaluated[0].fitness() - 0.75).abs() < 1e-12);
        assert!((evaluated[1].fitness() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pop: Vec<String> = (0..200).map(|i| "x".repeat(i % 17)).collect();
        let seq = evaluate_population(&Length, pop.clone(), false).unwrap();
        let par = evaluate_population(&Length, pop, true).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_error_reports_first_index() {
        let pop = strings(&["ok", "bad", "ok", "bad"]);
        let err = evaluate_population(&FailsOn("bad"), pop, true).unwrap_err();
        assert!(matches!(err, EvolutionError::Evaluation { index: 1, .. }));
    }

    #[test]
    fn test_non_finite_score_is_error() {
        let nan = FnEvaluator::natural(|_: &u8| f64::NAN);
        let err = evaluate_population(&nan, vec![1u8, 2], false).unwrap_err();
        assert!(matches!(err, EvolutionError::Evaluation { index: 0, .. }));
    }
}
