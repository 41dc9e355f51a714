//! Evaluated candidates and population statistics.

use std::cmp::Ordering;
use std::time::Duration;

/// A candidate paired with its fitness score and its rank in the sorted
/// population (0 = fittest).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedCandidate<T> {
    candidate: T,
    fitness: f64,
    rank: usize,
}

impl<T> EvaluatedCandidate<T> {
    /// Wraps a scored candidate. The rank is assigned when the population
    /// is sorted.
    pub fn new(candidate: T, fitness: f64) -> Self {
        Self {
            candidate,
            fitness,
            rank: 0,
        }
    }

    /// The candidate itself.
    pub fn candidate(&self) -> &T {
        &self.candidate
    }

    /// Consumes the wrapper, returning the candidate.
    pub fn into_candidate(self) -> T {
        self.candidate
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Position in the sorted population.
    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// Compares two scores so that the fitter one orders first.
pub fn compare_fitness(a: f64, b: f64, natural: bool) -> Ordering {
    let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    if natural {
        ord.reverse()
    } else {
        ord
    }
}

/// Returns `true` if `a` is strictly fitter than `b`.
pub fn is_fitter(a: f64, b: f64, natural: bool) -> bool {
    compare_fitness(a, b, natural) == Ordering::Less
}

/// Stable sort, fittest first, then assigns ranks.
///
/// Equal scores keep their relative input order, so the result is fully
/// determined by the input sequence.
pub fn sort_population<T>(population: &mut [EvaluatedCandidate<T>], natural: bool) {
    population.sort_by(|a, b| compare_fitness(a.fitness, b.fitness, natural));
    for (rank, evaluated) in population.iter_mut().enumerate() {
        evaluated.rank = rank;
    }
}

/// Per-generation statistics over a sorted population.
///
/// Passed to termination conditions and, together with the fittest
/// candidate, to observers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 0 for the initial population, incremented per breeding step.
    pub generation: usize,

    /// Time since the run started.
    pub elapsed: Duration,

    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub worst_fitness: f64,

    /// Population standard deviation of the fitness scores.
    pub fitness_std_dev: f64,

    pub population_size: usize,
    pub elite_count: usize,

    /// Generations since the best fitness last strictly improved.
    pub generations_since_improvement: usize,

    /// Whether higher scores are fitter in this run.
    pub natural_fitness: bool,
}

impl GenerationStats {
    /// Computes statistics over a non-empty, sorted population.
    pub(crate) fn compute<T>(
        population: &[EvaluatedCandidate<T>],
        generation: usize,
        elapsed: Duration,
        elite_count: usize,
        generations_since_improvement: usize,
        natural_fitness: bool,
    ) -> Self {
        let n = population.len() as f64;
        let mean = population.iter().map(|e| e.fitness).sum::<f64>() / n;
        let variance = population
            .iter()
            .map(|e| (e.fitness - mean).powi(2))
            .sum::<f64>()
            / n;

        Self {
            generation,
            elapsed,
            best_fitness: population.first().map_or(f64::NAN, |e| e.fitness),
            mean_fitness: mean,
            worst_fitness: population.last().map_or(f64::NAN, |e| e.fitness),
            fitness_std_dev: variance.sqrt(),
            population_size: population.len(),
            elite_count,
            generations_since_improvement,
            natural_fitness,
        }
    }
}
