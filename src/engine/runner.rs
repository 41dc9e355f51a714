//! The generational loop.
//!
//! [`EvolutionEngine`] drives a run:
//! initialization → evaluation → (selection → reproduction → evaluation)* →
//! termination. Every completed generation is reported to the observers and
//! checked against the termination conditions.

use super::config::{validate_run, EngineConfig};
use crate::candidate::{is_fitter, EvaluatedCandidate, GenerationStats};
use crate::error::{EvolutionError, EvolutionFailure};
use crate::evaluation::{evaluate_population, FitnessEvaluator};
use crate::factory::CandidateFactory;
use crate::observer::{EvolutionObserver, PopulationData};
use crate::operators::{check_size, short_type_name, EvolutionaryOperator};
use crate::random::{create_rng, random_seed};
use crate::selection::SelectionStrategy;
use crate::termination::TerminationCondition;
use rand::RngCore;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of a completed run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult<T> {
    /// The final population, fittest first.
    pub population: Vec<EvaluatedCandidate<T>>,

    /// Number of breeding generations completed.
    pub generations: usize,

    /// Indices (into the `conditions` argument) of every condition that was
    /// satisfied when the run stopped.
    pub satisfied_conditions: Vec<usize>,

    /// Best fitness of each generation, starting with the initial one.
    pub fitness_history: Vec<f64>,

    /// Total wall-clock time of the run.
    pub elapsed: Duration,
}

impl<T> EvolutionResult<T> {
    /// The fittest candidate of the final population.
    pub fn fittest(&self) -> &T {
        self.population[0].candidate()
    }

    pub fn best_fitness(&self) -> f64 {
        self.population[0].fitness()
    }

    /// Consumes the result, returning the fittest candidate.
    pub fn into_fittest(self) -> T {
        let mut population = self.population;
        population.swap_remove(0).into_candidate()
    }
}

/// A generational evolutionary algorithm assembled from pluggable strategies.
///
/// - `F`: creates the initial population
/// - `O`: turns selected parents into offspring (usually an
///   [`EvolutionPipeline`](crate::operators::EvolutionPipeline))
/// - `E`: scores candidates and fixes the fitness direction
/// - `S`: picks parents from the sorted population
///
/// # Example
///
/// ```
/// use u_evolve::factory::StringFactory;
/// use u_evolve::operators::{CrossoverOperator, EvolutionPipeline, StringCrossover, StringMutation};
/// use u_evolve::selection::TournamentSelection;
/// use u_evolve::termination::{GenerationCount, TargetFitness, TerminationCondition};
/// use u_evolve::{EngineConfig, EvolutionEngine, FnEvaluator};
///
/// let pipeline: EvolutionPipeline<String> = EvolutionPipeline::new(vec![
///     Box::new(CrossoverOperator::new(StringCrossover, 1usize)),
///     Box::new(StringMutation::new("AB", 0.05).unwrap()),
/// ])
/// .unwrap();
///
/// let engine = EvolutionEngine::new(
///     StringFactory::new("AB", 8).unwrap(),
///     pipeline,
///     FnEvaluator::natural(|s: &String| s.chars().filter(|&c| c == 'A').count() as f64),
///     TournamentSelection::new(0.8).unwrap(),
/// )
/// .with_config(EngineConfig::default().with_seed(42));
///
/// let conditions: Vec<Box<dyn TerminationCondition>> = vec![
///     Box::new(TargetFitness::new(8.0, true)),
///     Box::new(GenerationCount(200)),
/// ];
/// let result = engine.evolve(20, 2, Vec::new(), &conditions).unwrap();
/// assert_eq!(result.population.len(), 20);
/// assert!(result.best_fitness() <= 8.0);
/// ```
pub struct EvolutionEngine<T, F, O, E, S> {
    factory: F,
    operator: O,
    evaluator: E,
    selection: S,
    observers: Vec<Box<dyn EvolutionObserver<T>>>,
    config: EngineConfig,
}

impl<T, F, O, E, S> EvolutionEngine<T, F, O, E, S>
where
    T: Clone + Send + Sync,
    F: CandidateFactory<T>,
    O: EvolutionaryOperator<T>,
    E: FitnessEvaluator<T>,
    S: SelectionStrategy<T>,
{
    /// Creates an engine with the default [`EngineConfig`].
    pub fn new(factory: F, operator: O, evaluator: E, selection: S) -> Self {
        Self {
            factory,
            operator,
            evaluator,
            selection,
            observers: Vec::new(),
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registers an observer, notified after every generation in
    /// registration order.
    pub fn add_observer(&mut self, observer: impl EvolutionObserver<T> + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Builder form of [`add_observer`](Self::add_observer).
    pub fn with_observer(mut self, observer: impl EvolutionObserver<T> + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    /// Runs until any of `conditions` is satisfied.
    ///
    /// The random source is seeded from [`EngineConfig::seed`], or from a
    /// fresh seed when none is configured. `seeds` are placed at the start of
    /// the initial population; the rest is generated by the factory.
    ///
    /// # Errors
    /// - Configuration errors (`population_size == 0`,
    ///   `elite_count >= population_size`, no conditions, too many seeds, an
    ///   odd number of offspring for a pairing operator) fail before the
    ///   first generation.
    /// - Operator contract violations and evaluation failures abort the run;
    ///   the failure carries the last fully-evaluated population.
    pub fn evolve(
        &self,
        population_size: usize,
        elite_count: usize,
        seeds: Vec<T>,
        conditions: &[Box<dyn TerminationCondition>],
    ) -> Result<EvolutionResult<T>, EvolutionFailure<T>> {
        let seed = self.config.seed.unwrap_or_else(random_seed);
        let mut rng = create_rng(seed);
        debug!(seed, "seeded random source");
        self.evolve_with_rng(population_size, elite_count, seeds, conditions, &mut rng)
    }

    /// Like [`evolve`](Self::evolve), drawing all randomness from `rng`.
    ///
    /// [`EngineConfig::seed`] is ignored.
    pub fn evolve_with_rng(
        &self,
        population_size: usize,
        elite_count: usize,
        seeds: Vec<T>,
        conditions: &[Box<dyn TerminationCondition>],
        rng: &mut dyn RngCore,
    ) -> Result<EvolutionResult<T>, EvolutionFailure<T>> {
        self.config.validate().map_err(EvolutionFailure::before_start)?;
        validate_run(
            population_size,
            elite_count,
            conditions.len(),
            self.operator.requires_even_input(),
        )
        .map_err(EvolutionFailure::before_start)?;

        let scorer =
            Scorer::new(&self.evaluator, &self.config).map_err(EvolutionFailure::before_start)?;
        let natural = self.evaluator.is_natural();
        let start = Instant::now();

        info!(
            population_size,
            elite_count,
            conditions = conditions.len(),
            natural,
            parallel = self.config.parallel,
            "starting evolution"
        );

        let initial = self
            .factory
            .generate_seeded_population(population_size, seeds, rng)
            .map_err(EvolutionFailure::before_start)?;
        let mut population = scorer.score(initial).map_err(|error| {
            warn!(%error, "initial population could not be evaluated");
            EvolutionFailure::before_start(error)
        })?;

        let mut generation = 0;
        let mut best_fitness = population[0].fitness();
        let mut generations_since_improvement = 0;
        let mut fitness_history = vec![best_fitness];

        loop {
            let stats = GenerationStats::compute(
                &population,
                generation,
                start.elapsed(),
                elite_count,
                generations_since_improvement,
                natural,
            );
            debug!(
                generation,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                worst = stats.worst_fitness,
                std_dev = stats.fitness_std_dev,
                elapsed_ms = stats.elapsed.as_millis() as u64,
                "generation complete"
            );
            self.notify_observers(&stats, population[0].candidate());

            let satisfied: Vec<usize> = conditions
                .iter()
                .enumerate()
                .filter(|(_, condition)| condition.should_terminate(&stats))
                .map(|(index, _)| index)
                .collect();
            if !satisfied.is_empty() {
                info!(
                    generations = generation,
                    best = stats.best_fitness,
                    satisfied = ?satisfied,
                    elapsed_ms = stats.elapsed.as_millis() as u64,
                    "evolution finished"
                );
                return Ok(EvolutionResult {
                    population,
                    generations: generation,
                    satisfied_conditions: satisfied,
                    fitness_history,
                    elapsed: start.elapsed(),
                });
            }

            match self.breed(&population, elite_count, natural, &scorer, rng) {
                Ok(next) => population = next,
                Err(error) => {
                    warn!(generation, %error, "evolution aborted");
                    return Err(EvolutionFailure {
                        error,
                        generation,
                        last_population: population,
                    });
                }
            }
            generation += 1;

            let generation_best = population[0].fitness();
            if is_fitter(generation_best, best_fitness, natural) {
                best_fitness = generation_best;
                generations_since_improvement = 0;
            } else {
                generations_since_improvement += 1;
            }
            fitness_history.push(generation_best);
        }
    }

    /// Produces the next evaluated generation: elites first, then offspring.
    fn breed(
        &self,
        population: &[EvaluatedCandidate<T>],
        elite_count: usize,
        natural: bool,
        scorer: &Scorer<'_, E>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<EvaluatedCandidate<T>>, EvolutionError> {
        let offspring_count = population.len() - elite_count;

        let parents = self
            .selection
            .select(population, natural, offspring_count, rng);
        check_size(
            short_type_name(std::any::type_name::<S>()),
            offspring_count,
            parents.len(),
        )?;

        let offspring = self.operator.apply(&parents, rng)?;
        check_size(self.operator.name(), parents.len(), offspring.len())?;

        let mut next = Vec::with_capacity(population.len());
        next.extend(
            population[..elite_count]
                .iter()
                .map(|elite| elite.candidate().clone()),
        );
        next.extend(offspring);
        scorer.score(next)
    }

    /// Notifies every observer, isolating errors and panics.
    fn notify_observers(&self, stats: &GenerationStats, fittest: &T) {
        let data = PopulationData { stats, fittest };
        for (index, observer) in self.observers.iter().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| observer.population_update(&data)));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    warn!(observer = index, generation = stats.generation, %error, "observer failed");
                }
                Err(_) => {
                    warn!(observer = index, generation = stats.generation, "observer panicked");
                }
            }
        }
    }
}

/// Evaluates generations, on a dedicated pool when one is configured.
struct Scorer<'a, E> {
    evaluator: &'a E,
    parallel: bool,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl<'a, E> Scorer<'a, E> {
    fn new(evaluator: &'a E, config: &EngineConfig) -> Result<Self, EvolutionError> {
        #[cfg(feature = "parallel")]
        let pool = match (config.parallel, config.num_threads) {
            (true, Some(n)) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| EvolutionError::config(format!("thread pool: {e}")))?,
            ),
            _ => None,
        };

        Ok(Self {
            evaluator,
            parallel: config.parallel,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    fn score<T>(&self, candidates: Vec<T>) -> Result<Vec<EvaluatedCandidate<T>>, EvolutionError>
    where
        T: Send + Sync,
        E: FitnessEvaluator<T>,
    {
        #[cfg(feature = "parallel")]
        if let Some(pool) = &self.pool {
            return pool.install(|| evaluate_population(self.evaluator, candidates, true));
        }
        evaluate_population(self.evaluator, candidates, self.parallel)
    }
}
