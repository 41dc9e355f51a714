//! Domain-agnostic evolutionary computation engine.
//!
//! A run is assembled from pluggable strategies:
//!
//! - **Candidate factory** ([`factory`]): creates the random initial
//!   population, optionally seeded with known candidates.
//! - **Evolutionary operators** ([`operators`]): size-preserving transforms
//!   from selected parents to offspring, composed into pipelines
//!   (crossover, mutation, identity).
//! - **Fitness evaluator** ([`FitnessEvaluator`]): scores a candidate,
//!   with read-only access to its generation, and fixes the fitness
//!   direction (natural = higher is better, inverted = lower is better).
//! - **Selection strategies** ([`selection`]): truncation, roulette wheel,
//!   stochastic universal sampling, tournament, rank and sigma scaling.
//! - **Termination conditions** ([`termination`]) and **observers**
//!   ([`observer`]): when to stop and who gets notified per generation.
//!
//! [`EvolutionEngine`] runs the generational loop with elitism and optional
//! parallel fitness evaluation (feature `parallel`, on by default). All
//! randomness flows through one explicitly passed source, so a seeded run is
//! fully reproducible.
//!
//! # Example
//!
//! ```
//! use u_evolve::factory::StringFactory;
//! use u_evolve::operators::IdentityOperator;
//! use u_evolve::selection::TruncationSelection;
//! use u_evolve::termination::{GenerationCount, TerminationCondition};
//! use u_evolve::{EngineConfig, EvolutionEngine, FnEvaluator};
//!
//! let engine = EvolutionEngine::new(
//!     StringFactory::new("AB", 5).unwrap(),
//!     IdentityOperator,
//!     FnEvaluator::natural(|s: &String| s.matches('A').count() as f64),
//!     TruncationSelection::new(0.5).unwrap(),
//! )
//! .with_config(EngineConfig::default().with_seed(42));
//!
//! let stop: Vec<Box<dyn TerminationCondition>> = vec![Box::new(GenerationCount(5))];
//! let result = engine.evolve(10, 0, Vec::new(), &stop).unwrap();
//! assert_eq!(result.generations, 5);
//! assert_eq!(result.population.len(), 10);
//! ```

mod candidate;
pub mod engine;
mod error;
mod evaluation;
pub mod factory;
mod number_sequence;
pub mod observer;
pub mod operators;
pub mod random;
pub mod selection;
pub mod termination;

pub use candidate::{compare_fitness, is_fitter, sort_population, EvaluatedCandidate, GenerationStats};
pub use engine::{EngineConfig, EvolutionEngine, EvolutionResult};
pub use error::{BoxError, EvolutionError, EvolutionFailure};
pub use evaluation::{FitnessEvaluator, FnEvaluator};
pub use number_sequence::NumberSequence;
pub use observer::{EvolutionObserver, PopulationData};
