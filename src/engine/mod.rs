//! The evolution engine.
//!
//! [`EvolutionEngine`] wires a [`CandidateFactory`](crate::factory::CandidateFactory),
//! an [`EvolutionaryOperator`](crate::operators::EvolutionaryOperator), a
//! [`FitnessEvaluator`](crate::FitnessEvaluator) and a
//! [`SelectionStrategy`](crate::selection::SelectionStrategy) into a
//! generational loop with optional elitism and parallel fitness evaluation.
//!
//! # Key Types
//!
//! - [`EngineConfig`]: run-independent settings (parallelism, seed)
//! - [`EvolutionEngine`]: executes runs
//! - [`EvolutionResult`]: final population and run statistics
//!
//! # Reproducibility
//!
//! All randomness comes from one sequential source per run, and fitness
//! evaluation never touches it. With the same configuration and seed, two
//! runs produce identical generations whether evaluation is parallel or not.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod runner;

pub use config::EngineConfig;
pub use runner::{EvolutionEngine, EvolutionResult};
