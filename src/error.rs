//! Error types for the evolution engine.
//!
//! Configuration problems are reported before any generation runs.
//! Failures during a run abort it and are wrapped in [`EvolutionFailure`],
//! which keeps the last fully-evaluated population for diagnostics.

use crate::candidate::EvaluatedCandidate;
use std::fmt;
use thiserror::Error;

/// Boxed error type returned by pluggable strategies (fitness evaluators,
/// observers).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by the engine and its strategies.
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// An invalid parameter was supplied before a run started.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A plugged-in operator changed the population size.
    #[error("operator `{operator}` returned {actual} candidates for an input of {expected}")]
    OperatorContract {
        /// Name of the offending operator.
        operator: String,
        /// Number of candidates handed to the operator.
        expected: usize,
        /// Number of candidates it returned.
        actual: usize,
    },

    /// The fitness evaluator failed or produced a non-finite score.
    #[error("fitness evaluation failed for candidate {index}: {source}")]
    Evaluation {
        /// Position of the candidate in the unevaluated generation.
        index: usize,
        /// Underlying evaluator error.
        #[source]
        source: BoxError,
    },
}

impl EvolutionError {
    /// Shorthand for [`EvolutionError::Configuration`].
    pub fn config(message: impl Into<String>) -> Self {
        EvolutionError::Configuration(message.into())
    }
}

/// A run that was aborted, together with the state it reached.
///
/// Configuration errors produce a failure with `generation == 0` and an
/// empty `last_population`.
#[derive(Debug)]
pub struct EvolutionFailure<T> {
    /// The error that aborted the run.
    pub error: EvolutionError,

    /// Generation number of `last_population`.
    pub generation: usize,

    /// The last fully-evaluated population, fittest first.
    pub last_population: Vec<EvaluatedCandidate<T>>,
}

impl<T> EvolutionFailure<T> {
    pub(crate) fn before_start(error: EvolutionError) -> Self {
        Self {
            error,
            generation: 0,
            last_population: Vec::new(),
        }
    }

    /// Returns `true` if the run never got past validation.
    pub fn is_configuration(&self) -> bool {
        matches!(self.error, EvolutionError::Configuration(_))
    }
}

impl<T> fmt::Display for EvolutionFailure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "evolution aborted at generation {}: {}",
            self.generation, self.error
        )
    }
}

impl<T: fmt::Debug> std::error::Error for EvolutionFailure<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<EvolutionFailure<T>> for EvolutionError {
    fn from(failure: EvolutionFailure<T>) -> Self {
        failure.error
    }
}
