//! Termination conditions.
//!
//! The engine checks every condition after each completed generation
//! (including the initial one) and stops as soon as any of them is
//! satisfied. All satisfied conditions are reported in the run result.
//!
//! # Provided Conditions
//!
//! - [`GenerationCount`]: fixed number of breeding generations
//! - [`TargetFitness`]: best score reaches a target
//! - [`ElapsedTime`]: wall-clock budget
//! - [`Stagnation`]: no improvement for a number of generations
//! - [`UserAbort`]: external cancellation through a shared flag

mod abort;
mod conditions;

pub use abort::UserAbort;
pub use conditions::{ElapsedTime, GenerationCount, Stagnation, TargetFitness};

use crate::candidate::GenerationStats;
use std::fmt::Debug;

/// Decides when a run should stop.
///
/// Conditions see only the statistics of the latest generation and must not
/// mutate engine state.
pub trait TerminationCondition: Debug + Send + Sync {
    /// `true` if the run should stop after the generation described by
    /// `stats`.
    fn should_terminate(&self, stats: &GenerationStats) -> bool;
}

impl<C> TerminationCondition for Box<C>
where
    C: TerminationCondition + ?Sized,
{
    fn should_terminate(&self, stats: &GenerationStats) -> bool {
        (**self).should_terminate(stats)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::candidate::GenerationStats;
    use std::time::Duration;

    pub fn stats(generation: usize, best_fitness: f64) -> GenerationStats {
        GenerationStats {
            generation,
            elapsed: Duration::ZERO,
            best_fitness,
            mean_fitness: best_fitness,
            worst_fitness: best_fitness,
            fitness_std_dev: 0.0,
            population_size: 10,
            elite_count: 0,
            generations_since_improvement: 0,
            natural_fitness: true,
        }
    }
}
