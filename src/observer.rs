//! Progress observers.
//!
//! Observers are notified once per completed generation, starting with the
//! initial population. A failing or panicking observer is logged and
//! skipped; it never aborts the run.

use crate::candidate::GenerationStats;
use crate::error::BoxError;

/// Snapshot handed to observers after each generation.
#[derive(Debug, Clone, Copy)]
pub struct PopulationData<'a, T> {
    /// Statistics of the generation.
    pub stats: &'a GenerationStats,

    /// The fittest candidate of the generation.
    pub fittest: &'a T,
}

/// Receives a [`PopulationData`] snapshot after every generation.
///
/// ```
/// use u_evolve::{BoxError, EvolutionObserver, PopulationData};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct BestHistory(Mutex<Vec<f64>>);
///
/// impl EvolutionObserver<String> for BestHistory {
///     fn population_update(&self, data: &PopulationData<'_, String>) -> Result<(), BoxError> {
///         self.0.lock().map_err(|e| e.to_string())?.push(data.stats.best_fitness);
///         Ok(())
///     }
/// }
/// ```
pub trait EvolutionObserver<T>: Send + Sync {
    fn population_update(&self, data: &PopulationData<'_, T>) -> Result<(), BoxError>;
}

/// Wraps a closure as an observer.
///
/// ```
/// use u_evolve::observer::FnObserver;
///
/// let observer = FnObserver::new(|data: &u_evolve::PopulationData<'_, String>| {
///     println!("generation {}: {}", data.stats.generation, data.fittest);
/// });
/// # let _ = observer;
/// ```
#[derive(Debug, Clone)]
pub struct FnObserver<F> {
    function: F,
}

impl<F> FnObserver<F> {
    pub fn new<T>(function: F) -> Self
    where
        F: Fn(&PopulationData<'_, T>) + Send + Sync,
    {
        Self { function }
    }
}

impl<T, F> EvolutionObserver<T> for FnObserver<F>
where
    F: Fn(&PopulationData<'_, T>) + Send + Sync,
{
    fn population_update(&self, data: &PopulationData<'_, T>) -> Result<(), BoxError> {
        (self.function)(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::test_support::stats;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fn_observer_called() {
        let calls = AtomicUsize::new(0);
        let observer = FnObserver::new(|data: &PopulationData<'_, u32>| {
            assert_eq!(*data.fittest, 7);
            calls.fetch_add(1, Ordering::Relaxed);
        });
        let s = stats(2, 3.0);
        let data = PopulationData {
            stats: &s,
            fittest: &7u32,
        };
        observer.population_update(&data).unwrap();
        observer.population_update(&data).unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }
}
