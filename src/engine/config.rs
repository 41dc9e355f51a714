//! Engine configuration.
//!
//! [`EngineConfig`] holds the settings that apply to every run of an engine.
//! Per-run parameters (population size, elite count, seed candidates,
//! termination conditions) are arguments to
//! [`EvolutionEngine::evolve`](super::EvolutionEngine::evolve).

use crate::error::EvolutionError;

/// Run-independent engine settings.
///
/// # Defaults
///
/// ```
/// use u_evolve::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.parallel);
/// assert!(config.seed.is_none());
/// assert!(config.num_threads.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_parallel(false)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Ignored when the crate is built without the `parallel` feature.
    /// Results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Size of a dedicated thread pool for parallel evaluation.
    ///
    /// `None` uses rayon's global pool.
    pub num_threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            seed: None,
            num_threads: None,
        }
    }
}

impl EngineConfig {
    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Evaluates on a dedicated pool of `n` threads.
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`EvolutionError::Configuration`] if `num_threads` is `Some(0)`.
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if self.num_threads == Some(0) {
            return Err(EvolutionError::config(
                "num_threads must be positive or None",
            ));
        }
        Ok(())
    }
}

/// Checks the per-run parameters of `evolve`.
pub(crate) fn validate_run(
    population_size: usize,
    elite_count: usize,
    condition_count: usize,
    requires_even_input: bool,
) -> Result<(), EvolutionError> {
    if population_size == 0 {
        return Err(EvolutionError::config("population size must be positive"));
    }
    if elite_count >= population_size {
        return Err(EvolutionError::config(format!(
            "elite count ({elite_count}) must be less than the population size ({population_size})"
        )));
    }
    if condition_count == 0 {
        return Err(EvolutionError::config(
            "at least one termination condition is required",
        ));
    }
    let offspring = population_size - elite_count;
    if requires_even_input && offspring % 2 != 0 {
        return Err(EvolutionError::config(format!(
            "the operator pairs parents but {offspring} offspring are bred per generation; \
             adjust the population size or elite count to make it even"
        )));
    }
    Ok(())
}
