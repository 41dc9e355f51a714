//! Sequential composition of operators.

use super::types::{check_size, EvolutionaryOperator};
use crate::error::EvolutionError;
use rand::RngCore;

/// Applies a list of operators in order, each stage consuming the full
/// output of the previous one.
///
/// ```
/// use u_evolve::operators::{
///     CrossoverOperator, EvolutionPipeline, EvolutionaryOperator, StringCrossover, StringMutation,
/// };
///
/// let pipeline: EvolutionPipeline<String> = EvolutionPipeline::new(vec![
///     Box::new(CrossoverOperator::new(StringCrossover, 1usize)),
///     Box::new(StringMutation::new("AB", 0.02).unwrap()),
/// ])
/// .unwrap();
/// assert!(pipeline.requires_even_input());
/// ```
pub struct EvolutionPipeline<T> {
    stages: Vec<Box<dyn EvolutionaryOperator<T>>>,
}

impl<T> EvolutionPipeline<T> {
    /// # Errors
    /// [`EvolutionError::Configuration`] if `stages` is empty.
    pub fn new(stages: Vec<Box<dyn EvolutionaryOperator<T>>>) -> Result<Self, EvolutionError> {
        if stages.is_empty() {
            return Err(EvolutionError::config(
                "pipeline must contain at least one operator",
            ));
        }
        Ok(Self { stages })
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<T> EvolutionaryOperator<T> for EvolutionPipeline<T> {
    fn apply(&self, selected: &[T], rng: &mut dyn RngCore) -> Result<Vec<T>, EvolutionError> {
        let expected = selected.len();
        let (first, rest) = match self.stages.split_first() {
            Some(split) => split,
            None => return Err(EvolutionError::config("empty pipeline")),
        };

        let mut population = first.apply(selected, rng)?;
        check_size(first.name(), expected, population.len())?;

        for stage in rest {
            population = stage.apply(&population, rng)?;
            check_size(stage.name(), expected, population.len())?;
        }
        Ok(population)
    }

    fn requires_even_input(&self) -> bool {
        self.stages.iter().any(|stage| stage.requires_even_input())
    }
}

impl<T> std::fmt::Debug for EvolutionPipeline<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.stages.iter().map(|stage| stage.name()))
            .finish()
    }
}
