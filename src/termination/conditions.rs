//! Conditions computed from generation statistics.

use super::TerminationCondition;
use crate::candidate::{is_fitter, GenerationStats};
use std::time::Duration;

/// Stops once `n` breeding generations have completed.
///
/// `GenerationCount(0)` stops right after the initial population has been
/// evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationCount(pub usize);

impl TerminationCondition for GenerationCount {
    fn should_terminate(&self, stats: &GenerationStats) -> bool {
        stats.generation >= self.0
    }
}

/// Stops once the best score is at least as fit as `target`.
///
/// `natural` must match the evaluator: with natural fitness the target is
/// reached when `best >= target`, with inverted fitness when `best <= target`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetFitness {
    pub target: f64,
    pub natural: bool,
}

impl TargetFitness {
    pub fn new(target: f64, natural: bool) -> Self {
        Self { target, natural }
    }
}

impl TerminationCondition for TargetFitness {
    fn should_terminate(&self, stats: &GenerationStats) -> bool {
        !is_fitter(self.target, stats.best_fitness, self.natural)
    }
}

/// Stops once the run has used up a wall-clock budget.
///
/// Checked between generations, so a run may overshoot by up to one
/// generation's worth of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElapsedTime(pub Duration);

impl TerminationCondition for ElapsedTime {
    fn should_terminate(&self, stats: &GenerationStats) -> bool {
        stats.elapsed >= self.0
    }
}

/// Stops when the best fitness has not strictly improved for `generations`
/// consecutive generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stagnation {
    pub generations: usize,
}

impl Stagnation {
    pub fn new(generations: usize) -> Self {
        Self { generations }
    }
}

impl TerminationCondition for Stagnation {
    fn should_terminate(&self, stats: &GenerationStats) -> bool {
        self.generations > 0 && stats.generations_since_improvement >= self.generations
    }
}
