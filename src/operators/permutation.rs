//! Operators for permutation candidates (`Vec<usize>` holding `0..n`).
//!
//! These keep every child a valid permutation, which plain string-style
//! crossover would not.

use super::crossover::Crossover;
use super::types::EvolutionaryOperator;
use crate::error::EvolutionError;
use crate::number_sequence::NumberSequence;
use rand::{Rng, RngCore};

/// Order crossover (OX, Davis 1985).
///
/// Each child keeps a random segment of one parent in place and fills the
/// remaining slots with the other parent's genes in the order they appear
/// after the segment, preserving **relative order**. The segment is bounded
/// by two random cuts, so the requested number of crossover points is
/// ignored.
///
/// # Panics
/// Panics if the parents are not permutations of the same `0..n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOrderCrossover;

impl Crossover<Vec<usize>> for ListOrderCrossover {
    fn reproduce(
        &self,
        parent1: &Vec<usize>,
        parent2: &Vec<usize>,
        _crossover_points: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Vec<usize>> {
        assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
        if parent1.len() < 2 {
            return vec![parent1.clone(), parent2.clone()];
        }
        let (start, end) = random_segment(parent1.len(), rng);
        vec![
            order_child(parent1, parent2, start, end),
            order_child(parent2, parent1, start, end),
        ]
    }
}

/// Copies `template[start..=end]`, then fills the free slots (wrapping
/// from `end + 1`) with the unused genes of `donor`, read from `end + 1`.
fn order_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut kept = vec![false; n];
    for &gene in &template[start..=end] {
        kept[gene] = true;
    }

    let free_slots = (1..n).map(|k| (end + k) % n).filter(|&pos| pos < start || pos > end);
    let donor_genes = (1..=n)
        .map(|k| donor[(end + k) % n])
        .filter(|&gene| !kept[gene]);

    let mut child = template.to_vec();
    for (pos, gene) in free_slots.zip(donor_genes) {
        child[pos] = gene;
    }
    child
}

/// Partially mapped crossover (PMX, Goldberg & Lingle 1985).
///
/// Each child keeps a random segment of one parent in place; the other
/// slots take the second parent's gene at the same position, resolved
/// through the segment's gene mapping when it collides. Preserves
/// **absolute position** where possible. The requested number of crossover
/// points is ignored.
///
/// # Panics
/// Panics if the parents are not permutations of the same `0..n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartiallyMappedCrossover;

impl Crossover<Vec<usize>> for PartiallyMappedCrossover {
    fn reproduce(
        &self,
        parent1: &Vec<usize>,
        parent2: &Vec<usize>,
        _crossover_points: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Vec<usize>> {
        assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
        if parent1.len() < 2 {
            return vec![parent1.clone(), parent2.clone()];
        }
        let (start, end) = random_segment(parent1.len(), rng);
        vec![
            mapped_child(parent1, parent2, start, end),
            mapped_child(parent2, parent1, start, end),
        ]
    }
}

fn mapped_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut position = vec![0; n];
    for (i, &gene) in template.iter().enumerate() {
        position[gene] = i;
    }
    let in_segment = |gene: usize| (start..=end).contains(&position[gene]);

    let mut child = template.to_vec();
    for i in (0..start).chain(end + 1..n) {
        let mut gene = donor[i];
        while in_segment(gene) {
            gene = donor[position[gene]];
        }
        child[i] = gene;
    }
    child
}

/// A single permutation-preserving move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PermutationMove {
    /// Exchange two random positions.
    Swap,
    /// Remove a gene and reinsert it at a random position.
    Insert,
    /// Reverse a random segment (2-opt).
    Invert,
}

/// Applies a random number of [`PermutationMove`]s to every candidate.
///
/// The number of moves per candidate comes from a [`NumberSequence`], so it
/// may be constant or drawn per candidate (zero leaves the candidate
/// unchanged).
#[derive(Debug, Clone)]
pub struct PermutationMutation {
    kind: PermutationMove,
    moves: NumberSequence<usize>,
}

impl PermutationMutation {
    pub fn new(kind: PermutationMove, moves: impl Into<NumberSequence<usize>>) -> Self {
        Self {
            kind,
            moves: moves.into(),
        }
    }

    fn mutate(&self, candidate: &[usize], rng: &mut dyn RngCore) -> Vec<usize> {
        let mut perm = candidate.to_vec();
        let n = perm.len();
        if n < 2 {
            return perm;
        }
        for _ in 0..self.moves.next(rng) {
            match self.kind {
                PermutationMove::Swap => {
                    let i = rng.random_range(0..n);
                    let j = rng.random_range(0..n);
                    perm.swap(i, j);
                }
                PermutationMove::Insert => {
                    let gene = perm.remove(rng.random_range(0..n));
                    perm.insert(rng.random_range(0..n), gene);
                }
                PermutationMove::Invert => {
                    let (start, end) = random_segment(n, rng);
                    perm[start..=end].reverse();
                }
            }
        }
        perm
    }
}

impl EvolutionaryOperator<Vec<usize>> for PermutationMutation {
    fn apply(
        &self,
        selected: &[Vec<usize>],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vec<usize>>, EvolutionError> {
        Ok(selected.iter().map(|p| self.mutate(p, rng)).collect())
    }
}

/// Random inclusive segment `[start, end]` within `0..n`.
fn random_segment(n: usize, rng: &mut dyn RngCore) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    (a.min(b), a.max(b))
}
