//! Evolutionary operators.
//!
//! An [`EvolutionaryOperator`] turns the selected parents into the same
//! number of offspring. Operators compose with [`EvolutionPipeline`], which
//! feeds each stage's full output into the next.
//!
//! # Core Traits
//!
//! - [`EvolutionaryOperator`]: size-preserving population transform
//! - [`Crossover`]: pairwise recombination hook, driven by [`CrossoverOperator`]
//!
//! # Provided Operators
//!
//! - [`IdentityOperator`]: passes candidates through unchanged
//! - [`StringCrossover`], [`StringMutation`]: fixed-length strings
//! - [`ListOrderCrossover`] (OX), [`PartiallyMappedCrossover`] (PMX),
//!   [`PermutationMutation`]: permutations of `0..n`
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod crossover;
mod permutation;
mod pipeline;
mod string;
mod types;

pub use crossover::{Crossover, CrossoverOperator};
pub use permutation::{ListOrderCrossover, PartiallyMappedCrossover, PermutationMove, PermutationMutation};
pub use pipeline::EvolutionPipeline;
pub use string::{StringCrossover, StringMutation};
pub use types::{EvolutionaryOperator, IdentityOperator};

pub(crate) use types::{check_size, short_type_name};
