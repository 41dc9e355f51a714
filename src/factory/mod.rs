//! Candidate factories.
//!
//! A [`CandidateFactory`] creates the random initial population of a run.
//! Implementors only provide [`generate`](CandidateFactory::generate); the
//! population-level methods, including seeding with caller-supplied
//! candidates, come for free.
//!
//! # Provided Factories
//!
//! - [`StringFactory`]: fixed-length strings over an alphabet
//! - [`PermutationFactory`]: random permutations of `0..n`

mod permutation;
mod string;
mod types;

pub use permutation::PermutationFactory;
pub use string::StringFactory;
pub use types::CandidateFactory;
