//! Operators for fixed-length string candidates.

use super::crossover::Crossover;
use super::types::EvolutionaryOperator;
use crate::error::EvolutionError;
use rand::{Rng, RngCore};

/// Multi-point crossover for equal-length strings.
///
/// For each crossover point a cut index in `1..len` is drawn and everything
/// from the cut onwards is exchanged between the two children. Always
/// yields two children.
///
/// # Panics
/// Panics if the parents differ in length (in characters).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCrossover;

impl Crossover<String> for StringCrossover {
    fn reproduce(
        &self,
        parent1: &String,
        parent2: &String,
        crossover_points: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<String> {
        let mut child1: Vec<char> = parent1.chars().collect();
        let mut child2: Vec<char> = parent2.chars().collect();
        assert_eq!(
            child1.len(),
            child2.len(),
            "cannot cross over strings of different lengths"
        );

        let len = child1.len();
        if len >= 2 {
            for _ in 0..crossover_points {
                let cut = rng.random_range(1..len);
                child1[cut..].swap_with_slice(&mut child2[cut..]);
            }
        }

        vec![child1.into_iter().collect(), child2.into_iter().collect()]
    }
}

/// Per-character mutation for strings.
///
/// Each character is independently replaced, with probability
/// `mutation_probability`, by a character drawn uniformly from the alphabet
/// (which may be the same character).
#[derive(Debug, Clone)]
pub struct StringMutation {
    alphabet: Vec<char>,
    mutation_probability: f64,
}

impl StringMutation {
    /// # Errors
    /// [`EvolutionError::Configuration`] if the alphabet is empty or the
    /// probability is outside `[0, 1]`.
    pub fn new(alphabet: &str, mutation_probability: f64) -> Result<Self, EvolutionError> {
        let alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(EvolutionError::config("alphabet must not be empty"));
        }
        if !(0.0..=1.0).contains(&mutation_probability) {
            return Err(EvolutionError::config(format!(
                "mutation probability must be in [0, 1], got {mutation_probability}"
            )));
        }
        Ok(Self {
            alphabet,
            mutation_probability,
        })
    }

    fn mutate(&self, candidate: &str, rng: &mut dyn RngCore) -> String {
        candidate
            .chars()
            .map(|c| {
                if rng.random_bool(self.mutation_probability) {
                    self.alphabet[rng.random_range(0..self.alphabet.len())]
                } else {
                    c
                }
            })
            .collect()
    }
}

impl EvolutionaryOperator<String> for StringMutation {
    fn apply(
        &self,
        selected: &[String],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, EvolutionError> {
        Ok(selected.iter().map(|s| self.mutate(s, rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::CrossoverOperator;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn letter_counts(strings: &[String]) -> (usize, usize) {
        let joined: String = strings.concat();
        (
            joined.chars().filter(|&c| c == 'A').count(),
            joined.chars().filter(|&c| c == 'B').count(),
        )
    }

    #[test]
    fn test_crossover_preserves_material_per_position() {
        let mut rng = create_rng(42);
        let p1 = "AAAAAAAA".to_string();
        let p2 = "BBBBBBBB".to_string();
        for points in 0..4 {
            let children = StringCrossover.reproduce(&p1, &p2, points, &mut rng);
            assert_eq!(children.len(), 2);
            let a: Vec<char> = children[0].chars().collect();
            let b: Vec<char> = children[1].chars().collect();
            for i in 0..8 {
                assert_ne!(a[i], b[i], "position {i} must hold one char from each parent");
            }
            assert_eq!(a[0], 'A', "index 0 is never exchanged");
        }
    }

    #[test]
    fn test_zero_points_clones_parents() {
        let mut rng = create_rng(42);
        let children =
            StringCrossover.reproduce(&"ABAB".to_string(), &"BBBB".to_string(), 0, &mut rng);
        assert_eq!(children, vec!["ABAB".to_string(), "BBBB".to_string()]);
    }

    #[test]
    fn test_single_char_strings() {
        let mut rng = create_rng(42);
        let children = StringCrossover.reproduce(&"A".to_string(), &"B".to_string(), 3, &mut rng);
        assert_eq!(children, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    #[should_panic(expected = "different lengths")]
    fn test_mismatched_lengths_panic() {
        let mut rng = create_rng(42);
        StringCrossover.reproduce(&"AA".to_string(), &"B".to_string(), 1, &mut rng);
    }

    #[test]
    fn test_mutation_probability_zero_is_identity() {
        let op = StringMutation::new("XYZ", 0.0).unwrap();
        let input = vec!["AAAA".to_string(), "BBBB".to_string()];
        let out = op.apply(&input, &mut create_rng(42)).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_mutation_probability_one_uses_alphabet() {
        let op = StringMutation::new("XY", 1.0).unwrap();
        let input = vec!["AAAAAAAAAA".to_string(); 4];
        let out = op.apply(&input, &mut create_rng(42)).unwrap();
        for s in &out {
            assert_eq!(s.len(), 10);
            assert!(s.chars().all(|c| c == 'X' || c == 'Y'));
        }
    }

    #[test]
    fn test_mutation_rate_roughly_matches() {
        let op = StringMutation::new("B", 0.1).unwrap();
        let input = vec!["A".repeat(100); 100];
        let out = op.apply(&input, &mut create_rng(42)).unwrap();
        let (_, mutated) = letter_counts(&out);
        assert!(
            (700..1300).contains(&mutated),
            "expected about 1000 mutated chars, got {mutated}"
        );
    }

    #[test]
    fn test_mutation_rejects_bad_config() {
        assert!(StringMutation::new("", 0.1).is_err());
        assert!(StringMutation::new("AB", -0.1).is_err());
        assert!(StringMutation::new("AB", 1.1).is_err());
    }

    proptest! {
        #[test]
        fn prop_string_operators_preserve_size(
            pairs in 0usize..20,
            len in 1usize..12,
            points in 0usize..4,
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let input: Vec<String> = (0..pairs * 2)
                .map(|i| if i % 2 == 0 { "A".repeat(len) } else { "B".repeat(len) })
                .collect();

            let crossover = CrossoverOperator::new(StringCrossover, points);
            let out = crossover.apply(&input, &mut rng).unwrap();
            prop_assert_eq!(out.len(), input.len());
            prop_assert_eq!(letter_counts(&out), letter_counts(&input));

            let mutation = StringMutation::new("AB", 0.3).unwrap();
            let mutated = mutation.apply(&out, &mut rng).unwrap();
            prop_assert_eq!(mutated.len(), input.len());
            prop_assert!(mutated.iter().all(|s| s.len() == len));
        }
    }
}
