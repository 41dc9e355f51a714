//! Fixed-length string candidates.

use super::types::CandidateFactory;
use crate::error::EvolutionError;
use rand::{Rng, RngCore};

/// Generates random strings of a fixed length over an alphabet.
///
/// Characters are drawn independently and uniformly, so a character may
/// repeat and some may not appear at all.
///
/// ```
/// use u_evolve::factory::{CandidateFactory, StringFactory};
/// use u_evolve::random::create_rng;
///
/// let factory = StringFactory::new("AB", 5).unwrap();
/// let s = factory.generate(&mut create_rng(42));
/// assert_eq!(s.len(), 5);
/// assert!(s.chars().all(|c| c == 'A' || c == 'B'));
/// ```
#[derive(Debug, Clone)]
pub struct StringFactory {
    alphabet: Vec<char>,
    length: usize,
}

impl StringFactory {
    /// # Errors
    /// [`EvolutionError::Configuration`] if the alphabet is empty.
    pub fn new(alphabet: &str, length: usize) -> Result<Self, EvolutionError> {
        let alphabet: Vec<char> = alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(EvolutionError::config("alphabet must not be empty"));
        }
        Ok(Self { alphabet, length })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl CandidateFactory<String> for StringFactory {
    fn generate(&self, rng: &mut dyn RngCore) -> String {
        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_length_and_alphabet() {
        let factory = StringFactory::new("ACGT", 12).unwrap();
        let mut rng = create_rng(42);
        let pop = factory.generate_initial_population(50, &mut rng).unwrap();
        for s in &pop {
            assert_eq!(s.chars().count(), 12);
            assert!(s.chars().all(|c| "ACGT".contains(c)));
        }
    }

    #[test]
    fn test_all_letters_used() {
        let factory = StringFactory::new("XYZ", 100).unwrap();
        let s = factory.generate(&mut create_rng(42));
        for c in ['X', 'Y', 'Z'] {
            assert!(s.contains(c), "expected {c} in {s}");
        }
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(StringFactory::new("", 4).is_err());
    }

    #[test]
    fn test_zero_length() {
        let factory = StringFactory::new("A", 0).unwrap();
        assert_eq!(factory.generate(&mut create_rng(1)), "");
    }
}
