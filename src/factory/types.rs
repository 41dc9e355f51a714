//! The candidate factory contract.

use crate::error::EvolutionError;
use rand::RngCore;

/// Creates random candidates of one representation.
///
/// All randomness must come from the `rng` argument so that a fixed seed
/// reproduces a fixed initial population.
pub trait CandidateFactory<T>: Send + Sync {
    /// Creates one random candidate.
    fn generate(&self, rng: &mut dyn RngCore) -> T;

    /// Creates `size` random candidates.
    ///
    /// # Errors
    /// [`EvolutionError::Configuration`] if `size == 0`.
    fn generate_initial_population(
        &self,
        size: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<T>, EvolutionError> {
        self.generate_seeded_population(size, Vec::new(), rng)
    }

    /// Creates a population of `size` that starts with `seeds` (in order)
    /// and is topped up with random candidates.
    ///
    /// # Errors
    /// [`EvolutionError::Configuration`] if `size == 0` or if there are more
    /// seeds than `size`.
    fn generate_seeded_population(
        &self,
        size: usize,
        seeds: Vec<T>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<T>, EvolutionError> {
        if size == 0 {
            return Err(EvolutionError::config("population size must be positive"));
        }
        if seeds.len() > size {
            return Err(EvolutionError::config(format!(
                "{} seed candidates exceed the population size of {size}",
                seeds.len()
            )));
        }

        let mut population = seeds;
        population.reserve(size - population.len());
        while population.len() < size {
            population.push(self.generate(rng));
        }
        Ok(population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::Rng;

    struct Digits;

    impl CandidateFactory<u8> for Digits {
        fn generate(&self, rng: &mut dyn RngCore) -> u8 {
            rng.random_range(0..10)
        }
    }

    #[test]
    fn test_initial_population_size() {
        let mut rng = create_rng(42);
        let pop = Digits.generate_initial_population(25, &mut rng).unwrap();
        assert_eq!(pop.len(), 25);
        assert!(pop.iter().all(|&d| d < 10));
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut rng = create_rng(42);
        let err = Digits.generate_initial_population(0, &mut rng).unwrap_err();
        assert!(matches!(err, EvolutionError::Configuration(_)));
    }

    #[test]
    fn test_seeds_come_first() {
        let mut rng = create_rng(42);
        let pop = Digits
            .generate_seeded_population(5, vec![42, 43], &mut rng)
            .unwrap();
        assert_eq!(pop.len(), 5);
        assert_eq!(&pop[..2], &[42, 43]);
        assert!(pop[2..].iter().all(|&d| d < 10));
    }

    #[test]
    fn test_seeds_fill_whole_population() {
        let mut rng = create_rng(42);
        let pop = Digits
            .generate_seeded_population(3, vec![11, 12, 13], &mut rng)
            .unwrap();
        assert_eq!(pop, vec![11, 12, 13]);
    }

    #[test]
    fn test_too_many_seeds_rejected() {
        let mut rng = create_rng(42);
        let err = Digits
            .generate_seeded_population(2, vec![1, 2, 3], &mut rng)
            .unwrap_err();
        assert!(matches!(err, EvolutionError::Configuration(_)));
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = Digits
            .generate_initial_population(50, &mut create_rng(1))
            .unwrap();
        let b = Digits
            .generate_initial_population(50, &mut create_rng(1))
            .unwrap();
        assert_eq!(a, b);
    }
}
