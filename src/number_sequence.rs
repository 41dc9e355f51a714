//! Parameter streams for operators.
//!
//! A [`NumberSequence`] supplies one value per invocation, either a constant
//! or a sample from a distribution. Operators that need a per-call parameter
//! (crossover points, mutation counts) draw it from a sequence instead of
//! hard-coding an arity.

use crate::error::EvolutionError;
use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};
use rand::RngCore;
use std::fmt;
use std::sync::Arc;

type Sampler<N> = Arc<dyn Fn(&mut dyn RngCore) -> N + Send + Sync>;

/// A constant or randomized stream of parameter values.
///
/// # Examples
///
/// ```
/// use u_evolve::NumberSequence;
/// use u_evolve::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let points = NumberSequence::constant(2usize);
/// assert_eq!(points.next(&mut rng), 2);
///
/// let varying = NumberSequence::uniform(1usize, 3).unwrap();
/// let v = varying.next(&mut rng);
/// assert!((1..=3).contains(&v));
/// ```
#[derive(Clone)]
pub enum NumberSequence<N> {
    /// Always yields the same value. Consumes no randomness.
    Constant(N),

    /// Yields a fresh sample from a distribution on every call.
    Sampled(Sampler<N>),
}

impl<N: Copy> NumberSequence<N> {
    /// A sequence that always yields `value`.
    pub fn constant(value: N) -> Self {
        NumberSequence::Constant(value)
    }

    /// A sequence sampling from an arbitrary distribution.
    pub fn sampled<D>(distribution: D) -> Self
    where
        D: Distribution<N> + Send + Sync + 'static,
    {
        NumberSequence::Sampled(Arc::new(move |rng: &mut dyn RngCore| {
            distribution.sample(rng)
        }))
    }

    /// Returns the next value of the sequence.
    pub fn next(&self, rng: &mut dyn RngCore) -> N {
        match self {
            NumberSequence::Constant(value) => *value,
            NumberSequence::Sampled(sample) => sample(rng),
        }
    }
}

impl<N> NumberSequence<N>
where
    N: SampleUniform + Copy + Send + Sync + 'static,
    N::Sampler: Send + Sync,
{
    /// A sequence drawn uniformly from the inclusive range `low..=high`.
    pub fn uniform(low: N, high: N) -> Result<Self, EvolutionError> {
        let distribution = Uniform::new_inclusive(low, high)
            .map_err(|e| EvolutionError::config(format!("invalid uniform range: {e}")))?;
        Ok(Self::sampled(distribution))
    }
}

impl<N: fmt::Debug> fmt::Debug for NumberSequence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberSequence::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            NumberSequence::Sampled(_) => f.write_str("Sampled(..)"),
        }
    }
}

impl<N: Copy> From<N> for NumberSequence<N> {
    fn from(value: N) -> Self {
        NumberSequence::Constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::Rng;

    #[test]
    fn test_constant_consumes_no_randomness() {
        let seq = NumberSequence::constant(3usize);
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..10 {
            assert_eq!(seq.next(&mut a), 3);
        }
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let seq = NumberSequence::uniform(1usize, 4).unwrap();
        let mut rng = create_rng(42);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            let v = seq.next(&mut rng);
            assert!((1..=4).contains(&v));
            seen[v] = true;
        }
        assert!(seen[1..].iter().all(|&s| s), "all values should occur: {seen:?}");
    }

    #[test]
    fn test_uniform_rejects_inverted_range() {
        assert!(NumberSequence::uniform(5usize, 1).is_err());
    }

    #[test]
    fn test_sampled_is_reproducible() {
        let seq = NumberSequence::uniform(0.0f64, 1.0).unwrap();
        let xs: Vec<f64> = {
            let mut rng = create_rng(9);
            (0..5).map(|_| seq.next(&mut rng)).collect()
        };
        let ys: Vec<f64> = {
            let mut rng = create_rng(9);
            (0..5).map(|_| seq.next(&mut rng)).collect()
        };
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_from_value() {
        let seq: NumberSequence<usize> = 2.into();
        assert!(matches!(seq, NumberSequence::Constant(2)));
        assert_eq!(format!("{seq:?}"), "Constant(2)");
    }
}
