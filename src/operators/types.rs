//! The operator contract.

use crate::error::EvolutionError;
use rand::RngCore;

/// Transforms the selected parents into offspring.
///
/// The output must have exactly as many candidates as the input; the engine
/// treats any other length as a fatal contract violation. Operators build new
/// candidates instead of modifying their input.
pub trait EvolutionaryOperator<T>: Send + Sync {
    /// Produces offspring from `selected`.
    fn apply(&self, selected: &[T], rng: &mut dyn RngCore) -> Result<Vec<T>, EvolutionError>;

    /// `true` if the operator pairs candidates and therefore needs an even
    /// input size. Checked by the engine before the run starts.
    fn requires_even_input(&self) -> bool {
        false
    }

    /// Short name used in error messages.
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<T, O> EvolutionaryOperator<T> for Box<O>
where
    O: EvolutionaryOperator<T> + ?Sized,
{
    fn apply(&self, selected: &[T], rng: &mut dyn RngCore) -> Result<Vec<T>, EvolutionError> {
        (**self).apply(selected, rng)
    }

    fn requires_even_input(&self) -> bool {
        (**self).requires_even_input()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Returns the candidates unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityOperator;

impl<T: Clone> EvolutionaryOperator<T> for IdentityOperator {
    fn apply(&self, selected: &[T], _rng: &mut dyn RngCore) -> Result<Vec<T>, EvolutionError> {
        Ok(selected.to_vec())
    }
}

/// Fails with [`EvolutionError::OperatorContract`] on a size mismatch.
pub(crate) fn check_size(
    operator: &str,
    expected: usize,
    actual: usize,
) -> Result<(), EvolutionError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EvolutionError::OperatorContract {
            operator: operator.to_string(),
            expected,
            actual,
        })
    }
}

/// `u_evolve::operators::string::StringCrossover` → `StringCrossover`.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_identity_preserves_input() {
        let mut rng = create_rng(42);
        let input = vec![1, 2, 3];
        let out = IdentityOperator.apply(&input[..], &mut rng).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_boxed_operator_delegates() {
        let op: Box<dyn EvolutionaryOperator<u8>> = Box::new(IdentityOperator);
        let out = op.apply(&[7u8, 8], &mut create_rng(1)).unwrap();
        assert_eq!(out, vec![7, 8]);
        assert!(!op.requires_even_input());
        assert_eq!(op.name(), "IdentityOperator");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("a::b::Foo"), "Foo");
        assert_eq!(short_type_name("a::Bar<x::Y>"), "Bar");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_check_size() {
        assert!(check_size("op", 4, 4).is_ok());
        let err = check_size("op", 4, 3).unwrap_err();
        assert!(matches!(
            err,
            EvolutionError::OperatorContract {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }
}
