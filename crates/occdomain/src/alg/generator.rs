//! Quadratic generators α of the coefficient ring Q(α).
//!
//! A generator is fixed by its minimal polynomial `α² = S·α + T`; every
//! product in `Alg<G>` is reduced with that rule. The two instances used by
//! the lattices are the golden ratio τ (icosahedral) and √3 (dodecagonal).

use std::fmt::Debug;
use std::hash::Hash;

/// Quadratic irrational `α` with `α² = S·α + T` and `α > 0`.
///
/// Invariants:
/// - The discriminant `S² + 4T` is a positive non-square, so `{1, α}` is a
///   basis of Q(α) over Q and the canonical form of `Alg<G>` is unique.
pub trait Generator:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Linear coefficient of the minimal polynomial.
    const S: i128;
    /// Constant coefficient of the minimal polynomial.
    const T: i128;
    /// Symbol used by `Display`.
    const SYMBOL: &'static str;

    /// Real value ᾱ used for float evaluation.
    fn value() -> f64;

    /// Discriminant `S² + 4T`; `α = (S + √D) / 2`.
    #[inline]
    fn discriminant() -> i128 {
        Self::S * Self::S + 4 * Self::T
    }
}

/// Golden ratio τ = (1+√5)/2, τ² = τ + 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Golden;

impl Generator for Golden {
    const S: i128 = 1;
    const T: i128 = 1;
    const SYMBOL: &'static str = "τ";

    #[inline]
    fn value() -> f64 {
        (1.0 + 5f64.sqrt()) / 2.0
    }
}

/// √3, α² = 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sqrt3;

impl Generator for Sqrt3 {
    const S: i128 = 0;
    const T: i128 = 3;
    const SYMBOL: &'static str = "√3";

    #[inline]
    fn value() -> f64 {
        3f64.sqrt()
    }
}
