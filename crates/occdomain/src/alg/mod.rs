//! Exact arithmetic in Q(α) for lattice coordinates.
//!
//! Purpose
//! - Keep every vertex coordinate exact across arbitrarily many Boolean
//!   operations. Floats only appear through explicit `to_f64` calls.
//!
//! Layout
//! - `generator`: the quadratic generator α (`Golden`, `Sqrt3`).
//! - `value`: scalars `Alg<G>` in canonical `(p + qα)/r` form.
//! - `vector`: `AlgVec<G, N>`, `LatticeVector<G>`, `Exact3<G>`.
//! - `matrix`: exact `AlgMat<G, N>` and integer `IntMat6` lattice maps.

pub mod generator;
mod matrix;
mod value;
mod vector;

pub use generator::{Generator, Golden, Sqrt3};
pub use matrix::{apply_int, int_mat6, AlgMat, IntMat6};
pub use value::Alg;
pub use vector::{AlgVec, Exact3, LatticeVector};

/// Errors of exact arithmetic and of literal input validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlgError {
    #[error("algebraic value with zero denominator")]
    ZeroDenominator,
    #[error("division by an algebraic zero")]
    DivisionByZero,
    #[error("non-canonical algebraic literal ({p}, {q}, {r})")]
    NonCanonical { p: i64, q: i64, r: i64 },
    #[error("algebraic coefficient overflow")]
    Overflow,
}
