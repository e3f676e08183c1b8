//! Occupation domains as unions of simplices with exact lattice vertices.
//!
//! Purpose
//! - `Polytope<L>` is the value every other module consumes and produces:
//!   a finite list of interior-disjoint simplices of one lattice family.
//!   Values are immutable after construction; every operation returns a new
//!   polytope.
//!
//! Layout
//! - `simplex`: `Simplex<G>` (triangle or tetrahedron) and its exact measures.
//! - `build`: checked construction of an asymmetric unit and `validate`.
//! - `transform`: shift, similarity scaling, point-group images.
//!
//! Invariants
//! - Every simplex has `L::DIM + 1` vertices and non-zero exact measure.
//! - The empty polytope is a valid value (result of empty intersections).
//! - Interior-disjointness is checked by `build_asymmetric_unit` and
//!   preserved by the Boolean operations; `symmetrize` may return
//!   overlapping or duplicated images by construction.

mod build;
mod simplex;
mod transform;

pub use build::build_asymmetric_unit;
pub use simplex::Simplex;

use std::marker::PhantomData;

use crate::alg::{Alg, AlgError};
use crate::lattice::Lattice;

/// Errors from constructing or combining polytopes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolytopeError {
    #[error(transparent)]
    Arithmetic(#[from] AlgError),
    #[error("expected a multiple of {expected} vertices, got {got}")]
    WrongVertexCount { expected: usize, got: usize },
    #[error("dimension {got} does not match the lattice ({expected})")]
    WrongDimension { expected: usize, got: usize },
    #[error("simplex {index} has zero volume")]
    DegenerateSimplex { index: usize },
    #[error("simplices {first} and {second} overlap")]
    SelfIntersecting { first: usize, second: usize },
    #[error("subtraction produced more than {limit} pieces")]
    PieceLimitExceeded { limit: usize },
}

impl PolytopeError {
    /// Attach the simplex position to a per-simplex error.
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            Self::DegenerateSimplex { .. } => Self::DegenerateSimplex { index },
            other => other,
        }
    }
}

/// Finite union of interior-disjoint simplices in internal space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polytope<L: Lattice> {
    simplices: Vec<Simplex<L::G>>,
    _lattice: PhantomData<L>,
}

impl<L: Lattice> Default for Polytope<L> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<L: Lattice> Polytope<L> {
    pub fn empty() -> Self {
        Self {
            simplices: Vec::new(),
            _lattice: PhantomData,
        }
    }

    /// Checked construction from simplices: dimension and degeneracy only.
    /// Overlap is checked by `validate`.
    pub fn from_simplices(simplices: Vec<Simplex<L::G>>) -> Result<Self, PolytopeError> {
        for (i, s) in simplices.iter().enumerate() {
            if s.vertices().len() != L::DIM + 1 {
                return Err(PolytopeError::WrongVertexCount {
                    expected: L::DIM + 1,
                    got: s.vertices().len(),
                });
            }
            if s.checked_signed_measure::<L>()?.is_zero() {
                return Err(PolytopeError::DegenerateSimplex { index: i });
            }
        }
        Ok(Self::from_simplices_unchecked(simplices))
    }

    /// Callers guarantee the per-simplex invariants.
    pub(crate) fn from_simplices_unchecked(simplices: Vec<Simplex<L::G>>) -> Self {
        Self {
            simplices,
            _lattice: PhantomData,
        }
    }

    #[inline]
    pub fn simplices(&self) -> &[Simplex<L::G>] {
        &self.simplices
    }

    pub fn into_simplices(self) -> Vec<Simplex<L::G>> {
        self.simplices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Simplex<L::G>> {
        self.simplices.iter()
    }

    /// Concatenate simplex lists without any overlap resolution.
    pub fn concat(&self, other: &Self) -> Self {
        let mut simplices = self.simplices.clone();
        simplices.extend(other.simplices.iter().cloned());
        Self::from_simplices_unchecked(simplices)
    }

    /// Sum of exact simplex measures (volume, or area for 2D domains).
    pub fn exact_volume(&self) -> Alg<L::G> {
        self.simplices.iter().map(|s| s.exact_measure::<L>()).sum()
    }

    pub fn volume(&self) -> f64 {
        self.simplices.iter().map(|s| s.measure_f64::<L>()).sum()
    }
}

impl<'a, L: Lattice> IntoIterator for &'a Polytope<L> {
    type Item = &'a Simplex<L::G>;
    type IntoIter = std::slice::Iter<'a, Simplex<L::G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}
