//! Lattice configurations and the fixed physical/internal projections.
//!
//! Purpose
//! - One generic core for every quasicrystal family: a `Lattice` type bundles
//!   the generator α, the projection bases, the point-group generators and
//!   the inflation matrix. Code elsewhere is written once against `L: Lattice`.
//! - Tables are process-wide constants built lazily, once per configuration
//!   (`OnceLock` inside each `tables()` impl), and read-only afterwards.
//!
//! Conventions
//! - Projections map the 6D basis vector `e_i` to `par[i]` (physical) and
//!   `perp[i]` (internal). The common normalization factor of the embedding
//!   is omitted: internal coordinates are in units of the unnormalized basis,
//!   which leaves every incidence and ratio unchanged and keeps the tables in
//!   Q(α). Volumes are reported in those units.
//! - `DIM` is the dimension of the occupation domain in internal space. For
//!   the dodecagonal lattice the internal z (component 6) is carried along
//!   exactly but ignored by the 2D geometry.
//! - New vertices created by clipping are known by their internal position
//!   only. `LatticeTables::lift` gives them the lattice coordinates with that
//!   internal image and physical image zero, so their coordinates depend on
//!   the position alone and not on the edges they were cut from.

mod dodecagonal;
mod icosahedral;
mod projector;

pub use dodecagonal::Dodecagonal;
pub use icosahedral::Icosahedral;
pub use projector::{checked_to_internal, to_internal, to_internal_f64, to_physical, to_physical_f64};

use std::fmt::Debug;
use std::hash::Hash;

use nalgebra::Matrix3x6;

use crate::alg::{Alg, AlgError, AlgMat, AlgVec, Exact3, Generator, IntMat6, LatticeVector};
use crate::symmetry::close_group;

/// Precomputed read-only tables of one lattice configuration.
#[derive(Clone, Debug)]
pub struct LatticeTables<G: Generator> {
    pub par: [Exact3<G>; 6],
    pub perp: [Exact3<G>; 6],
    pub par_f64: Matrix3x6<f64>,
    pub perp_f64: Matrix3x6<f64>,
    /// Point-group operations; index 0 is the identity.
    pub group: Vec<IntMat6>,
    pub similarity: IntMat6,
    pub similarity_inv: IntMat6,
    /// Inverse of the embedding `v ↦ (physical, internal)`; an error if the
    /// bases do not span.
    embedding_inv: Result<AlgMat<G, 6>, AlgError>,
}

impl<G: Generator> LatticeTables<G> {
    /// Build every table from the configuration's raw definitions.
    pub fn build<L: Lattice<G = G>>() -> Self {
        let par = L::par_basis();
        let perp = L::perp_basis();
        let to_f64 = |basis: &[Exact3<G>; 6]| {
            Matrix3x6::from_fn(|row, col| basis[col][row].to_f64())
        };
        let embedding = AlgMat(std::array::from_fn(|row| {
            std::array::from_fn(|col| if row < 3 { par[col][row] } else { perp[col][row - 3] })
        }));
        let embedding_inv = embedding
            .inverse()
            .and_then(|m| m.ok_or(AlgError::DivisionByZero));
        Self {
            embedding_inv,
            par_f64: to_f64(&par),
            perp_f64: to_f64(&perp),
            par,
            perp,
            group: close_group(&L::group_generators()),
            similarity: L::similarity(),
            similarity_inv: L::similarity_inverse(),
        }
    }

    /// Lattice coordinates of the point with internal image `x` and physical
    /// image zero.
    pub fn lift(&self, x: &Exact3<G>) -> Result<LatticeVector<G>, AlgError> {
        let inv = self.embedding_inv.as_ref().map_err(|e| *e)?;
        let z = Alg::zero();
        inv.mul_vec(&AlgVec([z, z, z, x[0], x[1], x[2]]))
    }
}

/// A quasicrystal lattice configuration (generator, projections, point group).
pub trait Lattice:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    type G: Generator;

    const NAME: &'static str;
    /// Dimension of the occupation domain in internal space (3 or 2).
    const DIM: usize;
    /// Order of the point group generated by `group_generators`.
    const GROUP_ORDER: usize;

    /// Physical-space images of the six basis vectors.
    fn par_basis() -> [Exact3<Self::G>; 6];
    /// Internal-space images of the six basis vectors.
    fn perp_basis() -> [Exact3<Self::G>; 6];
    /// Generators of the point group as integer lattice maps.
    fn group_generators() -> Vec<IntMat6>;
    /// Inflation matrix: scales physical space by `similarity_factor_par`
    /// and internal space by `similarity_factor_perp`.
    fn similarity() -> IntMat6;
    fn similarity_inverse() -> IntMat6;
    fn similarity_factor_par() -> Alg<Self::G>;
    fn similarity_factor_perp() -> Alg<Self::G>;

    /// Lazily-built, process-wide tables.
    fn tables() -> &'static LatticeTables<Self::G>;
}

#[cfg(test)]
mod tests;
