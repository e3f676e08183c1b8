//! Exact polytope algebra for quasicrystal occupation domains.
//!
//! Occupation domains are unions of simplices in internal space whose
//! vertices are exact 6D lattice coordinates over Q(τ) (icosahedral, 3D
//! domains) or Q(√3) (dodecagonal, 2D domains). Arithmetic stays exact;
//! floating point only proposes answers that exact tests confirm.
//!
//! Layout
//! - `alg`: exact values `(p + qα)/r`, vectors and integer matrices.
//! - `lattice`: lattice families and their par/perp projections.
//! - `symmetry`: point groups generated by closure, cosets and orbits.
//! - `predicates`: tolerance-bounded float predicates.
//! - `polytope`: simplices, domains, shifts, similarity scaling.
//! - `boolean`: intersection, difference, union.
//! - `mesh`: duplicate removal, outlines, simplification, volumes.
//! - `random`: seeded sample domains.
//! - `api`: curated entry points.

pub mod alg;
pub mod api;
pub mod boolean;
pub mod lattice;
pub mod mesh;
pub mod polytope;
pub mod predicates;
pub mod random;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::alg::{Alg, Exact3, Generator, Golden, LatticeVector, Sqrt3};
    pub use crate::boolean::BoolCfg;
    pub use crate::lattice::{Dodecagonal, Icosahedral, Lattice};
    pub use crate::polytope::{build_asymmetric_unit, Polytope, PolytopeError, Simplex};
    pub use crate::predicates::GeomCfg;
    pub use crate::symmetry::SymmetryGroup;
}
