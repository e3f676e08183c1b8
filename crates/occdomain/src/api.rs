//! Curated entry points for callers building and combining occupation
//! domains.
//!
//! Everything here is a thin wrapper or re-export; the modules own the
//! semantics. Operations take their operands by reference and return new
//! polytopes.

// Exact values and lattice coordinates
pub use crate::alg::{Alg, AlgError, Exact3, Generator, Golden, IntMat6, LatticeVector, Sqrt3};
// Lattice families and projections
pub use crate::lattice::{
    to_internal, to_internal_f64, to_physical, to_physical_f64, Dodecagonal, Icosahedral, Lattice,
};
// Point groups
pub use crate::symmetry::{Coset, SymOp, SymmetryGroup};
// Float predicates and tolerances
pub use crate::predicates::{Containment, GeomCfg, SegmentPosition};
// Mesh maintenance
pub use crate::mesh::{
    convex_hull, exact_volume, outline, remove_duplicate_in_internal_space, remove_duplicate_vertices, simplify,
    vertices, Outline,
};
// Seeded samples
pub use crate::random::{random_polytope, RandomCfg, RandomDomains, RandomError, ReplayToken};

// Domains and the Boolean engine
pub use crate::boolean::BoolCfg;
pub use crate::polytope::{build_asymmetric_unit, Polytope, PolytopeError, Simplex};

/// Every image of `p` under the point group of `L`, about `center`.
pub fn symmetrize<L: Lattice>(p: &Polytope<L>, center: &LatticeVector<L::G>) -> Polytope<L> {
    SymmetryGroup::<L>::new().symmetrize(p, center)
}

/// Translate every vertex by `offset`.
pub fn shift<L: Lattice>(p: &Polytope<L>, offset: &LatticeVector<L::G>) -> Polytope<L> {
    p.shift(offset)
}

/// Apply the inflation symmetry `order` times (negative orders deflate).
pub fn scale_by_similarity<L: Lattice>(p: &Polytope<L>, order: i32) -> Polytope<L> {
    p.scale_by_similarity(order)
}

pub fn intersect<L: Lattice>(a: &Polytope<L>, b: &Polytope<L>) -> Result<Polytope<L>, PolytopeError> {
    crate::boolean::intersect(a, b, &BoolCfg::default())
}

pub fn subtract<L: Lattice>(a: &Polytope<L>, b: &Polytope<L>) -> Result<Polytope<L>, PolytopeError> {
    crate::boolean::subtract(a, b, &BoolCfg::default())
}

pub fn union<L: Lattice>(a: &Polytope<L>, b: &Polytope<L>) -> Result<Polytope<L>, PolytopeError> {
    crate::boolean::union(a, b, &BoolCfg::default())
}

/// Float volume (area for 2D domains) in internal space.
pub fn volume<L: Lattice>(p: &Polytope<L>) -> f64 {
    crate::mesh::volume(p)
}
