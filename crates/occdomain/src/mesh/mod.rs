//! Mesh maintenance on polytopes: deduplication, outline, simplification,
//! volumes, convex hull.
//!
//! Purpose
//! - Keep simplex lists small and comparable after symmetrization and
//!   repeated Boolean operations.
//!
//! Conventions
//! - Vertices are compared by their internal-space image (the first `DIM`
//!   internal coordinates). For the dodecagonal lattice two vertices that
//!   differ only along the periodic axes are the same vertex here.
//! - First-seen wins: the earliest simplex and vertex in input order are the
//!   representatives, so results are deterministic.
//! - `outline` and `simplify` work on conforming meshes (neighbours share
//!   whole facets). Boolean results can carry T-junctions; facets split on one
//!   side only then show up in the outline.

mod dedup;
mod measure;
mod outline;
mod simplify;

pub use dedup::{remove_duplicate_in_internal_space, remove_duplicate_vertices};
pub use measure::{convex_hull, exact_volume, vertices, volume};
pub use outline::{outline, Outline};
pub use simplify::simplify;

use crate::alg::{Alg, LatticeVector};
use crate::lattice::{to_internal, Lattice};

/// Exact internal-space key of a vertex (z dropped for 2D domains).
pub(crate) type VertexKey<G> = [Alg<G>; 3];

#[inline]
pub(crate) fn vertex_key<L: Lattice>(v: &LatticeVector<L::G>) -> VertexKey<L::G> {
    let mut x = to_internal::<L>(v);
    if L::DIM == 2 {
        x[2] = Alg::zero();
    }
    x.0
}

/// Sorted vertex keys: equal for simplices or facets covering the same
/// internal-space vertex set.
pub(crate) fn set_key<L: Lattice>(vs: &[LatticeVector<L::G>]) -> Vec<VertexKey<L::G>> {
    let mut k: Vec<VertexKey<L::G>> = vs.iter().map(vertex_key::<L>).collect();
    k.sort();
    k
}

#[cfg(test)]
mod tests;
