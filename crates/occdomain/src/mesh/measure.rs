use std::collections::HashSet;

use crate::alg::{Alg, LatticeVector};
use crate::boolean::{Hull, Pt};
use crate::lattice::Lattice;
use crate::polytope::{Polytope, PolytopeError, Simplex};

use super::vertex_key;

/// Float volume (area for 2D domains) in internal space.
pub fn volume<L: Lattice>(p: &Polytope<L>) -> f64 {
    p.volume()
}

/// Exact volume (area for 2D domains) in internal space.
pub fn exact_volume<L: Lattice>(p: &Polytope<L>) -> Alg<L::G> {
    p.exact_volume()
}

/// Distinct vertices by internal position, first-seen order.
pub fn vertices<L: Lattice>(p: &Polytope<L>) -> Vec<LatticeVector<L::G>> {
    let mut seen = HashSet::new();
    p.iter()
        .flat_map(|s| s.vertices().iter().copied())
        .filter(|v| seen.insert(vertex_key::<L>(v)))
        .collect()
}

/// Triangulated convex hull of all vertices of `p`.
pub fn convex_hull<L: Lattice>(p: &Polytope<L>) -> Result<Polytope<L>, PolytopeError> {
    let pts = vertices(p)
        .into_iter()
        .map(Pt::new::<L>)
        .collect::<Result<Vec<_>, _>>()?;
    let Some(hull) = Hull::build::<L>(pts)? else {
        return Ok(Polytope::empty());
    };
    let simplices = hull
        .triangulate()?
        .iter()
        .filter_map(|vs| Simplex::from_slice(vs))
        .collect();
    Ok(Polytope::from_simplices_unchecked(simplices))
}
