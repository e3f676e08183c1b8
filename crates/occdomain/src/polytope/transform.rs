//! Rigid and inflation transforms of whole polytopes.

use crate::alg::{apply_int, LatticeVector};
use crate::lattice::Lattice;
use crate::symmetry::SymmetryGroup;

use super::Polytope;

impl<L: Lattice> Polytope<L> {
    /// Translate every vertex by `offset`.
    pub fn shift(&self, offset: &LatticeVector<L::G>) -> Self {
        let simplices = self
            .simplices
            .iter()
            .map(|s| s.map_vertices(|v| *v + *offset))
            .collect();
        Self::from_simplices_unchecked(simplices)
    }

    /// Apply the inflation matrix `order` times (its inverse for negative
    /// orders). Internal-space measures scale by the perp factor to the
    /// power `order · L::DIM`.
    pub fn scale_by_similarity(&self, order: i32) -> Self {
        if order == 0 {
            return self.clone();
        }
        let t = L::tables();
        let step = if order > 0 { t.similarity } else { t.similarity_inv };
        let mut m = step;
        for _ in 1..order.unsigned_abs() {
            m *= step;
        }
        let simplices = self
            .simplices
            .iter()
            .map(|s| s.map_vertices(|v| apply_int(&m, v)))
            .collect();
        Self::from_simplices_unchecked(simplices)
    }

    /// Images under every point-group operation about `center`,
    /// concatenated in group order. No overlap resolution.
    pub fn symmetrize(&self, center: &LatticeVector<L::G>) -> Self {
        SymmetryGroup::<L>::new().symmetrize(self, center)
    }
}
