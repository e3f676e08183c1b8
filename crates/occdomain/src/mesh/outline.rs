use std::collections::HashMap;
use std::marker::PhantomData;

use crate::alg::LatticeVector;
use crate::lattice::Lattice;
use crate::polytope::Polytope;

use super::{set_key, VertexKey};

/// Boundary of a polytope: the facets owned by exactly one simplex.
///
/// Facets are triangles for 3D domains and edges for 2D domains, in
/// first-seen order with the vertex order of their owning simplex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outline<L: Lattice> {
    pub facets: Vec<Vec<LatticeVector<L::G>>>,
    _lattice: PhantomData<L>,
}

impl<L: Lattice> Outline<L> {
    #[inline]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Ridges (edges in 3D, points in 2D) used by exactly one outline facet.
    /// Empty for a closed, conforming boundary.
    pub fn open_ridges(&self) -> Vec<Vec<LatticeVector<L::G>>> {
        let mut order: Vec<Vec<VertexKey<L::G>>> = Vec::new();
        let mut ridges: HashMap<Vec<VertexKey<L::G>>, (usize, Vec<LatticeVector<L::G>>)> = HashMap::new();
        for f in &self.facets {
            for skip in 0..f.len() {
                let ridge: Vec<LatticeVector<L::G>> = f
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, v)| *v)
                    .collect();
                let key = set_key::<L>(&ridge);
                let entry = ridges.entry(key.clone()).or_insert_with(|| {
                    order.push(key);
                    (0, ridge)
                });
                entry.0 += 1;
            }
        }
        order
            .into_iter()
            .filter_map(|k| match ridges.remove(&k) {
                Some((1, ridge)) => Some(ridge),
                _ => None,
            })
            .collect()
    }
}

/// Facets of `p` not shared with another simplex.
pub fn outline<L: Lattice>(p: &Polytope<L>) -> Outline<L> {
    let mut order: Vec<Vec<VertexKey<L::G>>> = Vec::new();
    let mut owners: HashMap<Vec<VertexKey<L::G>>, (usize, Vec<LatticeVector<L::G>>)> = HashMap::new();
    for s in p {
        for facet in s.facets() {
            let key = set_key::<L>(&facet);
            let entry = owners.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                (0, facet)
            });
            entry.0 += 1;
        }
    }
    let facets = order
        .into_iter()
        .filter_map(|k| match owners.remove(&k) {
            Some((1, facet)) => Some(facet),
            _ => None,
        })
        .collect();
    Outline {
        facets,
        _lattice: PhantomData,
    }
}
