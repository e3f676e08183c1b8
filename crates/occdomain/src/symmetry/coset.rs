use std::collections::HashMap;

use crate::alg::LatticeVector;
use crate::lattice::Lattice;

use super::{apply, SymmetryGroup};

/// Left-coset decomposition `G = ⊔ rᵢ·H` with `H` the stabilizer of a site.
///
/// `representatives[k]` maps the site to the `k`-th orbit point; the number
/// of representatives is the orbit length `|G| / |H|`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coset {
    pub stabilizer: Vec<usize>,
    pub representatives: Vec<usize>,
}

impl Coset {
    #[inline]
    pub fn index(&self) -> usize {
        self.representatives.len()
    }
}

impl<L: Lattice> SymmetryGroup<L> {
    /// Stabilizer of `site` about `center` and one representative per coset,
    /// the first operation in group order reaching each image.
    pub fn coset(&self, site: &LatticeVector<L::G>, center: &LatticeVector<L::G>) -> Coset {
        let mut stabilizer = Vec::new();
        let mut representatives = Vec::new();
        let mut images: HashMap<LatticeVector<L::G>, usize> = HashMap::new();
        for (i, op) in self.ops.iter().enumerate() {
            let img = apply(op, site, center);
            if img == *site {
                stabilizer.push(i);
            }
            images.entry(img).or_insert_with(|| {
                representatives.push(i);
                i
            });
        }
        Coset {
            stabilizer,
            representatives,
        }
    }

    /// Elements of the coset `ops[rep] · H`.
    pub fn coset_elements(&self, rep: usize, stabilizer: &[usize]) -> Vec<usize> {
        stabilizer
            .iter()
            .filter_map(|&h| self.compose(rep, h))
            .collect()
    }
}
