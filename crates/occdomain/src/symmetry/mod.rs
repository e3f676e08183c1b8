//! Point groups as integer lattice maps, and their action on polytopes.
//!
//! Purpose
//! - Generate the full point group of a lattice from its generators, apply
//!   operations about a center, and decompose the group into the stabilizer
//!   of a site and coset representatives.
//!
//! Conventions
//! - Operations are `IntMat6`; `apply(op, v, c) = op·(v − c) + c`.
//! - Index 0 of every generated group is the identity. Indices are stable
//!   for a given generator list.
//! - Elements are keyed by their 36 integer entries; identical matrices are
//!   one element.

mod coset;

pub use coset::Coset;

use std::collections::HashMap;
use std::marker::PhantomData;

use tracing::{trace, warn};

use crate::alg::{apply_int, Generator, IntMat6, LatticeVector};
use crate::lattice::Lattice;
use crate::polytope::{Polytope, Simplex};

/// Upper bound on generated group orders; crystallographic point groups of
/// the supported lattices stay far below it.
const MAX_GROUP_ORDER: usize = 1 << 12;

/// A point-group operation: an integer map of the 6D lattice.
pub type SymOp = IntMat6;

type OpKey = [i64; 36];

fn key(m: &IntMat6) -> OpKey {
    let mut k = [0i64; 36];
    k.copy_from_slice(m.as_slice());
    k
}

/// Closure of `generators` under multiplication, identity first.
///
/// Breadth-first: every element is a word in the generators; new elements
/// are appended in discovery order.
pub fn close_group(generators: &[IntMat6]) -> Vec<IntMat6> {
    let identity = IntMat6::identity();
    let mut ops = vec![identity];
    let mut seen: HashMap<OpKey, usize> = HashMap::new();
    seen.insert(key(&identity), 0);
    let mut next = 0;
    while next < ops.len() {
        let g = ops[next];
        for h in generators {
            let gh = g * h;
            let k = key(&gh);
            if !seen.contains_key(&k) {
                seen.insert(k, ops.len());
                ops.push(gh);
            }
        }
        next += 1;
        if ops.len() > MAX_GROUP_ORDER {
            warn!(order = ops.len(), "generators do not close to a finite point group");
            break;
        }
    }
    trace!(order = ops.len(), generators = generators.len(), "group closed");
    ops
}

/// The full point group of `L`, identity first (built once, then shared).
pub fn generate<L: Lattice>() -> &'static [SymOp] {
    &L::tables().group
}

/// `op · (v − center) + center`.
pub fn apply<G: Generator>(op: &IntMat6, v: &LatticeVector<G>, center: &LatticeVector<G>) -> LatticeVector<G> {
    apply_int(op, &(*v - *center)) + *center
}

/// `apply` on every vertex; vertex order is kept.
pub fn apply_simplex<G: Generator>(op: &IntMat6, s: &Simplex<G>, center: &LatticeVector<G>) -> Simplex<G> {
    s.map_vertices(|v| apply(op, v, center))
}

/// The point group of lattice `L` with index lookups.
#[derive(Clone, Debug)]
pub struct SymmetryGroup<L: Lattice> {
    ops: &'static [IntMat6],
    index: HashMap<OpKey, usize>,
    _lattice: PhantomData<L>,
}

impl<L: Lattice> Default for SymmetryGroup<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lattice> SymmetryGroup<L> {
    pub fn new() -> Self {
        let ops = generate::<L>();
        let index = ops.iter().enumerate().map(|(i, m)| (key(m), i)).collect();
        Self {
            ops,
            index,
            _lattice: PhantomData,
        }
    }

    /// All operations, identity first.
    #[inline]
    pub fn ops(&self) -> &'static [IntMat6] {
        self.ops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    pub fn op(&self, i: usize) -> &IntMat6 {
        &self.ops[i]
    }

    pub fn index_of(&self, m: &IntMat6) -> Option<usize> {
        self.index.get(&key(m)).copied()
    }

    /// Index of `ops[i] · ops[j]`.
    pub fn compose(&self, i: usize, j: usize) -> Option<usize> {
        self.index_of(&(self.ops[i] * self.ops[j]))
    }

    pub fn inverse(&self, i: usize) -> Option<usize> {
        (0..self.ops.len()).find(|&j| self.compose(i, j) == Some(0))
    }

    /// Every product of two elements is again an element.
    pub fn is_closed(&self) -> bool {
        (0..self.len()).all(|i| (0..self.len()).all(|j| self.compose(i, j).is_some()))
    }

    /// Images of `p` under every operation about `center`, concatenated in
    /// group order (`|G| · |p|` simplices). Duplicates are kept.
    pub fn symmetrize(&self, p: &Polytope<L>, center: &LatticeVector<L::G>) -> Polytope<L> {
        let mut out = Vec::with_capacity(self.len() * p.len());
        for op in self.ops {
            out.extend(p.iter().map(|s| apply_simplex(op, s, center)));
        }
        Polytope::from_simplices_unchecked(out)
    }

    /// Indices of operations fixing `site` about `center`.
    pub fn stabilizer(&self, site: &LatticeVector<L::G>, center: &LatticeVector<L::G>) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| apply(&self.ops[i], site, center) == *site)
            .collect()
    }

    /// Distinct images of `site` about `center`, in first-seen group order.
    pub fn orbit(&self, site: &LatticeVector<L::G>, center: &LatticeVector<L::G>) -> Vec<LatticeVector<L::G>> {
        let mut out: Vec<LatticeVector<L::G>> = Vec::new();
        for op in self.ops {
            let img = apply(op, site, center);
            if !out.contains(&img) {
                out.push(img);
            }
        }
        out
    }
}
