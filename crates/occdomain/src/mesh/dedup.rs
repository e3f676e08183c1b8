use std::collections::{HashMap, HashSet};

use nalgebra::Vector3;
use tracing::debug;

use crate::alg::{Generator, LatticeVector};
use crate::lattice::{to_internal_f64, Lattice};
use crate::polytope::{Polytope, Simplex};
use crate::predicates::GeomCfg;

use super::{set_key, vertex_key, VertexKey};

type Cell = (i64, i64, i64);

/// Float grid cell of side `eps`.
fn cell_of(x: &Vector3<f64>, eps: f64) -> Cell {
    let q = |v: f64| (v / eps).round() as i64;
    (q(x.x), q(x.y), q(x.z))
}

/// Representatives by exact key, plus a float grid for near-coincidence.
struct VertexPool<G: Generator> {
    exact: HashMap<VertexKey<G>, LatticeVector<G>>,
    grid: HashMap<Cell, Vec<(Vector3<f64>, LatticeVector<G>)>>,
    eps: f64,
}

impl<G: Generator> VertexPool<G> {
    fn new(eps: f64) -> Self {
        Self {
            exact: HashMap::new(),
            grid: HashMap::new(),
            eps,
        }
    }

    /// Representative of `v`, registering `v` itself when it is new.
    fn resolve<L: Lattice<G = G>>(&mut self, v: &LatticeVector<G>) -> LatticeVector<G> {
        let key = vertex_key::<L>(v);
        if let Some(rep) = self.exact.get(&key) {
            return *rep;
        }
        let mut x = to_internal_f64::<L>(v);
        if L::DIM == 2 {
            x.z = 0.0;
        }
        let (cx, cy, cz) = cell_of(&x, self.eps);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = self.grid.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    if let Some((_, rep)) = bucket.iter().find(|(y, _)| (x - y).norm() <= self.eps) {
                        let rep = *rep;
                        self.exact.insert(key, rep);
                        return rep;
                    }
                }
            }
        }
        self.exact.insert(key, *v);
        self.grid.entry((cx, cy, cz)).or_default().push((x, *v));
        *v
    }
}

/// Collapse vertices whose internal images lie within `cfg.eps` onto the
/// first-seen representative. Simplices that collapse to zero measure are
/// dropped.
pub fn remove_duplicate_vertices<L: Lattice>(p: &Polytope<L>, cfg: GeomCfg) -> Polytope<L> {
    let mut pool = VertexPool::new(cfg.eps);
    let mut out = Vec::with_capacity(p.len());
    let mut dropped = 0usize;
    for s in p {
        let merged: Simplex<L::G> = s.map_vertices(|v| pool.resolve::<L>(v));
        if merged.signed_measure::<L>().is_zero() {
            dropped += 1;
            continue;
        }
        out.push(merged);
    }
    if dropped > 0 {
        debug!(lattice = L::NAME, dropped, "simplices collapsed by vertex merge");
    }
    Polytope::from_simplices_unchecked(out)
}

/// `remove_duplicate_vertices`, then keep one simplex per internal-space
/// vertex set.
pub fn remove_duplicate_in_internal_space<L: Lattice>(p: &Polytope<L>, cfg: GeomCfg) -> Polytope<L> {
    let merged = remove_duplicate_vertices(p, cfg);
    let mut seen = HashSet::new();
    let out: Vec<Simplex<L::G>> = merged
        .into_simplices()
        .into_iter()
        .filter(|s| seen.insert(set_key::<L>(s.vertices())))
        .collect();
    debug!(lattice = L::NAME, before = p.len(), after = out.len(), "internal-space dedup");
    Polytope::from_simplices_unchecked(out)
}
