use std::collections::HashMap;

use tracing::debug;

use crate::alg::{Exact3, Generator, LatticeVector};
use crate::boolean::Pt;
use crate::lattice::Lattice;
use crate::polytope::{Polytope, Simplex};
use crate::predicates::{point_on_segment, GeomCfg, SegmentPosition};

use super::{set_key, VertexKey};

/// `f` strictly between `x` and `y` on the segment `x y` (exact).
fn strictly_between<G: Generator>(f: &Exact3<G>, x: &Exact3<G>, y: &Exact3<G>) -> bool {
    let d = *y - *x;
    if !(*f - *x).cross(&d).is_zero() {
        return false;
    }
    (*f - *x).dot(&d).is_positive() && (*y - *f).dot(&d).is_positive()
}

/// One merge pass; `None` when nothing merged.
fn merge_pass<L: Lattice>(simplices: &[Simplex<L::G>], cfg: GeomCfg) -> Option<Vec<Simplex<L::G>>> {
    let pts: Vec<Vec<Pt<L::G>>> = simplices
        .iter()
        .map(|s| {
            s.vertices()
                .iter()
                .zip(s.internal::<L>())
                .map(|(v, int)| Pt { lat: *v, int })
                .collect()
        })
        .collect();

    // facet key -> owners as (simplex, omitted vertex), first-seen order
    let mut order: Vec<Vec<VertexKey<L::G>>> = Vec::new();
    let mut owners: HashMap<Vec<VertexKey<L::G>>, Vec<(usize, usize)>> = HashMap::new();
    for (i, s) in simplices.iter().enumerate() {
        for (skip, facet) in s.facets().iter().enumerate() {
            let key = set_key::<L>(facet);
            owners
                .entry(key.clone())
                .or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                })
                .push((i, skip));
        }
    }

    let mut replaced: Vec<Option<Simplex<L::G>>> = vec![None; simplices.len()];
    let mut consumed = vec![false; simplices.len()];
    let mut merges = 0usize;
    for key in &order {
        let &[(i, xi), (j, yj)] = owners[key].as_slice() else { continue };
        if consumed[i] || consumed[j] || i == j {
            continue;
        }
        let (x, y) = (&pts[i][xi], &pts[j][yj]);
        let shared: Vec<usize> = (0..pts[i].len()).filter(|&k| k != xi).collect();
        let hit = shared.iter().copied().find(|&k| {
            let f = &pts[i][k];
            let float_on = point_on_segment(&f.int.to_f64(), &x.int.to_f64(), &y.int.to_f64(), cfg);
            float_on == SegmentPosition::On && strictly_between(&f.int, &x.int, &y.int)
        });
        let Some(k) = hit else { continue };
        let mut vs: Vec<LatticeVector<L::G>> = shared
            .iter()
            .filter(|&&m| m != k)
            .map(|&m| pts[i][m].lat)
            .collect();
        vs.push(x.lat);
        vs.push(y.lat);
        let Some(merged) = Simplex::from_slice(&vs) else { continue };
        consumed[i] = true;
        consumed[j] = true;
        replaced[i] = Some(merged);
        merges += 1;
    }
    if merges == 0 {
        return None;
    }
    debug!(lattice = L::NAME, merges, "simplify pass");
    let out = simplices
        .iter()
        .enumerate()
        .filter_map(|(i, s)| match (&replaced[i], consumed[i]) {
            (Some(m), _) => Some(m.clone()),
            (None, true) => None,
            (None, false) => Some(s.clone()),
        })
        .collect();
    Some(out)
}

/// Merge face-sharing pairs whose union is a single simplex, pass after pass
/// until nothing merges or `max_passes` is reached.
///
/// A pair `F ∪ {x}`, `F ∪ {y}` merges when a vertex `f` of the shared facet
/// lies strictly inside the segment `x y`; the union is `(F \ {f}) ∪ {x, y}`.
/// Volume is preserved exactly. At the fixed point the result is idempotent.
pub fn simplify<L: Lattice>(p: &Polytope<L>, max_passes: usize) -> Polytope<L> {
    let cfg = GeomCfg::default();
    let mut cur: Vec<Simplex<L::G>> = p.simplices().to_vec();
    for _ in 0..max_passes {
        match merge_pass::<L>(&cur, cfg) {
            Some(next) => cur = next,
            None => break,
        }
    }
    Polytope::from_simplices_unchecked(cur)
}
