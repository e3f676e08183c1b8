//! Boolean operations on polytopes: intersection, difference, union.
//!
//! Purpose
//! - Combine occupation domains exactly. Every output vertex is an input
//!   vertex or the exact crossing of an input edge with a facet plane of the
//!   other operand, so results are reproducible and bit-identical across
//!   runs and thread counts.
//!
//! Pipeline (per simplex pair)
//! 1. Bounding-sphere pruning.
//! 2. Float predicates propose containment or contact (`classify`).
//! 3. Exact half-space tests confirm containment or separation; anything
//!    else is clipped exactly (`hull`).
//!
//! Results
//! - Simplices meeting only on a shared face or edge contribute nothing to
//!   an intersection and are left intact by a subtraction.
//! - Simplices not touched by the other operand are passed through unchanged;
//!   clipped parts are re-triangulated, so vertex lists of results are not
//!   canonical. Compare results by exact volume or by `mesh` normal forms.
//!
//! Failure modes
//! - Each operand is checked pairwise for interior-disjointness before any
//!   clipping; an overlap is `SelfIntersecting` with the operand's indices.
//! - Coefficient overflow aborts the operation with `Arithmetic(Overflow)`.
//! - `BoolCfg::max_pieces` bounds the output of each input simplex.
//!
//! With the `parallel` feature the per-simplex loop runs on rayon; output
//! order follows input order either way.

mod classify;
mod hull;

pub(crate) use classify::Prepared;
pub(crate) use hull::{Hull, Pt};

use tracing::{debug, trace};

use crate::lattice::Lattice;
use crate::polytope::{Polytope, PolytopeError, Simplex};
use crate::predicates::GeomCfg;

use classify::{classify, PairClass};

/// Boolean-engine configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoolCfg {
    pub geom: GeomCfg,
    /// Upper bound on the pieces one input simplex may turn into, in an
    /// intersection or a subtraction, before `PieceLimitExceeded` is raised.
    pub max_pieces: usize,
}

impl Default for BoolCfg {
    fn default() -> Self {
        Self {
            geom: GeomCfg::default(),
            max_pieces: 4096,
        }
    }
}

/// Apply `f` to every item, in parallel with the `parallel` feature. Errors
/// short-circuit; the output order is the input order.
fn map_collect<T, R, F>(items: &[T], f: F) -> Result<Vec<R>, PolytopeError>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R, PolytopeError> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(f).collect()
    }
}

fn prepare<L: Lattice>(p: &Polytope<L>) -> Result<Vec<Prepared<L>>, PolytopeError> {
    p.iter()
        .enumerate()
        .map(|(i, s)| Prepared::new(s).map_err(|e| e.at_index(i)))
        .collect()
}

/// First pair of prepared simplices whose interiors meet, as
/// `SelfIntersecting`.
pub(crate) fn check_disjoint<L: Lattice>(prepared: &[Prepared<L>], cfg: GeomCfg) -> Result<(), PolytopeError> {
    let order: Vec<usize> = (0..prepared.len()).collect();
    let hits = map_collect(&order, |&i| {
        for (j, b) in prepared.iter().enumerate().skip(i + 1) {
            if interiors_overlap(&prepared[i], b, cfg)? {
                return Ok(Some((i, j)));
            }
        }
        Ok(None)
    })?;
    match hits.into_iter().flatten().next() {
        Some((first, second)) => Err(PolytopeError::SelfIntersecting { first, second }),
        None => Ok(()),
    }
}

/// Prepare an operand and check that its simplices are interior-disjoint.
fn prepare_operand<L: Lattice>(p: &Polytope<L>, cfg: &BoolCfg) -> Result<Vec<Prepared<L>>, PolytopeError> {
    let prepared = prepare(p)?;
    check_disjoint(&prepared, cfg.geom)?;
    Ok(prepared)
}

fn to_simplices<L: Lattice>(pieces: &[Hull<L::G>]) -> Result<Vec<Simplex<L::G>>, PolytopeError> {
    let mut out = Vec::new();
    for h in pieces {
        out.extend(h.triangulate()?.iter().filter_map(|vs| Simplex::from_slice(vs)));
    }
    Ok(out)
}

fn check_pieces(count: usize, cfg: &BoolCfg) -> Result<(), PolytopeError> {
    if count > cfg.max_pieces {
        return Err(PolytopeError::PieceLimitExceeded {
            limit: cfg.max_pieces,
        });
    }
    Ok(())
}

/// Do the interiors of two prepared simplices meet?
pub(crate) fn interiors_overlap<L: Lattice>(
    a: &Prepared<L>,
    b: &Prepared<L>,
    cfg: GeomCfg,
) -> Result<bool, PolytopeError> {
    Ok(match classify(a, b, cfg)? {
        PairClass::Disjoint => false,
        PairClass::AInsideB | PairClass::BInsideA => true,
        PairClass::Overlapping => a.hull.clip_all(&b.planes)?.is_some(),
    })
}

fn intersect_one<L: Lattice>(
    a: &Prepared<L>,
    bs: &[Prepared<L>],
    cfg: &BoolCfg,
) -> Result<Vec<Simplex<L::G>>, PolytopeError> {
    let mut out = Vec::new();
    for b in bs {
        match classify(a, b, cfg.geom)? {
            PairClass::Disjoint => continue,
            // b's simplices are interior-disjoint, so nothing else meets a
            PairClass::AInsideB => return Ok(vec![a.simplex.clone()]),
            PairClass::BInsideA => out.push(b.simplex.clone()),
            PairClass::Overlapping => {
                if let Some(common) = a.hull.clip_all(&b.planes)? {
                    out.extend(to_simplices::<L>(std::slice::from_ref(&common))?);
                }
            }
        }
        check_pieces(out.len(), cfg)?;
    }
    Ok(out)
}

fn subtract_one<L: Lattice>(
    a: &Prepared<L>,
    bs: &[Prepared<L>],
    cfg: &BoolCfg,
) -> Result<Vec<Simplex<L::G>>, PolytopeError> {
    let mut pieces = vec![a.hull.clone()];
    let mut changed = false;
    for b in bs {
        match classify(a, b, cfg.geom)? {
            PairClass::Disjoint => continue,
            PairClass::AInsideB => return Ok(Vec::new()),
            PairClass::BInsideA | PairClass::Overlapping => {}
        }
        let mut next = Vec::with_capacity(pieces.len());
        for piece in &pieces {
            let (parts, cut) = piece.subtract_planes(&b.planes)?;
            changed |= cut;
            next.extend(parts);
        }
        check_pieces(next.len(), cfg)?;
        pieces = next;
        if pieces.is_empty() {
            return Ok(Vec::new());
        }
    }
    trace!(pieces = pieces.len(), changed, "simplex subtracted");
    if changed {
        to_simplices::<L>(&pieces)
    } else {
        Ok(vec![a.simplex.clone()])
    }
}

/// `a ∩ b`.
///
/// Both operands must be interior-disjoint; overlapping simplices within
/// one operand (for example raw `symmetrize` output) are reported as
/// `SelfIntersecting`.
pub fn intersect<L: Lattice>(
    a: &Polytope<L>,
    b: &Polytope<L>,
    cfg: &BoolCfg,
) -> Result<Polytope<L>, PolytopeError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Polytope::empty());
    }
    let (pa, pb) = (prepare_operand(a, cfg)?, prepare_operand(b, cfg)?);
    let parts = map_collect(&pa, |x| intersect_one(x, &pb, cfg))?;
    let out = Polytope::from_simplices_unchecked(parts.into_iter().flatten().collect());
    debug!(
        op = "intersect",
        lattice = L::NAME,
        lhs = a.len(),
        rhs = b.len(),
        out = out.len(),
        "boolean"
    );
    Ok(out)
}

/// `a \ b`, with the same operand requirements as `intersect`.
pub fn subtract<L: Lattice>(
    a: &Polytope<L>,
    b: &Polytope<L>,
    cfg: &BoolCfg,
) -> Result<Polytope<L>, PolytopeError> {
    if a.is_empty() || b.is_empty() {
        return Ok(a.clone());
    }
    let (pa, pb) = (prepare_operand(a, cfg)?, prepare_operand(b, cfg)?);
    let parts = map_collect(&pa, |x| subtract_one(x, &pb, cfg))?;
    let out = Polytope::from_simplices_unchecked(parts.into_iter().flatten().collect());
    debug!(
        op = "subtract",
        lattice = L::NAME,
        lhs = a.len(),
        rhs = b.len(),
        out = out.len(),
        "boolean"
    );
    Ok(out)
}

/// `a ∪ b` as `a` followed by `b \ a`.
pub fn union<L: Lattice>(a: &Polytope<L>, b: &Polytope<L>, cfg: &BoolCfg) -> Result<Polytope<L>, PolytopeError> {
    let rest = subtract(b, a, cfg)?;
    Ok(a.concat(&rest))
}

impl<L: Lattice> Polytope<L> {
    /// `self ∩ other` with the default configuration.
    pub fn intersect(&self, other: &Self) -> Result<Self, PolytopeError> {
        intersect(self, other, &BoolCfg::default())
    }

    /// `self \ other` with the default configuration.
    pub fn subtract(&self, other: &Self) -> Result<Self, PolytopeError> {
        subtract(self, other, &BoolCfg::default())
    }

    /// `self ∪ other` with the default configuration.
    pub fn union(&self, other: &Self) -> Result<Self, PolytopeError> {
        union(self, other, &BoolCfg::default())
    }
}

#[cfg(test)]
mod tests;
