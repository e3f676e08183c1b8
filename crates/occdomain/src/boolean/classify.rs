//! Pairwise simplex classification: float proposal, exact confirmation.

use nalgebra::Vector3;
use tracing::{debug, trace};

use crate::alg::AlgError;
use crate::lattice::Lattice;
use crate::polytope::{PolytopeError, Simplex};
use crate::predicates::{
    inside_tetrahedron, inside_triangle, segment_segment_intersection, spheres_overlap,
    triangle_triangle_intersect, Containment, GeomCfg,
};

use super::hull::{simplex_planes, Hull, Plane, Pt};

/// Relation between the closed regions of two simplices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PairClass {
    /// No common interior points (touching allowed).
    Disjoint,
    AInsideB,
    BInsideA,
    /// Anything else; exact clipping decides the common part.
    Overlapping,
}

/// A simplex with its exact hull, facet planes and float image, computed
/// once per Boolean operation.
#[derive(Clone, Debug)]
pub(crate) struct Prepared<L: Lattice> {
    pub(crate) simplex: Simplex<L::G>,
    pub(crate) hull: Hull<L::G>,
    pub(crate) planes: Vec<Plane<L::G>>,
    f: Vec<Vector3<f64>>,
    center: Vector3<f64>,
    radius: f64,
}

impl<L: Lattice> Prepared<L> {
    pub fn new(s: &Simplex<L::G>) -> Result<Self, PolytopeError> {
        let pts = s
            .vertices()
            .iter()
            .map(|v| Pt::new::<L>(*v))
            .collect::<Result<Vec<_>, _>>()?;
        let planes = simplex_planes(&pts, L::DIM)?;
        let f: Vec<Vector3<f64>> = pts.iter().map(|p| p.int.to_f64()).collect();
        let (center, radius) = s.bounding_sphere::<L>();
        let hull = Hull::build::<L>(pts)?.ok_or(PolytopeError::DegenerateSimplex { index: 0 })?;
        Ok(Self {
            simplex: s.clone(),
            hull,
            planes,
            f,
            center,
            radius,
        })
    }

    fn float_contains(&self, p: &Vector3<f64>, cfg: GeomCfg) -> bool {
        let c = match self.f.as_slice() {
            [a, b, c] => inside_triangle(p, &[*a, *b, *c], cfg),
            [a, b, c, d] => inside_tetrahedron(p, &[*a, *b, *c, *d], cfg),
            _ => Containment::Outside,
        };
        c == Containment::Inside
    }

    /// Faces (3D) or edges (2D) of the float image.
    fn float_boundary_crosses(&self, other: &Self, cfg: GeomCfg) -> bool {
        let (a, b) = (&self.f, &other.f);
        if L::DIM == 2 {
            for i in 0..3 {
                for j in 0..3 {
                    if segment_segment_intersection(&a[i], &a[(i + 1) % 3], &b[j], &b[(j + 1) % 3], cfg)
                        .is_some()
                    {
                        return true;
                    }
                }
            }
            return false;
        }
        let faces = |v: &[Vector3<f64>]| {
            [[v[1], v[2], v[3]], [v[0], v[2], v[3]], [v[0], v[1], v[3]], [v[0], v[1], v[2]]]
        };
        let (fa, fb) = (faces(a), faces(b));
        fa.iter()
            .any(|ta| fb.iter().any(|tb| triangle_triangle_intersect(ta, tb, cfg)))
    }
}

/// Classify `a` against `b`.
///
/// Floats prune and propose; every returned containment or disjointness is
/// confirmed exactly. Float proposals that exact arithmetic rejects are
/// logged and the pair falls through to `Overlapping`.
pub(crate) fn classify<L: Lattice>(a: &Prepared<L>, b: &Prepared<L>, cfg: GeomCfg) -> Result<PairClass, AlgError> {
    if !spheres_overlap(&a.center, a.radius, &b.center, b.radius, cfg.eps) {
        trace!(lattice = L::NAME, "pair pruned by bounding spheres");
        return Ok(PairClass::Disjoint);
    }
    let a_in_b_f = a.f.iter().all(|p| b.float_contains(p, cfg));
    let b_in_a_f = b.f.iter().all(|p| a.float_contains(p, cfg));

    if b.hull.contains_all(&a.hull.verts)? {
        if !a_in_b_f {
            debug!(lattice = L::NAME, "containment missed by float predicates");
        }
        return Ok(PairClass::AInsideB);
    }
    if a.hull.contains_all(&b.hull.verts)? {
        if !b_in_a_f {
            debug!(lattice = L::NAME, "containment missed by float predicates");
        }
        return Ok(PairClass::BInsideA);
    }
    if a_in_b_f || b_in_a_f {
        debug!(lattice = L::NAME, "ambiguous containment, clipping exactly");
        return Ok(PairClass::Overlapping);
    }
    if a.float_boundary_crosses(b, cfg) {
        return Ok(PairClass::Overlapping);
    }
    if b.hull.separated_from(&a.hull.verts)? || a.hull.separated_from(&b.hull.verts)? {
        return Ok(PairClass::Disjoint);
    }
    trace!(lattice = L::NAME, "no float contact and no separating facet, clipping exactly");
    Ok(PairClass::Overlapping)
}
