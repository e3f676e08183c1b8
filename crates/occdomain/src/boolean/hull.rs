//! Exact convex regions: hull, half-space clipping, triangulation.
//!
//! A region is stored as its vertex set together with its facets (supporting
//! planes and the vertices on them). Clipping keeps the vertices on the inner
//! side and adds the exact crossing point of every edge that straddles the
//! plane; the hull of that set is the clipped region. All decisions are exact
//! and every coefficient operation is checked, so overflow surfaces as
//! `AlgError::Overflow`.
//!
//! Crossing points get their lattice coordinates from
//! `LatticeTables::lift`, so repeated clipping does not accumulate physical
//! components. Plane normals are kept primitive and then normalized.
//!
//! 3D hulls enumerate supporting planes over vertex triples (regions here
//! have a handful of vertices); 2D hulls use a monotone chain.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::alg::{Alg, AlgError, Exact3, Generator, LatticeVector};
use crate::lattice::{checked_to_internal, Lattice, LatticeTables};

/// A vertex in lattice and internal coordinates.
///
/// For 2D domains the internal z is dropped so that geometry and equality
/// only see the quasiperiodic plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pt<G: Generator> {
    pub lat: LatticeVector<G>,
    pub int: Exact3<G>,
}

impl<G: Generator> Pt<G> {
    pub fn new<L: Lattice<G = G>>(lat: LatticeVector<G>) -> Result<Self, AlgError> {
        let mut int = checked_to_internal::<L>(&lat)?;
        if L::DIM == 2 {
            int[2] = Alg::zero();
        }
        Ok(Self { lat, int })
    }

    /// Point with internal image `int`, lattice coordinates by lift.
    fn lifted(int: Exact3<G>, tables: &LatticeTables<G>) -> Result<Self, AlgError> {
        Ok(Self {
            lat: tables.lift(&int)?,
            int,
        })
    }
}

/// Oriented plane `n·x = d`; the inside is `n·x − d ≤ 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Plane<G: Generator> {
    n: Exact3<G>,
    d: Alg<G>,
}

impl<G: Generator> Plane<G> {
    fn with_normal(n: Exact3<G>, a: &Exact3<G>) -> Result<Option<Self>, AlgError> {
        if n.is_zero() {
            return Ok(None);
        }
        let n = n.primitive()?;
        Ok(Some(Self { d: n.checked_dot(a)?, n }))
    }

    /// Plane through three points, normal along `(b − a) × (c − a)`.
    fn through3(a: &Exact3<G>, b: &Exact3<G>, c: &Exact3<G>) -> Result<Option<Self>, AlgError> {
        let u = b.checked_sub(a)?.primitive()?;
        let v = c.checked_sub(a)?.primitive()?;
        Self::with_normal(u.checked_cross(&v)?, a)
    }

    /// Line through two points of the xy-plane, normal to the right of `a → b`.
    fn through2(a: &Exact3<G>, b: &Exact3<G>) -> Result<Option<Self>, AlgError> {
        let e = b.checked_sub(a)?;
        Self::with_normal(Exact3::new(e[1], e[0].checked_neg()?, Alg::zero()), a)
    }

    pub fn eval(&self, x: &Exact3<G>) -> Result<Alg<G>, AlgError> {
        self.n.checked_dot(x)?.checked_sub(self.d)
    }

    #[inline]
    pub fn side(&self, x: &Exact3<G>) -> Result<i32, AlgError> {
        Ok(self.eval(x)?.signum())
    }

    pub fn flipped(&self) -> Result<Self, AlgError> {
        Ok(Self {
            n: self.n.checked_neg()?,
            d: self.d.checked_neg()?,
        })
    }

    /// First non-zero normal component scaled to ±1, orientation kept.
    fn normalized(&self) -> Result<Self, AlgError> {
        let Some(lead) = self.n.as_slice().iter().find(|c| !c.is_zero()) else {
            return Ok(*self);
        };
        let s = lead.checked_abs()?.recip()?;
        Ok(Self {
            n: self.n.checked_scale(s)?,
            d: self.d.checked_mul(s)?,
        })
    }
}

/// Facet planes of a simplex, oriented outward and normalized.
pub(crate) fn simplex_planes<G: Generator>(pts: &[Pt<G>], dim: usize) -> Result<Vec<Plane<G>>, AlgError> {
    let mut out = Vec::with_capacity(pts.len());
    for k in 0..pts.len() {
        let rest: Vec<&Exact3<G>> = pts
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != k)
            .map(|(_, p)| &p.int)
            .collect();
        let plane = if dim == 2 {
            Plane::through2(rest[0], rest[1])?
        } else {
            Plane::through3(rest[0], rest[1], rest[2])?
        };
        let Some(plane) = plane else { continue };
        let plane = if plane.side(&pts[k].int)? > 0 {
            plane.flipped()?
        } else {
            plane
        };
        out.push(plane.normalized()?);
    }
    Ok(out)
}

#[derive(Clone, Debug)]
struct Facet<G: Generator> {
    plane: Plane<G>,
    verts: Vec<usize>,
}

/// Full-dimensional convex region with exact vertices.
///
/// Invariants: every vertex is extreme; in 2D `verts` is counter-clockwise
/// and facet `i` joins `verts[i]` and `verts[i + 1]`.
#[derive(Clone, Debug)]
pub(crate) struct Hull<G: Generator> {
    pub verts: Vec<Pt<G>>,
    facets: Vec<Facet<G>>,
    dim: usize,
    tables: &'static LatticeTables<G>,
}

/// Vertices and facets of a hull under construction.
type Shape<G> = (Vec<Pt<G>>, Vec<Facet<G>>);

fn dedup_by_internal<G: Generator>(pts: Vec<Pt<G>>) -> Vec<Pt<G>> {
    let mut seen = HashSet::new();
    pts.into_iter().filter(|p| seen.insert(p.int)).collect()
}

/// z component of `(a − o) × (b − o)`.
fn cross_z<G: Generator>(o: &Exact3<G>, a: &Exact3<G>, b: &Exact3<G>) -> Result<Alg<G>, AlgError> {
    let (u, v) = (a.checked_sub(o)?, b.checked_sub(o)?);
    u[0].checked_mul(v[1])?.checked_sub(u[1].checked_mul(v[0])?)
}

/// One half of a monotone chain over `pts`, strict left turns only.
fn half_chain<'a, G: Generator>(pts: impl Iterator<Item = &'a Pt<G>>) -> Result<Vec<Pt<G>>, AlgError> {
    let mut out: Vec<Pt<G>> = Vec::new();
    for p in pts {
        while out.len() >= 2 && cross_z(&out[out.len() - 2].int, &out[out.len() - 1].int, &p.int)?.signum() <= 0 {
            out.pop();
        }
        out.push(*p);
    }
    Ok(out)
}

impl<G: Generator> Hull<G> {
    /// Hull of `pts` in internal space of `L`; `None` if it has zero measure.
    pub fn build<L: Lattice<G = G>>(pts: Vec<Pt<G>>) -> Result<Option<Self>, AlgError> {
        Self::build_in(L::DIM, L::tables(), pts)
    }

    fn build_in(dim: usize, tables: &'static LatticeTables<G>, pts: Vec<Pt<G>>) -> Result<Option<Self>, AlgError> {
        let pts = dedup_by_internal(pts);
        let shape = if dim == 2 {
            Self::build2(pts)?
        } else {
            Self::build3(pts)?
        };
        Ok(shape.map(|(verts, facets)| Self {
            verts,
            facets,
            dim,
            tables,
        }))
    }

    /// Monotone chain with exact orientation; collinear points are dropped.
    fn build2(mut pts: Vec<Pt<G>>) -> Result<Option<Shape<G>>, AlgError> {
        if pts.len() < 3 {
            return Ok(None);
        }
        pts.sort_by(|a, b| (a.int[0], a.int[1]).cmp(&(b.int[0], b.int[1])));
        let mut lower = half_chain(pts.iter())?;
        let mut upper = half_chain(pts.iter().rev())?;
        lower.pop();
        upper.pop();
        lower.extend(upper);
        if lower.len() < 3 {
            return Ok(None);
        }
        let n = lower.len();
        let mut facets = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            let Some(plane) = Plane::through2(&lower[i].int, &lower[j].int)? else {
                return Ok(None);
            };
            facets.push(Facet {
                plane: plane.normalized()?,
                verts: vec![i, j],
            });
        }
        Ok(Some((lower, facets)))
    }

    /// Supporting planes over all vertex triples; a point is a vertex iff it
    /// lies on at least three distinct facets.
    fn build3(pts: Vec<Pt<G>>) -> Result<Option<Shape<G>>, AlgError> {
        let n = pts.len();
        if n < 4 {
            return Ok(None);
        }
        let mut facets: Vec<Facet<G>> = Vec::new();
        let mut seen: HashSet<Plane<G>> = HashSet::new();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let Some(mut plane) = Plane::through3(&pts[i].int, &pts[j].int, &pts[k].int)? else {
                        continue;
                    };
                    let (mut pos, mut neg) = (false, false);
                    let mut on = Vec::new();
                    for (m, p) in pts.iter().enumerate() {
                        match plane.side(&p.int)? {
                            1 => pos = true,
                            -1 => neg = true,
                            _ => on.push(m),
                        }
                        if pos && neg {
                            break;
                        }
                    }
                    if pos && neg {
                        continue;
                    }
                    if !pos && !neg {
                        // every point on one plane: flat
                        return Ok(None);
                    }
                    if pos {
                        plane = plane.flipped()?;
                    }
                    let plane = plane.normalized()?;
                    if seen.insert(plane) {
                        facets.push(Facet { plane, verts: on });
                    }
                }
            }
        }

        let mut incidence = vec![0usize; n];
        for f in &facets {
            for &m in &f.verts {
                incidence[m] += 1;
            }
        }
        let mut remap = vec![usize::MAX; n];
        let mut verts = Vec::new();
        for (m, p) in pts.into_iter().enumerate() {
            if incidence[m] >= 3 {
                remap[m] = verts.len();
                verts.push(p);
            }
        }
        for f in &mut facets {
            f.verts = f
                .verts
                .iter()
                .filter(|&&m| remap[m] != usize::MAX)
                .map(|&m| remap[m])
                .collect();
        }
        Ok(Some((verts, facets)))
    }

    /// Outward facet planes.
    pub fn planes(&self) -> impl Iterator<Item = &Plane<G>> {
        self.facets.iter().map(|f| &f.plane)
    }

    /// Vertex index pairs joined by an edge.
    fn edges(&self) -> Vec<(usize, usize)> {
        if self.dim == 2 {
            return self.facets.iter().map(|f| (f.verts[0], f.verts[1])).collect();
        }
        // Two facets share at most one edge; a pair on two facets is an edge.
        let mut count: HashMap<(usize, usize), usize> = HashMap::new();
        for f in &self.facets {
            for (x, &a) in f.verts.iter().enumerate() {
                for &b in &f.verts[x + 1..] {
                    *count.entry((a.min(b), a.max(b))).or_default() += 1;
                }
            }
        }
        let mut edges: Vec<(usize, usize)> = count
            .into_iter()
            .filter(|&(_, c)| c >= 2)
            .map(|(e, _)| e)
            .collect();
        edges.sort_unstable();
        edges
    }

    /// True iff every point of `pts` is on the outer side of `plane`
    /// (boundary included).
    fn all_outside(plane: &Plane<G>, pts: &[Pt<G>]) -> Result<bool, AlgError> {
        for p in pts {
            if plane.side(&p.int)? < 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True iff some facet plane has every point of `pts` on its outer side
    /// (boundary included).
    pub fn separated_from(&self, pts: &[Pt<G>]) -> Result<bool, AlgError> {
        for pl in self.planes() {
            if Self::all_outside(pl, pts)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Every point of `pts` lies in the closed region.
    pub fn contains_all(&self, pts: &[Pt<G>]) -> Result<bool, AlgError> {
        for p in pts {
            for pl in self.planes() {
                if pl.side(&p.int)? > 0 {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Part of the region on the inner side of `plane`; `None` if that part
    /// has zero measure.
    pub fn clip(&self, plane: &Plane<G>) -> Result<Option<Self>, AlgError> {
        let vals = self
            .verts
            .iter()
            .map(|p| plane.eval(&p.int))
            .collect::<Result<Vec<_>, _>>()?;
        let signs: Vec<i32> = vals.iter().map(Alg::signum).collect();
        if signs.iter().all(|&s| s <= 0) {
            return Ok(Some(self.clone()));
        }
        if signs.iter().all(|&s| s >= 0) {
            return Ok(None);
        }
        let mut pts: Vec<Pt<G>> = self
            .verts
            .iter()
            .zip(&signs)
            .filter(|(_, s)| **s <= 0)
            .map(|(p, _)| *p)
            .collect();
        for (i, j) in self.edges() {
            if signs[i] * signs[j] < 0 {
                let t = vals[i].try_div(vals[i].checked_sub(vals[j])?)?;
                let int = self.verts[i].int.checked_lerp(&self.verts[j].int, t)?;
                pts.push(Pt::lifted(int, self.tables)?);
            }
        }
        Self::build_in(self.dim, self.tables, pts)
    }

    /// Clip by every plane in turn.
    pub fn clip_all<'a>(&self, planes: impl IntoIterator<Item = &'a Plane<G>>) -> Result<Option<Self>, AlgError>
    where
        G: 'a,
    {
        let mut cur = self.clone();
        for pl in planes {
            match cur.clip(pl)? {
                Some(next) => cur = next,
                None => return Ok(None),
            }
        }
        Ok(Some(cur))
    }

    /// Split off the parts outside the half-spaces `planes` (a convex
    /// region given by its facets). The part inside all of them is dropped.
    ///
    /// Returns the pieces and whether anything was removed. A region whose
    /// interior misses the half-space intersection comes back unchanged as a
    /// single piece, whether or not one plane separates it.
    pub fn subtract_planes(&self, planes: &[Plane<G>]) -> Result<(Vec<Self>, bool), AlgError> {
        for pl in planes {
            if Self::all_outside(pl, &self.verts)? {
                return Ok((vec![self.clone()], false));
            }
        }
        let mut out = Vec::new();
        let mut rest = self.clone();
        for pl in planes {
            if let Some(outside) = rest.clip(&pl.flipped()?)? {
                out.push(outside);
            }
            match rest.clip(pl)? {
                Some(r) => rest = r,
                None => return Ok((vec![self.clone()], false)),
            }
        }
        Ok((out, true))
    }

    /// Cyclic order of facet `f`'s vertices around its centroid.
    fn ordered_facet(&self, f: &Facet<G>) -> Result<Vec<usize>, AlgError> {
        let k = f.verts.len();
        if k <= 3 {
            return Ok(f.verts.clone());
        }
        let mut c = Exact3::zeros();
        for &m in &f.verts {
            c = c.checked_add(&self.verts[m].int)?;
        }
        let c = c.checked_scale(Alg::unit_fraction(k as u32))?;
        let n = f.plane.n;
        let rel = f
            .verts
            .iter()
            .map(|&m| self.verts[m].int.checked_sub(&c))
            .collect::<Result<Vec<_>, _>>()?;
        let turn = |a: &Exact3<G>, b: &Exact3<G>| -> Result<i32, AlgError> {
            Ok(n.checked_dot(&a.checked_cross(b)?)?.signum())
        };
        // half-plane of each vertex relative to the first, then pairwise turns
        let u = rel[0];
        let mut half = Vec::with_capacity(k);
        for a in &rel {
            let cr = turn(&u, a)?;
            let ahead = cr > 0 || (cr == 0 && u.checked_dot(a)?.is_positive());
            half.push(usize::from(!ahead));
        }
        let mut turns = vec![vec![0i32; k]; k];
        for x in 0..k {
            for y in (x + 1)..k {
                let s = turn(&rel[x], &rel[y])?;
                turns[x][y] = s;
                turns[y][x] = -s;
            }
        }
        let mut order: Vec<usize> = (0..k).collect();
        order.sort_by(|&x, &y| {
            half[x].cmp(&half[y]).then_with(|| match turns[x][y] {
                1 => Ordering::Less,
                -1 => Ordering::Greater,
                _ => Ordering::Equal,
            })
        });
        Ok(order.into_iter().map(|x| f.verts[x]).collect())
    }

    /// Fan triangulation: from vertex 0 in 2D, coning facet fans to vertex 0
    /// in 3D. Every returned simplex has non-zero measure.
    pub fn triangulate(&self) -> Result<Vec<Vec<LatticeVector<G>>>, AlgError> {
        let v = &self.verts;
        if self.dim == 2 {
            return Ok((1..v.len() - 1)
                .map(|i| vec![v[0].lat, v[i].lat, v[i + 1].lat])
                .collect());
        }
        let mut out = Vec::new();
        for f in &self.facets {
            if f.verts.contains(&0) {
                continue;
            }
            let ring = self.ordered_facet(f)?;
            for i in 1..ring.len() - 1 {
                out.push(vec![v[0].lat, v[ring[0]].lat, v[ring[i]].lat, v[ring[i + 1]].lat]);
            }
        }
        Ok(out)
    }

    /// Exact volume (area in 2D) of the region.
    #[cfg(test)]
    pub fn measure(&self) -> Result<Alg<G>, AlgError> {
        let v = &self.verts;
        if self.dim == 2 {
            let mut twice = Alg::zero();
            for i in 1..v.len() - 1 {
                twice = twice.checked_add(cross_z(&v[0].int, &v[i].int, &v[i + 1].int)?)?;
            }
            return twice.checked_mul(Alg::unit_fraction(2));
        }
        let mut six = Alg::zero();
        for f in &self.facets {
            if f.verts.contains(&0) {
                continue;
            }
            let ring = self.ordered_facet(f)?;
            for i in 1..ring.len() - 1 {
                let a = v[ring[0]].int.checked_sub(&v[0].int)?;
                let b = v[ring[i]].int.checked_sub(&v[0].int)?;
                let c = v[ring[i + 1]].int.checked_sub(&v[0].int)?;
                six = six.checked_add(a.checked_dot(&b.checked_cross(&c)?)?.checked_abs()?)?;
            }
        }
        six.checked_mul(Alg::unit_fraction(6))
    }
}
