//! Simplices with exact 6D lattice vertices.

use nalgebra::Vector3;

use crate::alg::{Alg, AlgError, AlgMat, Exact3, Generator, LatticeVector};
use crate::lattice::{checked_to_internal, to_internal, to_internal_f64, Lattice};
use crate::predicates::bounding_sphere;

use super::PolytopeError;

/// A 2-simplex (dodecagonal domains) or 3-simplex (icosahedral domains).
///
/// Vertex order is significant only for orientation; the occupied region is
/// the convex hull of the vertices' internal-space images.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Simplex<G: Generator> {
    Triangle([LatticeVector<G>; 3]),
    Tetrahedron([LatticeVector<G>; 4]),
}

impl<G: Generator> Simplex<G> {
    /// Checked constructor: `L::DIM + 1` vertices spanning a non-zero measure
    /// in internal space.
    pub fn new<L: Lattice<G = G>>(vertices: &[LatticeVector<G>]) -> Result<Self, PolytopeError> {
        let s = Self::from_slice(vertices).ok_or(PolytopeError::WrongVertexCount {
            expected: L::DIM + 1,
            got: vertices.len(),
        })?;
        if s.vertices().len() != L::DIM + 1 {
            return Err(PolytopeError::WrongVertexCount { expected: L::DIM + 1, got: vertices.len() });
        }
        if s.checked_signed_measure::<L>()?.is_zero() {
            return Err(PolytopeError::DegenerateSimplex { index: 0 });
        }
        Ok(s)
    }

    /// Variant chosen by vertex count; `None` unless 3 or 4 vertices.
    pub(crate) fn from_slice(vertices: &[LatticeVector<G>]) -> Option<Self> {
        match vertices {
            [a, b, c] => Some(Self::Triangle([*a, *b, *c])),
            [a, b, c, d] => Some(Self::Tetrahedron([*a, *b, *c, *d])),
            _ => None,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[LatticeVector<G>] {
        match self {
            Self::Triangle(v) => v,
            Self::Tetrahedron(v) => v,
        }
    }

    /// Same variant with every vertex mapped through `f`.
    ///
    /// Callers guarantee `f` is affine and invertible on the lattice, so
    /// non-degeneracy carries over.
    pub(crate) fn map_vertices(&self, mut f: impl FnMut(&LatticeVector<G>) -> LatticeVector<G>) -> Self {
        match self {
            Self::Triangle(v) => Self::Triangle([f(&v[0]), f(&v[1]), f(&v[2])]),
            Self::Tetrahedron(v) => Self::Tetrahedron([f(&v[0]), f(&v[1]), f(&v[2]), f(&v[3])]),
        }
    }

    /// Exact internal-space images of the vertices. For 2D domains the
    /// periodic z component is dropped.
    pub fn internal<L: Lattice<G = G>>(&self) -> Vec<Exact3<G>> {
        self.vertices()
            .iter()
            .map(|v| {
                let mut x = to_internal::<L>(v);
                if L::DIM == 2 {
                    x[2] = Alg::zero();
                }
                x
            })
            .collect()
    }

    pub fn internal_f64<L: Lattice<G = G>>(&self) -> Vec<Vector3<f64>> {
        self.vertices()
            .iter()
            .map(|v| {
                let mut x = to_internal_f64::<L>(v);
                if L::DIM == 2 {
                    x.z = 0.0;
                }
                x
            })
            .collect()
    }

    /// `det[v1 − v0, v2 − v0, v3 − v0]` (tetrahedra) or
    /// `det[v1 − v0, v2 − v0]` over the first two coordinates (triangles):
    /// 6× the signed volume or 2× the signed area, in internal space.
    pub fn checked_signed_measure<L: Lattice<G = G>>(&self) -> Result<Alg<G>, AlgError> {
        let x = self
            .vertices()
            .iter()
            .map(checked_to_internal::<L>)
            .collect::<Result<Vec<_>, _>>()?;
        let a = x[1].checked_sub(&x[0])?;
        let b = x[2].checked_sub(&x[0])?;
        match self {
            Self::Triangle(_) => AlgMat([[a[0], a[1]], [b[0], b[1]]]).determinant(),
            Self::Tetrahedron(_) => AlgMat::from_rows([a, b, x[3].checked_sub(&x[0])?]).determinant(),
        }
    }

    /// `checked_signed_measure`; panics on coefficient overflow.
    pub fn signed_measure<L: Lattice<G = G>>(&self) -> Alg<G> {
        self.checked_signed_measure::<L>()
            .unwrap_or_else(|e| panic!("measure of {self:?}: {e}"))
    }

    /// Exact volume (area for triangles).
    pub fn exact_measure<L: Lattice<G = G>>(&self) -> Alg<G> {
        let m = self.signed_measure::<L>().abs();
        match self {
            Self::Triangle(_) => m * Alg::unit_fraction(2),
            Self::Tetrahedron(_) => m * Alg::unit_fraction(6),
        }
    }

    pub fn measure_f64<L: Lattice<G = G>>(&self) -> f64 {
        self.exact_measure::<L>().to_f64()
    }

    /// Float bounding sphere of the internal-space image.
    pub fn bounding_sphere<L: Lattice<G = G>>(&self) -> (Vector3<f64>, f64) {
        bounding_sphere(&self.internal_f64::<L>())
    }

    /// Facets as vertex lists: the `k`-th facet omits vertex `k`.
    pub fn facets(&self) -> Vec<Vec<LatticeVector<G>>> {
        let v = self.vertices();
        (0..v.len())
            .map(|skip| {
                v.iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, x)| *x)
                    .collect()
            })
            .collect()
    }
}
