use tracing::debug;

use crate::alg::LatticeVector;
use crate::boolean::{check_disjoint, Prepared};
use crate::lattice::Lattice;
use crate::predicates::GeomCfg;

use super::{Polytope, PolytopeError, Simplex};

/// Build an asymmetric unit from a flat vertex list, `L::DIM + 1` vertices
/// per simplex.
///
/// Errors
/// - `WrongDimension` if `dimension != L::DIM`.
/// - `WrongVertexCount` if the list is empty or not a whole number of
///   simplices.
/// - `DegenerateSimplex` for a simplex of zero internal-space measure.
/// - `SelfIntersecting` if two simplices share interior points.
pub fn build_asymmetric_unit<L: Lattice>(
    vertices: &[LatticeVector<L::G>],
    dimension: usize,
) -> Result<Polytope<L>, PolytopeError> {
    if dimension != L::DIM {
        return Err(PolytopeError::WrongDimension {
            expected: L::DIM,
            got: dimension,
        });
    }
    let per = L::DIM + 1;
    if vertices.is_empty() || vertices.len() % per != 0 {
        return Err(PolytopeError::WrongVertexCount {
            expected: per,
            got: vertices.len(),
        });
    }
    let simplices = vertices
        .chunks(per)
        .enumerate()
        .map(|(i, chunk)| Simplex::new::<L>(chunk).map_err(|e| e.at_index(i)))
        .collect::<Result<Vec<_>, _>>()?;
    let p = Polytope::from_simplices_unchecked(simplices);
    p.validate(GeomCfg::default())?;
    debug!(lattice = L::NAME, simplices = p.len(), "asymmetric unit built");
    Ok(p)
}

impl<L: Lattice> Polytope<L> {
    /// Check the polytope invariants, including pairwise interior-disjointness.
    pub fn validate(&self, cfg: GeomCfg) -> Result<(), PolytopeError> {
        let checked = Self::from_simplices(self.simplices.clone())?;
        let prepared = checked
            .iter()
            .map(Prepared::<L>::new)
            .collect::<Result<Vec<_>, _>>()?;
        check_disjoint(&prepared, cfg)
    }
}
