//! Exact square matrices and integer 6×6 lattice maps.

use nalgebra::Matrix6;

use super::generator::Generator;
use super::value::Alg;
use super::vector::{AlgVec, LatticeVector};
use super::AlgError;

/// Integer linear map on the 6D lattice (symmetry operations, inflations).
pub type IntMat6 = Matrix6<i64>;

/// Row-major integer table → `IntMat6`.
pub fn int_mat6(rows: [[i64; 6]; 6]) -> IntMat6 {
    IntMat6::from_fn(|i, j| rows[i][j])
}

/// `m · v` with exact components.
pub fn apply_int<G: Generator>(m: &IntMat6, v: &LatticeVector<G>) -> LatticeVector<G> {
    let mut out = LatticeVector::zeros();
    for i in 0..6 {
        let mut acc = Alg::zero();
        for j in 0..6 {
            let k = m[(i, j)];
            if k != 0 {
                acc += v[j] * k;
            }
        }
        out[i] = acc;
    }
    out
}

/// Square matrix of exact scalars, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlgMat<G: Generator, const N: usize>(pub [[Alg<G>; N]; N]);

impl<G: Generator, const N: usize> AlgMat<G, N> {
    pub fn zeros() -> Self {
        Self([[Alg::zero(); N]; N])
    }

    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.0[i][i] = Alg::one();
        }
        m
    }

    pub fn from_rows(rows: [AlgVec<G, N>; N]) -> Self {
        Self(rows.map(|r| r.0))
    }

    /// `self · v`.
    pub fn mul_vec(&self, v: &AlgVec<G, N>) -> Result<AlgVec<G, N>, AlgError> {
        let mut out = AlgVec::zeros();
        for (slot, row) in out.0.iter_mut().zip(&self.0) {
            *slot = AlgVec(*row).checked_dot(v)?;
        }
        Ok(out)
    }

    /// Exact determinant by Gaussian elimination over Q(α).
    pub fn determinant(&self) -> Result<Alg<G>, AlgError> {
        let mut a = self.0;
        let mut det = Alg::one();
        for col in 0..N {
            let Some(pivot) = (col..N).find(|&r| !a[r][col].is_zero()) else {
                return Ok(Alg::zero());
            };
            if pivot != col {
                a.swap(pivot, col);
                det = det.checked_neg()?;
            }
            let p = a[col][col];
            det = det.checked_mul(p)?;
            let inv = p.recip()?;
            for r in col + 1..N {
                if a[r][col].is_zero() {
                    continue;
                }
                let f = a[r][col].checked_mul(inv)?;
                for c in col..N {
                    a[r][c] = a[r][c].checked_sub(f.checked_mul(a[col][c])?)?;
                }
            }
        }
        Ok(det)
    }

    /// Solve `self · x = b`; `None` when singular.
    pub fn solve(&self, b: &AlgVec<G, N>) -> Result<Option<AlgVec<G, N>>, AlgError> {
        let mut a = self.0;
        let mut rhs = b.0;
        for col in 0..N {
            let Some(pivot) = (col..N).find(|&r| !a[r][col].is_zero()) else {
                return Ok(None);
            };
            a.swap(pivot, col);
            rhs.swap(pivot, col);
            let inv = a[col][col].recip()?;
            for c in col..N {
                a[col][c] = a[col][c].checked_mul(inv)?;
            }
            rhs[col] = rhs[col].checked_mul(inv)?;
            for r in 0..N {
                if r == col || a[r][col].is_zero() {
                    continue;
                }
                let f = a[r][col];
                for c in col..N {
                    a[r][c] = a[r][c].checked_sub(f.checked_mul(a[col][c])?)?;
                }
                rhs[r] = rhs[r].checked_sub(f.checked_mul(rhs[col])?)?;
            }
        }
        Ok(Some(AlgVec(rhs)))
    }

    /// Exact inverse, column by column; `None` when singular.
    pub fn inverse(&self) -> Result<Option<Self>, AlgError> {
        let mut out = Self::zeros();
        for j in 0..N {
            let mut e = AlgVec::zeros();
            e[j] = Alg::one();
            let Some(col) = self.solve(&e)? else {
                return Ok(None);
            };
            for i in 0..N {
                out.0[i][j] = col[i];
            }
        }
        Ok(Some(out))
    }
}
