//! Linear maps from the 6D lattice to physical and internal space.
//!
//! All four maps are pure and total. The exact variants are the reference;
//! the float variants feed predicates only. Like the scalar operators, the
//! exact variants panic on coefficient overflow; `checked_to_internal`
//! reports it instead.

use nalgebra::Vector3;

use crate::alg::{AlgError, Exact3, LatticeVector};

use super::Lattice;

fn combine<L: Lattice>(basis: &[Exact3<L::G>; 6], v: &LatticeVector<L::G>) -> Result<Exact3<L::G>, AlgError> {
    let mut out = Exact3::zeros();
    for (b, c) in basis.iter().zip(v.as_slice()) {
        if c.is_zero() {
            continue;
        }
        out = out.checked_add(&b.checked_scale(*c)?)?;
    }
    Ok(out)
}

/// Exact physical-space coordinates of `v`.
pub fn to_physical<L: Lattice>(v: &LatticeVector<L::G>) -> Exact3<L::G> {
    combine::<L>(&L::tables().par, v).unwrap_or_else(|e| panic!("physical image of {v:?}: {e}"))
}

/// Exact internal-space coordinates of `v`.
pub fn to_internal<L: Lattice>(v: &LatticeVector<L::G>) -> Exact3<L::G> {
    checked_to_internal::<L>(v).unwrap_or_else(|e| panic!("internal image of {v:?}: {e}"))
}

pub fn checked_to_internal<L: Lattice>(v: &LatticeVector<L::G>) -> Result<Exact3<L::G>, AlgError> {
    combine::<L>(&L::tables().perp, v)
}

pub fn to_physical_f64<L: Lattice>(v: &LatticeVector<L::G>) -> Vector3<f64> {
    L::tables().par_f64 * v.to_f64()
}

/// Float internal-space coordinates of `v`, for predicates.
pub fn to_internal_f64<L: Lattice>(v: &LatticeVector<L::G>) -> Vector3<f64> {
    L::tables().perp_f64 * v.to_f64()
}
