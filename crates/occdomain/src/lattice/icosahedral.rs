//! Icosahedral 3+3 lattice over Z[τ], point group Ih (order 120).
//!
//! The physical basis is one vector from each antipodal pair of the twelve
//! icosahedron vertices `(±1, ±τ, 0)`, `(0, ±1, ±τ)`, `(±τ, 0, ±1)`; the
//! internal basis is its Galois conjugate (τ ↦ 1 − τ). Every point-group
//! operation therefore permutes the basis up to sign.

use std::sync::OnceLock;

use crate::alg::{int_mat6, Alg, Exact3, Golden, IntMat6};

use super::{Lattice, LatticeTables};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Icosahedral;

type T = Alg<Golden>;

fn v(x: T, y: T, z: T) -> Exact3<Golden> {
    Exact3::new(x, y, z)
}

impl Lattice for Icosahedral {
    type G = Golden;

    const NAME: &'static str = "icosahedral";
    const DIM: usize = 3;
    const GROUP_ORDER: usize = 120;

    fn par_basis() -> [Exact3<Golden>; 6] {
        let (o, z, t) = (T::one(), T::zero(), T::alpha());
        [
            v(o, t, z),
            v(-o, t, z),
            v(z, o, t),
            v(z, o, -t),
            v(t, z, o),
            v(-t, z, o),
        ]
    }

    fn perp_basis() -> [Exact3<Golden>; 6] {
        Self::par_basis().map(|b| Exact3::new(b[0].conj(), b[1].conj(), b[2].conj()))
    }

    fn group_generators() -> Vec<IntMat6> {
        // 5-fold about (0, 1, τ): e1→e5→−e4→e6→e2→e1, e3 fixed.
        let c5 = int_mat6([
            [0, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 1],
            [0, 0, 1, 0, 0, 0],
            [0, 0, 0, 0, -1, 0],
            [1, 0, 0, 0, 0, 0],
            [0, 0, 0, -1, 0, 0],
        ]);
        // 3-fold (x, y, z) ↦ (z, x, y).
        let c3 = int_mat6([
            [0, 0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0, -1],
            [1, 0, 0, 0, 0, 0],
            [0, -1, 0, 0, 0, 0],
            [0, 0, 1, 0, 0, 0],
            [0, 0, 0, 1, 0, 0],
        ]);
        let inversion = -IntMat6::identity();
        vec![c5, c3, inversion]
    }

    /// `2I + N`, N the signed vertex-adjacency of the icosahedron (N² = 5I).
    fn similarity() -> IntMat6 {
        int_mat6([
            [2, 1, 1, 1, 1, -1],
            [1, 2, 1, 1, -1, 1],
            [1, 1, 2, -1, 1, 1],
            [1, 1, -1, 2, -1, -1],
            [1, -1, 1, -1, 2, -1],
            [-1, 1, 1, -1, -1, 2],
        ])
    }

    /// `N − 2I`.
    fn similarity_inverse() -> IntMat6 {
        int_mat6([
            [-2, 1, 1, 1, 1, -1],
            [1, -2, 1, 1, -1, 1],
            [1, 1, -2, -1, 1, 1],
            [1, 1, -1, -2, -1, -1],
            [1, -1, 1, -1, -2, -1],
            [-1, 1, 1, -1, -1, -2],
        ])
    }

    /// τ³ = 2τ + 1.
    fn similarity_factor_par() -> T {
        T::from_int(1) + T::alpha() * 2
    }

    /// τ'³ = 3 − 2τ.
    fn similarity_factor_perp() -> T {
        Self::similarity_factor_par().conj()
    }

    fn tables() -> &'static LatticeTables<Golden> {
        static TABLES: OnceLock<LatticeTables<Golden>> = OnceLock::new();
        TABLES.get_or_init(LatticeTables::build::<Self>)
    }
}
