//! Dodecagonal 2+2 lattice (plus two periodic axes) over Z[√3], point group
//! 12mm (order 24).
//!
//! Components 1–4 span the quasiperiodic plane: physical images at 0°, 30°,
//! 60°, 90°, internal images at five times those angles (the √3 ↦ −√3
//! conjugate). Component 5 is the periodic physical z axis, component 6 the
//! internal z axis.

use std::sync::OnceLock;

use crate::alg::{int_mat6, Alg, Exact3, IntMat6, Sqrt3};

use super::{Lattice, LatticeTables};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dodecagonal;

type A = Alg<Sqrt3>;

fn half() -> A {
    A::canonical(1, 0, 2).unwrap_or_else(|e| panic!("1/2: {e}"))
}

fn half_root3() -> A {
    A::canonical(0, 1, 2).unwrap_or_else(|e| panic!("√3/2: {e}"))
}

impl Lattice for Dodecagonal {
    type G = Sqrt3;

    const NAME: &'static str = "dodecagonal";
    const DIM: usize = 2;
    const GROUP_ORDER: usize = 24;

    fn par_basis() -> [Exact3<Sqrt3>; 6] {
        let (o, z, h, s) = (A::one(), A::zero(), half(), half_root3());
        [
            Exact3::new(o, z, z),
            Exact3::new(s, h, z),
            Exact3::new(h, s, z),
            Exact3::new(z, o, z),
            Exact3::new(z, z, o),
            Exact3::new(z, z, z),
        ]
    }

    fn perp_basis() -> [Exact3<Sqrt3>; 6] {
        let (o, z, h, s) = (A::one(), A::zero(), half(), half_root3());
        [
            Exact3::new(o, z, z),
            Exact3::new(-s, h, z),
            Exact3::new(h, -s, z),
            Exact3::new(z, o, z),
            Exact3::new(z, z, z),
            Exact3::new(z, z, o),
        ]
    }

    fn group_generators() -> Vec<IntMat6> {
        // 12-fold: e1→e2→e3→e4→e3−e1 (30° steps in physical space).
        let c12 = int_mat6([
            [0, 0, 0, -1, 0, 0],
            [1, 0, 0, 0, 0, 0],
            [0, 1, 0, 1, 0, 0],
            [0, 0, 1, 0, 0, 0],
            [0, 0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0, 1],
        ]);
        // Mirror y ↦ −y: e2 ↦ e2−e4, e3 ↦ e1−e3, e4 ↦ −e4.
        let mirror = int_mat6([
            [1, 0, 1, 0, 0, 0],
            [0, 1, 0, 0, 0, 0],
            [0, 0, -1, 0, 0, 0],
            [0, -1, 0, -1, 0, 0],
            [0, 0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0, 1],
        ]);
        vec![c12, mirror]
    }

    /// `e_k ↦ 2e_k + e_{k+1} + e_{k−1}` in 30° steps: scales by 2 ± √3.
    fn similarity() -> IntMat6 {
        int_mat6([
            [2, 1, 0, -1, 0, 0],
            [2, 2, 1, 0, 0, 0],
            [0, 1, 2, 2, 0, 0],
            [-1, 0, 1, 2, 0, 0],
            [0, 0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0, 1],
        ])
    }

    fn similarity_inverse() -> IntMat6 {
        int_mat6([
            [2, -1, 0, 1, 0, 0],
            [-2, 2, -1, 0, 0, 0],
            [0, -1, 2, -2, 0, 0],
            [1, 0, -1, 2, 0, 0],
            [0, 0, 0, 0, 1, 0],
            [0, 0, 0, 0, 0, 1],
        ])
    }

    /// 2 + √3.
    fn similarity_factor_par() -> A {
        A::from_int(2) + A::alpha()
    }

    /// 2 − √3.
    fn similarity_factor_perp() -> A {
        Self::similarity_factor_par().conj()
    }

    fn tables() -> &'static LatticeTables<Sqrt3> {
        static TABLES: OnceLock<LatticeTables<Sqrt3>> = OnceLock::new();
        TABLES.get_or_init(LatticeTables::build::<Self>)
    }
}
