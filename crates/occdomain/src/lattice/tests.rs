use proptest::prelude::*;

use super::*;
use crate::alg::{apply_int, Golden, LatticeVector, Sqrt3};

fn basis_vector<G: Generator>(k: usize) -> LatticeVector<G> {
    let mut ints = [0i64; 6];
    ints[k] = 1;
    LatticeVector::from_ints(ints)
}

fn gram<G: Generator>(basis: &[Exact3<G>; 6]) -> [[Alg<G>; 6]; 6] {
    let mut g = [[Alg::zero(); 6]; 6];
    for i in 0..6 {
        for j in 0..6 {
            g[i][j] = basis[i].dot(&basis[j]);
        }
    }
    g
}

/// `mᵀ·G·m == G`: `m` is an isometry of the projected basis.
fn preserves<G: Generator>(m: &IntMat6, g: &[[Alg<G>; 6]; 6]) -> bool {
    for i in 0..6 {
        for j in 0..6 {
            let mut acc = Alg::zero();
            for k in 0..6 {
                for l in 0..6 {
                    let c = m[(k, i)] * m[(l, j)];
                    if c != 0 {
                        acc += g[k][l] * c;
                    }
                }
            }
            if acc != g[i][j] {
                return false;
            }
        }
    }
    true
}

fn check_group<L: Lattice>() {
    let t = L::tables();
    assert_eq!(t.group.len(), L::GROUP_ORDER, "{}", L::NAME);
    assert_eq!(t.group[0], IntMat6::identity());
    let gp = gram(&t.par);
    let gq = gram(&t.perp);
    for (i, m) in t.group.iter().enumerate() {
        assert!(preserves(m, &gp), "{} op {i} breaks physical metric", L::NAME);
        assert!(preserves(m, &gq), "{} op {i} breaks internal metric", L::NAME);
    }
}

fn check_similarity<L: Lattice>() {
    let t = L::tables();
    assert_eq!(t.similarity * t.similarity_inv, IntMat6::identity());
    let fp = L::similarity_factor_par();
    let fq = L::similarity_factor_perp();
    for k in 0..6 {
        let e = basis_vector::<L::G>(k);
        let se = apply_int(&t.similarity, &e);
        assert_eq!(to_physical::<L>(&se), to_physical::<L>(&e).scale(fp), "{} par e{k}", L::NAME);
        assert_eq!(to_internal::<L>(&se), to_internal::<L>(&e).scale(fq), "{} perp e{k}", L::NAME);
    }
}

#[test]
fn icosahedral_group_is_ih() {
    check_group::<Icosahedral>();
}

#[test]
fn dodecagonal_group_is_12mm() {
    check_group::<Dodecagonal>();
}

#[test]
fn icosahedral_inflation() {
    check_similarity::<Icosahedral>();
    // τ³ · τ'³ = −1
    let n = Icosahedral::similarity_factor_par() * Icosahedral::similarity_factor_perp();
    assert_eq!(n, Alg::from_int(-1));
}

#[test]
fn dodecagonal_inflation() {
    check_similarity::<Dodecagonal>();
    // (2 + √3)(2 − √3) = 1
    let n = Dodecagonal::similarity_factor_par() * Dodecagonal::similarity_factor_perp();
    assert_eq!(n, Alg::one());
}

#[test]
fn dodecagonal_internal_angles_are_quintupled() {
    // e2 sits at 30° physically and at 150° internally.
    let e2 = basis_vector::<Sqrt3>(1);
    let x = to_internal::<Dodecagonal>(&e2);
    assert!((x[0].to_f64() + 3f64.sqrt() / 2.0).abs() < 1e-12);
    assert!((x[1].to_f64() - 0.5).abs() < 1e-12);
    // Periodic axes do not mix.
    let e5 = basis_vector::<Sqrt3>(4);
    let e6 = basis_vector::<Sqrt3>(5);
    assert_eq!(to_internal::<Dodecagonal>(&e5), Exact3::zeros());
    assert_eq!(to_physical::<Dodecagonal>(&e6), Exact3::zeros());
}

#[test]
fn icosahedral_basis_is_conjugate() {
    let t = Icosahedral::tables();
    for k in 0..6 {
        for c in 0..3 {
            assert_eq!(t.perp[k][c], t.par[k][c].conj());
        }
    }
}

#[test]
fn lift_keeps_the_internal_image_and_drops_the_physical_one() {
    let tau = Alg::<Golden>::alpha();
    let x = Exact3::new(tau * Alg::unit_fraction(3), Alg::from_int(-2), Alg::one() - tau);
    let v = Icosahedral::tables().lift(&x).unwrap();
    assert_eq!(to_internal::<Icosahedral>(&v), x);
    assert!(to_physical::<Icosahedral>(&v).is_zero());

    let s = Alg::<Sqrt3>::alpha();
    let y = Exact3::new(s * Alg::unit_fraction(2), Alg::unit_fraction(5), Alg::zero());
    let w = Dodecagonal::tables().lift(&y).unwrap();
    assert_eq!(to_internal::<Dodecagonal>(&w), y);
    assert!(to_physical::<Dodecagonal>(&w).is_zero());
}

proptest! {
    #[test]
    fn lift_of_a_lattice_image_differs_by_a_physical_vector(a in prop::array::uniform6(-20i64..20)) {
        let v = LatticeVector::<Golden>::from_ints(a);
        let lifted = Icosahedral::tables().lift(&to_internal::<Icosahedral>(&v)).unwrap();
        prop_assert!(to_internal::<Icosahedral>(&(v - lifted)).is_zero());
        prop_assert_eq!(to_physical::<Icosahedral>(&(v - lifted)), to_physical::<Icosahedral>(&v));
    }

    #[test]
    fn projections_are_linear(a in prop::array::uniform6(-20i64..20), b in prop::array::uniform6(-20i64..20)) {
        let va = LatticeVector::<Golden>::from_ints(a);
        let vb = LatticeVector::<Golden>::from_ints(b);
        let sum = va + vb;
        prop_assert_eq!(
            to_internal::<Icosahedral>(&sum),
            to_internal::<Icosahedral>(&va) + to_internal::<Icosahedral>(&vb)
        );
        let f = to_internal_f64::<Icosahedral>(&sum);
        let x = to_internal::<Icosahedral>(&sum).to_f64();
        prop_assert!((f - x).norm() < 1e-9);
    }

    #[test]
    fn physical_float_matches_exact(a in prop::array::uniform6(-20i64..20)) {
        let v = LatticeVector::<Sqrt3>::from_ints(a);
        let f = to_physical_f64::<Dodecagonal>(&v);
        let x = to_physical::<Dodecagonal>(&v).to_f64();
        prop_assert!((f - x).norm() < 1e-9);
    }
}
