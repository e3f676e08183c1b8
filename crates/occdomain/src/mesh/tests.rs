use super::*;
use crate::alg::{apply_int, Generator, Golden, IntMat6, Sqrt3};
use crate::lattice::{Dodecagonal, Icosahedral};
use crate::polytope::{Polytope, Simplex};
use crate::predicates::GeomCfg;

fn lv<G: Generator>(ints: [i64; 6]) -> LatticeVector<G> {
    LatticeVector::from_ints(ints)
}

fn unit<G: Generator>(k: usize) -> LatticeVector<G> {
    let mut ints = [0i64; 6];
    ints[k] = 1;
    lv(ints)
}

fn poly<L: Lattice>(simplices: &[&[LatticeVector<L::G>]]) -> Polytope<L> {
    let s = simplices
        .iter()
        .map(|vs| Simplex::new::<L>(vs).expect("simplex"))
        .collect();
    Polytope::from_simplices(s).expect("polytope")
}

fn mid<G: Generator>(a: &LatticeVector<G>, b: &LatticeVector<G>) -> LatticeVector<G> {
    a.lerp(b, Alg::unit_fraction(2))
}

#[test]
fn mirror_symmetric_triangle_dedups_to_half_the_group() {
    let o = LatticeVector::<Sqrt3>::zeros();
    let p = poly::<Dodecagonal>(&[&[o, unit(1), lv([0, 1, 0, -1, 0, 0])]]);
    let sym = p.symmetrize(&o);
    assert_eq!(sym.len(), 24);
    let unique = remove_duplicate_in_internal_space(&sym, GeomCfg::default());
    assert_eq!(unique.len(), 12);
    assert_eq!(unique.exact_volume(), p.exact_volume() * Alg::from_int(12));
}

#[test]
fn near_coincident_vertices_collapse() {
    // (2 − √3)^12 ≈ 1.4e-7: the 12th inflation of e1 is within ε of the origin.
    let t = Dodecagonal::tables();
    let mut m = IntMat6::identity();
    for _ in 0..12 {
        m *= t.similarity;
    }
    let tiny = apply_int(&m, &unit::<Sqrt3>(0));
    let a = poly::<Dodecagonal>(&[&[LatticeVector::zeros(), unit(0), unit(1)]]);
    let both = a.concat(&a.shift(&tiny));
    assert_eq!(both.len(), 2);

    let merged = remove_duplicate_vertices(&both, GeomCfg::default());
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.simplices()[1], merged.simplices()[0]);
    assert_eq!(remove_duplicate_in_internal_space(&both, GeomCfg::default()), a);

    // exact-only tolerance keeps them apart
    let strict = GeomCfg { eps: 1e-12 };
    assert_eq!(remove_duplicate_in_internal_space(&both, strict).len(), 2);
}

#[test]
fn periodic_axis_lift_is_a_duplicate() {
    let a = poly::<Dodecagonal>(&[&[LatticeVector::zeros(), unit(0), unit(1)]]);
    let lifted = a.shift(&unit(4)).shift(&unit(5));
    let both = a.concat(&lifted);
    assert_eq!(remove_duplicate_in_internal_space(&both, GeomCfg::default()).len(), 1);
    assert_eq!(vertices(&both).len(), 3);
}

#[test]
fn outline_of_single_and_paired_tetrahedra() {
    let o = LatticeVector::<Golden>::zeros();
    let (e1, e2, e3) = (unit(0), unit(1), unit(2));
    let single = poly::<Icosahedral>(&[&[o, e1, e2, e3]]);
    let out = outline(&single);
    assert_eq!(out.len(), 4);
    assert!(out.open_ridges().is_empty());

    let far = e1 + e2 + e3;
    let pair = poly::<Icosahedral>(&[&[o, e1, e2, e3], &[e1, e2, e3, far]]);
    let out = outline(&pair);
    assert_eq!(out.len(), 6);
    assert!(out.open_ridges().is_empty());

    let mut open = outline(&single);
    open.facets.pop();
    assert_eq!(open.open_ridges().len(), 3);
}

#[test]
fn outline_of_triangle_fan() {
    let o = LatticeVector::<Sqrt3>::zeros();
    let p = poly::<Dodecagonal>(&[&[o, unit(0), unit(1)], &[o, unit(1), unit(2)]]);
    let out = outline(&p);
    assert_eq!(out.len(), 4);
    assert!(out.open_ridges().is_empty());
}

#[test]
fn simplify_undoes_midpoint_splits() {
    let (a, b, c) = (LatticeVector::<Sqrt3>::zeros(), unit(0), unit(1));
    let m1 = mid(&b, &c);
    let m2 = mid(&b, &m1);
    let split = poly::<Dodecagonal>(&[&[a, b, m2], &[a, m2, m1], &[a, m1, c]]);
    let once = simplify(&split, 16);
    assert_eq!(once.len(), 1);
    assert_eq!(once.exact_volume(), split.exact_volume());
    assert_eq!(simplify(&once, 16), once);

    // a single pass only gets halfway
    assert_eq!(simplify(&split, 1).len(), 2);
}

#[test]
fn simplify_merges_split_tetrahedron() {
    let (a, b, c, d) = (LatticeVector::<Golden>::zeros(), unit(0), unit(1), unit(2));
    let m = mid(&c, &d);
    let split = poly::<Icosahedral>(&[&[a, b, c, m], &[a, b, m, d]]);
    let merged = simplify(&split, 8);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.exact_volume(), split.exact_volume());
}

#[test]
fn simplify_keeps_non_mergeable_pairs() {
    let o = LatticeVector::<Sqrt3>::zeros();
    let p = poly::<Dodecagonal>(&[&[o, unit(0), unit(1)], &[o, unit(1), unit(2)]]);
    assert_eq!(simplify(&p, 8), p);
}

#[test]
fn convex_hull_of_bipyramid() {
    let o = LatticeVector::<Golden>::zeros();
    let (e1, e2, e3) = (unit(0), unit(1), unit(2));
    let pair = poly::<Icosahedral>(&[&[o, e1, e2, e3], &[e1, e2, e3, e1 + e2 + e3]]);
    let hull = convex_hull(&pair).expect("hull");
    assert_eq!(exact_volume(&hull), exact_volume(&pair));
    assert!((volume(&hull) - volume(&pair)).abs() < 1e-12);
    assert!(convex_hull(&Polytope::<Icosahedral>::empty()).expect("hull").is_empty());
}

#[test]
fn convex_hull_fills_a_notch() {
    // Wedges at 0°..90° and 90°..210° leave a reflex angle at the origin.
    let o = LatticeVector::<Sqrt3>::zeros();
    let p = poly::<Dodecagonal>(&[&[o, unit(0), unit(3)], &[o, unit(3), lv([0, 1, 0, -1, 0, 0])]]);
    let hull = convex_hull(&p).expect("hull");
    assert!(exact_volume(&hull) > exact_volume(&p));
    assert_eq!(vertices(&hull).len(), 3);
    hull.validate(GeomCfg::default()).expect("hull triangulation is valid");
}
