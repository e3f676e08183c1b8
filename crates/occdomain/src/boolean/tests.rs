use super::*;
use crate::alg::{apply_int, Alg, AlgError, Golden, LatticeVector, Sqrt3};
use crate::lattice::to_physical;
use crate::lattice::{Dodecagonal, Icosahedral};

fn lv<G: crate::alg::Generator>(ints: [i64; 6]) -> LatticeVector<G> {
    LatticeVector::from_ints(ints)
}

fn unit<G: crate::alg::Generator>(k: usize) -> LatticeVector<G> {
    let mut ints = [0i64; 6];
    ints[k] = 1;
    lv(ints)
}

/// Tetrahedron on the origin and the first three basis vectors.
fn corner_tet() -> Polytope<Icosahedral> {
    let s = Simplex::new::<Icosahedral>(&[LatticeVector::zeros(), unit(0), unit(1), unit(2)])
        .expect("tetrahedron");
    Polytope::from_simplices(vec![s]).expect("polytope")
}

/// Lattice vector whose internal image is `(2τ − 3)·perp(e1)`, about 0.236.
fn small_step() -> LatticeVector<Golden> {
    -apply_int(&Icosahedral::tables().similarity, &unit::<Golden>(0))
}

fn corner_triangle() -> Polytope<Dodecagonal> {
    let s = Simplex::new::<Dodecagonal>(&[LatticeVector::zeros(), unit(0), unit(1)]).expect("triangle");
    Polytope::from_simplices(vec![s]).expect("polytope")
}

#[test]
fn intersect_with_zero_shift_is_identity() {
    let a = corner_tet();
    let same = a.shift(&LatticeVector::zeros());
    assert_eq!(a.intersect(&same).expect("intersect"), a);
}

#[test]
fn subtract_self_is_empty() {
    let a = corner_tet();
    assert!(a.subtract(&a).expect("subtract").is_empty());
    let t = corner_triangle();
    assert!(t.subtract(&t).expect("subtract").is_empty());
}

#[test]
fn face_sharing_tetrahedra_have_empty_intersection() {
    let a = corner_tet();
    let far = unit::<Golden>(0) + unit(1) + unit(2);
    let b = Polytope::<Icosahedral>::from_simplices(vec![
        Simplex::new::<Icosahedral>(&[unit(0), unit(1), unit(2), far]).expect("tetrahedron"),
    ])
    .expect("polytope");
    assert!(a.intersect(&b).expect("intersect").is_empty());
    assert_eq!(a.subtract(&b).expect("subtract"), a);
    assert_eq!(b.subtract(&a).expect("subtract"), b);
    let u = a.union(&b).expect("union");
    assert_eq!(u.exact_volume(), a.exact_volume() + b.exact_volume());
}

#[test]
fn vertex_touching_translate_has_empty_intersection() {
    let a = corner_tet();
    let b = a.shift(&unit(0));
    assert!(a.intersect(&b).expect("intersect").is_empty());
    assert_eq!(a.subtract(&b).expect("subtract"), a);
}

#[test]
fn shifted_copy_overlap_is_scaled_copy() {
    let a = corner_tet();
    let b = a.shift(&small_step());
    let common = a.intersect(&b).expect("intersect");
    // T ∩ (T + t·v1) = (1 − t)·T with t = 2τ − 3.
    let k = Alg::<Golden>::from_int(4) - Alg::alpha() * 2;
    assert_eq!(common.exact_volume(), a.exact_volume() * k * k * k);
    assert!(common.exact_volume().is_positive());
}

#[test]
fn boolean_volume_laws() {
    let a = corner_tet();
    let b = a.shift(&small_step());
    let ab = a.intersect(&b).expect("intersect");
    let ba = b.intersect(&a).expect("intersect");
    assert_eq!(ab.exact_volume(), ba.exact_volume());

    let diff = a.subtract(&b).expect("subtract");
    assert_eq!(diff.exact_volume() + ab.exact_volume(), a.exact_volume());

    let u = a.union(&b).expect("union");
    assert_eq!(u.exact_volume(), a.exact_volume() + b.exact_volume() - ab.exact_volume());
    u.validate(GeomCfg::default()).expect("union stays interior-disjoint");
}

#[test]
fn difference_and_overlap_are_disjoint() {
    let a = corner_tet();
    let b = a.shift(&small_step());
    let diff = a.subtract(&b).expect("subtract");
    assert!(diff.intersect(&b).expect("intersect").is_empty());
}

#[test]
fn triangle_with_interior_hole() {
    let big = corner_triangle().scale_by_similarity(-2);
    let small = corner_triangle().shift(&(unit::<Sqrt3>(0) + unit(1)));
    assert_eq!(big.intersect(&small).expect("intersect"), small);

    let ring = big.subtract(&small).expect("subtract");
    assert_eq!(ring.exact_volume(), big.exact_volume() - small.exact_volume());
    assert!(ring.intersect(&small).expect("intersect").is_empty());

    let tight = BoolCfg {
        max_pieces: 2,
        ..BoolCfg::default()
    };
    assert_eq!(
        subtract(&big, &small, &tight),
        Err(PolytopeError::PieceLimitExceeded { limit: 2 })
    );
}

#[test]
fn multi_simplex_operands() {
    // Two tetrahedra sharing a face, intersected with a shifted copy of both.
    let far = unit::<Golden>(0) + unit(1) + unit(2);
    let a = Polytope::<Icosahedral>::from_simplices(vec![
        Simplex::new::<Icosahedral>(&[LatticeVector::zeros(), unit(0), unit(1), unit(2)]).expect("t0"),
        Simplex::new::<Icosahedral>(&[unit(0), unit(1), unit(2), far]).expect("t1"),
    ])
    .expect("polytope");
    a.validate(GeomCfg::default()).expect("valid");
    let b = a.shift(&small_step());
    let ab = a.intersect(&b).expect("intersect");
    let diff = a.subtract(&b).expect("subtract");
    assert_eq!(ab.exact_volume() + diff.exact_volume(), a.exact_volume());
    assert_eq!(ab.exact_volume(), b.intersect(&a).expect("intersect").exact_volume());
}

#[test]
fn empty_operands() {
    let a = corner_tet();
    let e = Polytope::<Icosahedral>::empty();
    assert!(a.intersect(&e).expect("intersect").is_empty());
    assert_eq!(a.subtract(&e).expect("subtract"), a);
    assert!(e.subtract(&a).expect("subtract").is_empty());
    assert_eq!(e.union(&a).expect("union"), a);
}

fn corner_hull<L: Lattice>(p: &Polytope<L>) -> Hull<L::G> {
    let pts = p.simplices()[0]
        .vertices()
        .iter()
        .map(|v| Pt::new::<L>(*v))
        .collect::<Result<Vec<_>, _>>()
        .expect("exact");
    Hull::build::<L>(pts).expect("exact").expect("full-dimensional")
}

fn measure<G: crate::alg::Generator>(h: &Hull<G>) -> Alg<G> {
    h.measure().expect("exact")
}

#[test]
fn hull_clip_partitions_measure() {
    let a = corner_tet();
    let b = a.shift(&small_step());
    let ha = corner_hull(&a);
    assert_eq!(measure(&ha), a.exact_volume());
    let hb = corner_hull(&b);
    for pl in hb.planes() {
        let inside = ha.clip(pl).expect("exact").map_or(Alg::zero(), |h| measure(&h));
        let flipped = pl.flipped().expect("exact");
        let outside = ha.clip(&flipped).expect("exact").map_or(Alg::zero(), |h| measure(&h));
        assert_eq!(inside + outside, measure(&ha));
    }
}

#[test]
fn clip_points_carry_lifted_lattice_coordinates() {
    let a = corner_tet();
    let b = a.shift(&small_step());
    let common = corner_hull(&a).clip_all(corner_hull(&b).planes()).expect("exact").expect("overlap");
    let input: Vec<_> = a.iter().chain(b.iter()).flat_map(|s| s.vertices().to_vec()).collect();
    for v in &common.verts {
        assert_eq!(Pt::new::<Icosahedral>(v.lat).expect("exact").int, v.int);
        if !input.contains(&v.lat) {
            assert!(to_physical::<Icosahedral>(&v.lat).is_zero());
        }
    }
}

#[test]
fn hull_subtract_planes_keeps_the_outside() {
    let big = corner_triangle().scale_by_similarity(-2);
    let small = corner_triangle().shift(&(unit::<Sqrt3>(0) + unit(1)));
    let (hb, hs) = (corner_hull(&big), corner_hull(&small));
    let planes: Vec<_> = hs.planes().copied().collect();
    let (pieces, changed) = hb.subtract_planes(&planes).expect("exact");
    assert!(changed);
    let total = pieces.iter().fold(Alg::zero(), |acc, h| acc + measure(h));
    assert_eq!(total, measure(&hb) - measure(&hs));

    // a hull separated from the planes comes back untouched
    let far = corner_triangle().shift(&lv([5, 0, 0, 0, 0, 0]));
    let (pieces, changed) = corner_hull(&far).subtract_planes(&planes).expect("exact");
    assert!(!changed);
    assert_eq!(pieces.len(), 1);
}

/// Triangle touching the corner triangle at `e1`, outside it, but crossing
/// the lines of both edges through `e1`.
fn wrapped_corner() -> Polytope<Dodecagonal> {
    let s = Simplex::new::<Dodecagonal>(&[
        -unit::<Sqrt3>(1),
        lv([1, -1, -1, 0, 0, 0]),
        unit(0),
    ])
    .expect("triangle");
    Polytope::from_simplices(vec![s]).expect("polytope")
}

#[test]
fn hull_not_separated_by_one_plane_is_kept_whole() {
    let corner = corner_hull(&corner_triangle());
    let planes: Vec<_> = corner.planes().copied().collect();
    let wrapped = corner_hull(&wrapped_corner());
    // no single edge line of the corner triangle separates it
    for pl in &planes {
        let sides: Vec<i32> = wrapped.verts.iter().map(|p| pl.side(&p.int).expect("exact")).collect();
        assert!(sides.iter().any(|&s| s < 0), "{sides:?}");
    }
    let (pieces, changed) = wrapped.subtract_planes(&planes).expect("exact");
    assert!(!changed);
    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[0].verts, wrapped.verts);
}

#[test]
fn subtracting_a_corner_neighbour_keeps_the_simplex() {
    let a = wrapped_corner();
    let b = corner_triangle();
    assert!(a.intersect(&b).expect("intersect").is_empty());
    assert_eq!(a.subtract(&b).expect("subtract"), a);
    assert_eq!(b.subtract(&a).expect("subtract"), b);
}

/// Same tetrahedron listed twice.
fn doubled_tet() -> Polytope<Icosahedral> {
    let s = corner_tet().simplices()[0].clone();
    Polytope::from_simplices(vec![s.clone(), s]).expect("per-simplex checks pass")
}

#[test]
fn overlapping_operands_are_rejected() {
    let twice = doubled_tet();
    let once = corner_tet();
    let overlap = PolytopeError::SelfIntersecting { first: 0, second: 1 };
    assert_eq!(twice.validate(GeomCfg::default()), Err(overlap.clone()));
    assert_eq!(twice.intersect(&twice), Err(overlap.clone()));
    assert_eq!(once.intersect(&twice), Err(overlap.clone()));
    assert_eq!(twice.subtract(&once), Err(overlap.clone()));
    assert_eq!(once.subtract(&twice), Err(overlap.clone()));
    assert_eq!(once.union(&twice), Err(overlap));
}

#[test]
fn raw_symmetrized_images_are_rejected() {
    // images of the corner tetrahedron about the origin overlap each other
    let images = corner_tet().symmetrize(&LatticeVector::zeros());
    let b = corner_tet().shift(&small_step());
    assert!(matches!(
        images.intersect(&b),
        Err(PolytopeError::SelfIntersecting { .. })
    ));
}

/// Wedge between the mirror lines at 0° and 15° of the dodecagonal group:
/// origin, `e1` and the point at 15° reached by `e1 + e4 − e2`.
fn dodecagonal_wedge() -> Polytope<Dodecagonal> {
    let s = Simplex::new::<Dodecagonal>(&[LatticeVector::zeros(), unit(0), lv([1, -1, 0, 1, 0, 0])])
        .expect("triangle");
    Polytope::from_simplices(vec![s]).expect("polytope")
}

/// Lattice vector with a short internal image: `−S·e_k`.
fn short_step<L: Lattice>(k: usize) -> LatticeVector<L::G> {
    -apply_int(&L::tables().similarity, &unit::<L::G>(k))
}

#[test]
fn symmetrized_wedge_tiles_and_combines() {
    let star = dodecagonal_wedge().symmetrize(&LatticeVector::zeros());
    let star = crate::mesh::remove_duplicate_in_internal_space(&star, GeomCfg::default());
    assert_eq!(star.len(), Dodecagonal::GROUP_ORDER);
    star.validate(GeomCfg::default()).expect("images tile");
    assert_eq!(star.exact_volume(), dodecagonal_wedge().exact_volume() * Dodecagonal::GROUP_ORDER as i64);

    assert_eq!(star.intersect(&star).expect("intersect"), star);
    assert!(star.subtract(&star).expect("subtract").is_empty());

    let moved = star.shift(&short_step::<Dodecagonal>(0));
    let common = star.intersect(&moved).expect("intersect");
    let rest = star.subtract(&moved).expect("subtract");
    assert!(common.exact_volume().is_positive());
    assert_eq!(common.exact_volume() + rest.exact_volume(), star.exact_volume());
    assert_eq!(common.exact_volume(), moved.intersect(&star).expect("intersect").exact_volume());
    let u = star.union(&moved).expect("union");
    assert_eq!(u.exact_volume(), star.exact_volume() * 2 - common.exact_volume());
}

/// Convex hull of the point-group orbit of `e1`.
fn orbit_hull<L: Lattice>() -> Polytope<L> {
    let orbit = crate::symmetry::SymmetryGroup::<L>::new().orbit(&unit(0), &LatticeVector::zeros());
    // every orbit point appears in some vertex tuple
    let pts: Vec<Simplex<L::G>> = (0..orbit.len())
        .filter_map(|i| {
            let vs: Vec<_> = (0..=L::DIM).map(|j| orbit[(i + j) % orbit.len()]).collect();
            Simplex::from_slice(&vs)
        })
        .collect();
    crate::mesh::convex_hull(&Polytope::from_simplices_unchecked(pts)).expect("hull")
}

#[test]
fn hull_domain_intersected_with_itself_is_unchanged() {
    let ico = orbit_hull::<Icosahedral>();
    assert!(ico.len() > 1);
    ico.validate(GeomCfg::default()).expect("fan triangulation is valid");
    assert_eq!(ico.intersect(&ico).expect("intersect"), ico);
    assert!(ico.subtract(&ico).expect("subtract").is_empty());

    let dod = orbit_hull::<Dodecagonal>();
    assert!(dod.len() > 1);
    assert_eq!(dod.intersect(&dod).expect("intersect"), dod);
}

/// `c ← c ∩ (a + step_k)` for `steps` rounds, checking `|c ∩ b| + |c \ b| = |c|`
/// each round. Returns how many rounds finished; an overflow may end the
/// chain early but must surface as an error.
fn chain_intersections<L: Lattice>(a: &Polytope<L>, steps: usize) -> usize {
    let mut c = a.clone();
    for k in 0..steps {
        let b = a.shift(&short_step::<L>(k % 3));
        let next = match c.intersect(&b) {
            Ok(next) => next,
            Err(PolytopeError::Arithmetic(AlgError::Overflow)) => return k,
            Err(e) => panic!("round {k}: {e}"),
        };
        let rest = match c.subtract(&b) {
            Ok(rest) => rest,
            Err(PolytopeError::Arithmetic(AlgError::Overflow)) => return k,
            Err(e) => panic!("round {k}: {e}"),
        };
        assert_eq!(next.exact_volume() + rest.exact_volume(), c.exact_volume(), "round {k}");
        assert!(next.exact_volume().is_positive(), "round {k}");
        next.validate(GeomCfg::default()).expect("intersection stays interior-disjoint");
        c = next;
    }
    steps
}

#[test]
fn chained_intersections_of_hull_domains() {
    assert!(chain_intersections(&orbit_hull::<Icosahedral>(), 3) >= 2);
    assert!(chain_intersections(&orbit_hull::<Dodecagonal>(), 5) >= 3);
}

#[test]
fn intersection_respects_the_piece_limit() {
    let a = orbit_hull::<Icosahedral>();
    let b = a.shift(&short_step::<Icosahedral>(0));
    let loose = intersect(&a, &b, &BoolCfg::default()).expect("intersect");
    assert!(loose.len() > 1);
    let tight = BoolCfg {
        max_pieces: 1,
        ..BoolCfg::default()
    };
    assert_eq!(intersect(&a, &b, &tight), Err(PolytopeError::PieceLimitExceeded { limit: 1 }));
}
