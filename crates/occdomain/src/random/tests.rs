use super::*;
use crate::boolean::{intersect, subtract, union, BoolCfg};
use crate::lattice::{Dodecagonal, Icosahedral};

fn tok(seed: u64, index: u64) -> ReplayToken {
    ReplayToken { seed, index }
}

#[test]
fn reproducible_draw() {
    let cfg = RandomCfg {
        simplices: 3,
        ..RandomCfg::default()
    };
    let a = random_polytope::<Icosahedral>(&cfg, tok(42, 7)).expect("draw");
    let b = random_polytope::<Icosahedral>(&cfg, tok(42, 7)).expect("draw");
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
    a.validate(cfg.geom).expect("valid asymmetric unit");
}

#[test]
fn tokens_index_distinct_draws() {
    let cfg = RandomCfg {
        coord_range: 2,
        ..RandomCfg::default()
    };
    let draws: Vec<_> = (0..8)
        .map(|i| random_polytope::<Dodecagonal>(&cfg, tok(1, i)).expect("draw"))
        .collect();
    let distinct = draws
        .iter()
        .enumerate()
        .filter(|(i, d)| draws[..*i].iter().all(|e| e != *d))
        .count();
    assert!(distinct > 1);
}

#[test]
fn dodecagonal_draws_leave_periodic_axes_zero() {
    let cfg = RandomCfg {
        simplices: 2,
        coord_range: 3,
        ..RandomCfg::default()
    };
    let p = random_polytope::<Dodecagonal>(&cfg, tok(9, 0)).expect("draw");
    for s in &p {
        assert_eq!(s.vertices().len(), 3);
        for v in s.vertices() {
            assert!(v.0[4].is_zero() && v.0[5].is_zero());
        }
    }
}

#[test]
fn stream_replays_from_token() {
    let cfg = RandomCfg {
        simplices: 2,
        ..RandomCfg::default()
    };
    let mut gen = RandomDomains::<Icosahedral>::new(cfg, 5).expect("generator");
    let first = gen.generate_next().expect("sample");
    let second = gen.generate_next().expect("sample");
    assert_ne!(first.replay, second.replay);
    assert_eq!(gen.regenerate(&first.replay).expect("replay"), first.polytope);
    assert_eq!(gen.regenerate(&second.replay).expect("replay"), second.polytope);
}

#[test]
fn invalid_params_are_rejected() {
    let bad = RandomCfg {
        simplices: 0,
        ..RandomCfg::default()
    };
    assert!(matches!(
        random_polytope::<Icosahedral>(&bad, tok(0, 0)),
        Err(RandomError::InvalidParams { .. })
    ));
    let bad = RandomCfg {
        coord_range: 0,
        ..RandomCfg::default()
    };
    assert!(RandomDomains::<Dodecagonal>::new(bad, 0).is_err());
}

fn check_volume_laws<L: Lattice>(a: &Polytope<L>, b: &Polytope<L>) {
    let cfg = BoolCfg::default();
    let common = intersect(a, b, &cfg).expect("intersect");
    let diff = subtract(a, b, &cfg).expect("subtract");
    let all = union(a, b, &cfg).expect("union");
    assert_eq!(common.exact_volume() + diff.exact_volume(), a.exact_volume());
    assert_eq!(
        all.exact_volume() + common.exact_volume(),
        a.exact_volume() + b.exact_volume()
    );
    assert!(intersect(&diff, b, &cfg).expect("intersect").is_empty());
}

#[test]
fn random_triangles_satisfy_volume_laws() {
    let cfg = RandomCfg::default();
    for index in 0..16 {
        let a = random_polytope::<Dodecagonal>(&cfg, tok(3, 2 * index)).expect("draw");
        let b = random_polytope::<Dodecagonal>(&cfg, tok(3, 2 * index + 1)).expect("draw");
        check_volume_laws(&a, &b);
    }
}

#[test]
fn random_tetrahedra_satisfy_volume_laws() {
    let cfg = RandomCfg::default();
    for index in 0..4 {
        let a = random_polytope::<Icosahedral>(&cfg, tok(11, 2 * index)).expect("draw");
        let b = random_polytope::<Icosahedral>(&cfg, tok(11, 2 * index + 1)).expect("draw");
        check_volume_laws(&a, &b);
    }
}
