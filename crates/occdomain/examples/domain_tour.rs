//! Walk through the main operations on both lattice families.
//!
//! Usage:
//!   cargo run -p occdomain --example domain_tour
//!   cargo run -p occdomain --example domain_tour -- debug
//!
//! Prints simplex counts and exact/float volumes after each step. With
//! `debug` the library's tracing events are shown on stderr.

use occdomain::api::{
    build_asymmetric_unit, intersect, outline, remove_duplicate_in_internal_space, scale_by_similarity, shift,
    simplify, subtract, symmetrize, union, volume, Dodecagonal, GeomCfg, Icosahedral, LatticeVector,
    PolytopeError,
};

fn main() -> Result<(), PolytopeError> {
    if std::env::args().nth(1).as_deref() == Some("debug") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    icosahedral()?;
    dodecagonal()?;
    Ok(())
}

fn icosahedral() -> Result<(), PolytopeError> {
    let o = LatticeVector::zeros();
    let e = |k: usize| {
        let mut ints = [0i64; 6];
        ints[k] = 1;
        LatticeVector::from_ints(ints)
    };
    let unit = build_asymmetric_unit::<Icosahedral>(&[o, e(0), e(1), e(2)], 3)?;
    println!("icosahedral unit: {} simplex, volume {}", unit.len(), unit.exact_volume());

    let images = symmetrize(&unit, &o);
    let distinct = remove_duplicate_in_internal_space(&images, GeomCfg::default());
    println!("  symmetrized: {} images, {} distinct", images.len(), distinct.len());

    let inflated = scale_by_similarity(&unit, 1);
    println!("  inflated once: internal volume {:.6}", volume(&inflated));

    let moved = shift(&unit, &(e(0) + e(1)));
    let common = intersect(&unit, &moved)?;
    let rest = subtract(&unit, &moved)?;
    println!(
        "  vs shifted copy: |A∩B| = {}, |A∖B| = {} ({} pieces)",
        common.exact_volume(),
        rest.exact_volume(),
        rest.len()
    );
    Ok(())
}

fn dodecagonal() -> Result<(), PolytopeError> {
    let o = LatticeVector::zeros();
    let e = |k: usize| {
        let mut ints = [0i64; 6];
        ints[k] = 1;
        LatticeVector::from_ints(ints)
    };
    let unit = build_asymmetric_unit::<Dodecagonal>(&[o, e(0), e(1)], 2)?;
    println!("dodecagonal unit: area {}", unit.exact_volume());

    let big = scale_by_similarity(&unit, -2);
    let joined = union(&big, &shift(&unit, &e(3)))?;
    let merged = simplify(&joined, 16);
    println!(
        "  union of a twice-deflated unit and a shifted unit: {} simplices, {} after simplify, outline of {} edges",
        joined.len(),
        merged.len(),
        outline(&merged).len()
    );
    Ok(())
}
