use nalgebra::Vector3;

use super::inside::{bounding_sphere, point_in_triangle_3d, spheres_overlap};
use super::segment::segment_segment_intersection;
use super::GeomCfg;

/// Möller–Trumbore: does segment `s0 s1` cross the triangle `t`?
///
/// Returns `(t, u, v)` with `t ∈ [0, 1]` along the segment and barycentrics
/// `u, v ≥ 0`, `u + v ≤ 1` (bounds widened by `eps`). Segments parallel to
/// the triangle plane report `None`; coplanar contact is handled by
/// `triangle_triangle_intersect`.
pub fn segment_plane_intersection(
    s0: &Vector3<f64>,
    s1: &Vector3<f64>,
    t: &[Vector3<f64>; 3],
    cfg: GeomCfg,
) -> Option<(f64, f64, f64)> {
    let dir = s1 - s0;
    let e1 = t[1] - t[0];
    let e2 = t[2] - t[0];
    let h = dir.cross(&e2);
    let det = e1.dot(&h);
    if det.abs() < cfg.eps * cfg.eps {
        return None;
    }
    let inv = 1.0 / det;
    let s = s0 - t[0];
    let u = inv * s.dot(&h);
    if u < -cfg.eps || u > 1.0 + cfg.eps {
        return None;
    }
    let q = s.cross(&e1);
    let v = inv * dir.dot(&q);
    if v < -cfg.eps || u + v > 1.0 + cfg.eps {
        return None;
    }
    let tt = inv * e2.dot(&q);
    if tt < -cfg.eps || tt > 1.0 + cfg.eps {
        return None;
    }
    Some((tt, u, v))
}

/// Orthonormal in-plane basis `(u, v)` for a triangle with normal `n`.
fn plane_coords(n: &Vector3<f64>, origin: &Vector3<f64>) -> impl Fn(&Vector3<f64>) -> Vector3<f64> {
    let n = n.normalize();
    let seed = if n.x.abs() < 0.9 { Vector3::x() } else { Vector3::y() };
    let u = n.cross(&seed).normalize();
    let v = n.cross(&u);
    let o = *origin;
    move |p: &Vector3<f64>| {
        let d = p - o;
        Vector3::new(d.dot(&u), d.dot(&v), 0.0)
    }
}

/// Do two triangles in 3D touch or cross?
///
/// Bounding-sphere rejection, then edge/triangle tests both ways, then the
/// coplanar case (edge/edge in the common plane) and full containment of one
/// triangle in the other.
pub fn triangle_triangle_intersect(a: &[Vector3<f64>; 3], b: &[Vector3<f64>; 3], cfg: GeomCfg) -> bool {
    let (ca, ra) = bounding_sphere(a);
    let (cb, rb) = bounding_sphere(b);
    if !spheres_overlap(&ca, ra, &cb, rb, cfg.eps) {
        return false;
    }
    for i in 0..3 {
        let j = (i + 1) % 3;
        if segment_plane_intersection(&a[i], &a[j], b, cfg).is_some()
            || segment_plane_intersection(&b[i], &b[j], a, cfg).is_some()
        {
            return true;
        }
    }

    let na = (a[1] - a[0]).cross(&(a[2] - a[0]));
    let nb = (b[1] - b[0]).cross(&(b[2] - b[0]));
    let (la, lb) = (na.norm(), nb.norm());
    if la <= cfg.eps || lb <= cfg.eps {
        return false;
    }
    let parallel = na.cross(&nb).norm() <= cfg.eps * la * lb;
    let coplanar = parallel && (na.dot(&(b[0] - a[0])) / la).abs() <= cfg.eps;
    if coplanar {
        let flat = plane_coords(&na, &a[0]);
        let fa = (*a).map(|p| flat(&p));
        let fb = (*b).map(|p| flat(&p));
        for i in 0..3 {
            for j in 0..3 {
                if segment_segment_intersection(&fa[i], &fa[(i + 1) % 3], &fb[j], &fb[(j + 1) % 3], cfg)
                    .is_some()
                {
                    return true;
                }
            }
        }
    }
    point_in_triangle_3d(&a[0], b, cfg) || point_in_triangle_3d(&b[0], a, cfg)
}
