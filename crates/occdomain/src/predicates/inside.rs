//! Containment by volume/area partition, with a bounding-sphere fast path.

use nalgebra::Vector3;

use super::{Containment, GeomCfg};

/// Centroid and the largest vertex distance from it.
pub fn bounding_sphere(points: &[Vector3<f64>]) -> (Vector3<f64>, f64) {
    if points.is_empty() {
        return (Vector3::zeros(), 0.0);
    }
    let mut c = Vector3::zeros();
    for p in points {
        c += p;
    }
    c /= points.len() as f64;
    let r = points.iter().map(|p| (p - c).norm()).fold(0.0, f64::max);
    (c, r)
}

/// False iff the spheres are separated by more than `eps`.
#[inline]
pub fn spheres_overlap(c1: &Vector3<f64>, r1: f64, c2: &Vector3<f64>, r2: f64, eps: f64) -> bool {
    (c1 - c2).norm() <= r1 + r2 + eps
}

/// Signed volume of the tetrahedron `(a, b, c, d)`.
#[inline]
pub fn tetra_volume(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>, d: &Vector3<f64>) -> f64 {
    (b - a).dot(&(c - a).cross(&(d - a))) / 6.0
}

/// Signed area of the triangle `(a, b, c)` in the xy-plane.
#[inline]
pub fn triangle_area_2d(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)) / 2.0
}

#[inline]
fn tolerance(measure: f64, cfg: GeomCfg) -> f64 {
    if measure > cfg.eps {
        cfg.eps * measure
    } else {
        cfg.eps
    }
}

/// Inside iff the four sub-volumes formed with `p` add up to the volume.
///
/// Points beyond the bounding sphere are `Outside` before any volume is
/// evaluated.
pub fn inside_tetrahedron(p: &Vector3<f64>, v: &[Vector3<f64>; 4], cfg: GeomCfg) -> Containment {
    let (c, r) = bounding_sphere(v);
    if (p - c).norm() > r + cfg.eps {
        return Containment::Outside;
    }
    let vol = tetra_volume(&v[0], &v[1], &v[2], &v[3]).abs();
    let parts = tetra_volume(p, &v[1], &v[2], &v[3]).abs()
        + tetra_volume(&v[0], p, &v[2], &v[3]).abs()
        + tetra_volume(&v[0], &v[1], p, &v[3]).abs()
        + tetra_volume(&v[0], &v[1], &v[2], p).abs();
    if (parts - vol).abs() <= tolerance(vol, cfg) {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// 2D analogue of `inside_tetrahedron` (xy-plane, areas).
pub fn inside_triangle(p: &Vector3<f64>, v: &[Vector3<f64>; 3], cfg: GeomCfg) -> Containment {
    let (c, r) = bounding_sphere(v);
    let d = Vector3::new(p.x - c.x, p.y - c.y, 0.0);
    if d.norm() > r + cfg.eps {
        return Containment::Outside;
    }
    let area = triangle_area_2d(&v[0], &v[1], &v[2]).abs();
    let parts = triangle_area_2d(p, &v[1], &v[2]).abs()
        + triangle_area_2d(&v[0], p, &v[2]).abs()
        + triangle_area_2d(&v[0], &v[1], p).abs();
    if (parts - area).abs() <= tolerance(area, cfg) {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Point in a triangle embedded in 3D: within `eps` of its plane and the
/// three sub-areas add up to the area.
pub fn point_in_triangle_3d(p: &Vector3<f64>, t: &[Vector3<f64>; 3], cfg: GeomCfg) -> bool {
    let n = (t[1] - t[0]).cross(&(t[2] - t[0]));
    let n_norm = n.norm();
    if n_norm <= cfg.eps {
        return false;
    }
    if (n.dot(&(p - t[0])) / n_norm).abs() > cfg.eps {
        return false;
    }
    let area = n_norm / 2.0;
    let sub = |a: &Vector3<f64>, b: &Vector3<f64>| (a - p).cross(&(b - p)).norm() / 2.0;
    let parts = sub(&t[0], &t[1]) + sub(&t[1], &t[2]) + sub(&t[2], &t[0]);
    (parts - area).abs() <= tolerance(area, cfg)
}
