use nalgebra::Vector3;

use super::{GeomCfg, SegmentPosition};

/// Tri-state position of `p` along `a → b`.
///
/// `s = (p − a)·(b − a) / ‖b − a‖²` is the signed fraction along the line;
/// `p` farther than `eps` from the line is `NotCollinear`.
pub fn point_on_segment(
    p: &Vector3<f64>,
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    cfg: GeomCfg,
) -> SegmentPosition {
    let ab = b - a;
    let ap = p - a;
    let len2 = ab.norm_squared();
    if len2 <= cfg.eps * cfg.eps {
        return if ap.norm() <= cfg.eps {
            SegmentPosition::On
        } else {
            SegmentPosition::NotCollinear
        };
    }
    let s = ap.dot(&ab) / len2;
    if (ap - ab * s).norm() > cfg.eps {
        return SegmentPosition::NotCollinear;
    }
    let tol = cfg.eps / len2.sqrt();
    if s < -tol {
        SegmentPosition::Before
    } else if s > 1.0 + tol {
        SegmentPosition::After
    } else {
        SegmentPosition::On
    }
}

#[inline]
fn cross2(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Intersection of segments `a0 a1` and `b0 b1` in the xy-plane.
///
/// Returns the parameters `(s, t)` of a common point `a0 + s(a1−a0) =
/// b0 + t(b1−b0)`; for collinear overlapping segments, the first endpoint
/// found on the other segment.
pub fn segment_segment_intersection(
    a0: &Vector3<f64>,
    a1: &Vector3<f64>,
    b0: &Vector3<f64>,
    b1: &Vector3<f64>,
    cfg: GeomCfg,
) -> Option<(f64, f64)> {
    let flat = |v: &Vector3<f64>| Vector3::new(v.x, v.y, 0.0);
    let (a0, a1, b0, b1) = (flat(a0), flat(a1), flat(b0), flat(b1));
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = cross2(&r, &s);
    let qp = b0 - a0;
    if denom.abs() < cfg.eps {
        // Parallel: only collinear overlap counts.
        if cross2(&qp, &r).abs() > cfg.eps * r.norm().max(1.0) {
            return None;
        }
        let frac = |p: &Vector3<f64>, o: &Vector3<f64>, d: &Vector3<f64>| {
            let len2 = d.norm_squared();
            if len2 <= 0.0 {
                0.0
            } else {
                (p - o).dot(d) / len2
            }
        };
        if point_on_segment(&b0, &a0, &a1, cfg) == SegmentPosition::On {
            return Some((frac(&b0, &a0, &r), 0.0));
        }
        if point_on_segment(&b1, &a0, &a1, cfg) == SegmentPosition::On {
            return Some((frac(&b1, &a0, &r), 1.0));
        }
        if point_on_segment(&a0, &b0, &b1, cfg) == SegmentPosition::On {
            return Some((0.0, frac(&a0, &b0, &s)));
        }
        return None;
    }
    let u = cross2(&qp, &s) / denom;
    let t = cross2(&qp, &r) / denom;
    let tol_u = cfg.eps / r.norm().max(cfg.eps);
    let tol_t = cfg.eps / s.norm().max(cfg.eps);
    if u < -tol_u || u > 1.0 + tol_u || t < -tol_t || t > 1.0 + tol_t {
        return None;
    }
    Some((u, t))
}
