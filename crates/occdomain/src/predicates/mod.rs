//! Tolerance-bounded float predicates on internal-space coordinates.
//!
//! Purpose
//! - Cheap, deterministic go/no-go tests used for pruning and for proposing a
//!   classification that exact arithmetic then confirms. Nothing here decides
//!   a vertex coordinate.
//!
//! Conventions
//! - Inputs are `Vector3<f64>`; 2D predicates read `x`, `y` only.
//! - Boundaries are inclusive: "on" counts as inside / intersecting.
//! - One tolerance `GeomCfg::eps` (default 1e-6); containment tests scale it
//!   by the simplex measure unless that measure is itself below `eps`.

mod cfg;
mod inside;
mod intersect;
mod segment;

pub use cfg::{GeomCfg, EPS};

pub use inside::{
    bounding_sphere, inside_tetrahedron, inside_triangle, point_in_triangle_3d, spheres_overlap,
    tetra_volume, triangle_area_2d,
};
pub use intersect::{segment_plane_intersection, triangle_triangle_intersect};
pub use segment::{point_on_segment, segment_segment_intersection};

/// Position of a point relative to a segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentPosition {
    /// On the line, before `a`.
    Before,
    /// On the closed segment.
    On,
    /// On the line, past `b`.
    After,
    NotCollinear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
}
