//! Ray/plane intersection tests
//!
//! The table is an infinite horizontal plane here; its rectangle bounds are
//! checked separately by the planner. That split lets the planner tell
//! "missed the table entirely" apart from "bounced" and "hit the net" -
//! three outcomes, three branches.

use glam::Vec3;

use super::surface::{Net, Surface};
use crate::consts::PLANE_EPSILON;

/// Intersect a ray with the (infinite) table plane.
///
/// Returns `None` when the ray is parallel to the plane within epsilon or
/// the plane lies behind the origin. The hit is `origin + dir * t`; the
/// caller checks it against the table bounds.
pub fn intersect_surface_plane(origin: Vec3, dir: Vec3, surface: &Surface) -> Option<Vec3> {
    if dir.y.abs() < PLANE_EPSILON {
        return None;
    }
    let t = (surface.height() - origin.y) / dir.y;
    if t <= 0.0 {
        return None;
    }
    Some(origin + dir * t)
}

/// Intersect a ray with the net plane, bounds included.
///
/// Same plane test on the Z axis, then the hit must fall within the table
/// width and within net height above the table plane.
pub fn intersect_net(origin: Vec3, dir: Vec3, net: &Net) -> Option<Vec3> {
    if dir.z.abs() < PLANE_EPSILON {
        return None;
    }
    let t = (net.z - origin.z) / dir.z;
    if t <= 0.0 {
        return None;
    }
    let hit = origin + dir * t;
    net.contains(hit).then_some(hit)
}

/// Reflect a direction off a surface with the given normal.
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
    dir - 2.0 * dir.dot(normal) * normal
}
