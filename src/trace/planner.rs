//! Multi-bounce trajectory planning
//!
//! The tricky part of Rally Trace: given one launch, build the whole
//! waypoint sequence analytically - plane intersections, the reflection
//! law, a bounded gravity bias per bounce, and optional randomized spin.
//! The follower then replays the finished path at constant speed.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::intersect::{intersect_net, intersect_surface_plane, reflect};
use super::spin::apply_spin;
use super::surface::Surface;
use crate::config::TraceConfig;
use crate::consts::{BOUNCE_OFFSET, ESCAPE_DISTANCE, WAYPOINT_SPACING};

/// Diagnostic fields describing the actor that produced a launch.
///
/// Carried through the trace and echoed back unchanged; nothing in here
/// affects the trajectory math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LaunchDiagnostics {
    pub actor_direction: Vec3,
    pub actor_angle: f32,
    pub actor_speed: f32,
    pub force: f32,
}

/// One launch event
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaunchParams {
    pub origin: Vec3,
    /// Normalized on entry to [`plan`]
    pub direction: Vec3,
    /// Traversal speed handed to the follower (world units per second)
    pub speed: f32,
    pub diag: LaunchDiagnostics,
}

/// How a trace ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEnd {
    /// The ball struck the net; always terminal, bounce budget or not
    NetHit,
    /// The ray left the table (out-of-bounds hit or no hit at all)
    Escaped,
    /// The bounce budget ran out; a normal termination, not an error
    BounceLimit,
}

/// A fully planned trajectory.
///
/// Owned by the planner while being built, then handed read-only to the
/// follower. The first waypoint is always the launch origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracedPath {
    /// Ordered waypoints, bounce points and interpolated points alike
    pub waypoints: Vec<Vec3>,
    /// Table hit points only, in bounce order
    pub bounce_points: Vec<Vec3>,
    pub end: TraceEnd,
}

impl TracedPath {
    /// Placeholder before any trace has run; no waypoints means no trace
    pub fn empty() -> Self {
        Self {
            waypoints: Vec::new(),
            bounce_points: Vec::new(),
            end: TraceEnd::Escaped,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn bounce_count(&self) -> usize {
        self.bounce_points.len()
    }

    pub fn last(&self) -> Option<Vec3> {
        self.waypoints.last().copied()
    }

    /// Total polyline length, for diagnostics
    pub fn total_length(&self) -> f32 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}

/// Trace one launch into a complete waypoint sequence.
///
/// Runs synchronously to completion; no partial path is ever observable.
/// Each iteration tests the net first (net contact always ends the trace),
/// then the table plane plus bounds. An in-bounds hit reflects, maybe
/// spins, gets a downward bias that grows with the bounce index, and lifts
/// off slightly so the next ray cannot re-hit the same point. Anything
/// else extrapolates a fixed tail and stops.
pub fn plan<R: Rng>(
    params: &LaunchParams,
    surface: &Surface,
    config: &TraceConfig,
    rng: &mut R,
) -> TracedPath {
    let net = surface.net(config.net_height);
    let normal = Vec3::Y;

    let mut path = TracedPath {
        waypoints: vec![params.origin],
        bounce_points: Vec::new(),
        end: TraceEnd::BounceLimit,
    };
    let mut pos = params.origin;
    let mut dir = params.direction.normalize_or_zero();
    let mut bounces = 0;

    while bounces < config.max_bounces {
        if let Some(hit) = intersect_net(pos, dir, &net) {
            add_intermediate_points(&mut path.waypoints, pos, hit, config.gravity_influence);
            path.waypoints.push(hit);
            path.end = TraceEnd::NetHit;
            return path;
        }

        match intersect_surface_plane(pos, dir, surface) {
            Some(hit) if surface.contains(hit) => {
                add_intermediate_points(&mut path.waypoints, pos, hit, config.gravity_influence);
                path.waypoints.push(hit);
                path.bounce_points.push(hit);

                let mut out = reflect(dir, normal);
                out = apply_spin(out, normal, &config.spin, rng);
                // Crude gravity: each bounce leaves a little flatter than
                // pure reflection would
                out.y -= config.gravity_influence * (bounces + 1) as f32 * 0.1;
                dir = out.normalize_or_zero();
                pos = hit + dir * BOUNCE_OFFSET;
                bounces += 1;
            }
            _ => {
                let end = pos + dir * ESCAPE_DISTANCE;
                add_intermediate_points(&mut path.waypoints, pos, end, config.gravity_influence);
                path.waypoints.push(end);
                path.end = TraceEnd::Escaped;
                return path;
            }
        }
    }

    path
}

/// Densify a straight segment so playback looks smooth.
///
/// Steps of roughly `WAYPOINT_SPACING`, with a small quadratic sag on the
/// intermediate points. The sag is cosmetic only: bounce physics keeps
/// using the un-sagged endpoints, which are pushed by the caller.
fn add_intermediate_points(waypoints: &mut Vec<Vec3>, start: Vec3, end: Vec3, gravity: f32) {
    let steps = (start.distance(end) / WAYPOINT_SPACING).ceil() as usize;
    for i in 1..steps {
        let t = i as f32 / steps as f32;
        let mut p = start.lerp(end, t);
        p.y -= gravity * t * t * 0.5;
        waypoints.push(p);
    }
}
