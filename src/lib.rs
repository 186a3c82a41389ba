//! Rally Trace - deterministic table-tennis trajectory tracing
//!
//! Core modules:
//! - `trace`: trajectory planning and constant-speed playback
//! - `config`: tuning knobs for bounces, gravity bias and spin
//!
//! Planning is analytic (plane intersections + reflection law) rather than
//! integrated, so a whole serve is traced in one synchronous call and then
//! replayed tick by tick.

pub mod config;
pub mod trace;

pub use config::{SpinConfig, TraceConfig};
pub use trace::{
    BallTracer, FollowState, LaunchDiagnostics, LaunchParams, PathFollower, Surface, TraceEnd,
    TracedPath,
};

use glam::Vec3;

/// Tracer configuration constants
pub mod consts {
    /// Fixed playback timestep (120 Hz, same cadence a game loop would use)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Standard table length, metres (runs along Z)
    pub const TABLE_LENGTH: f32 = 2.74;
    pub const TABLE_WIDTH: f32 = 1.525;
    pub const TABLE_HEIGHT: f32 = 0.76;
    /// Regulation net height above the table plane
    pub const NET_HEIGHT: f32 = 0.1525;

    /// Spacing between interpolated waypoints (world units)
    pub const WAYPOINT_SPACING: f32 = 0.2;
    /// Distance to extrapolate when a ray leaves the table entirely
    pub const ESCAPE_DISTANCE: f32 = 10.0;
    /// Direction components smaller than this count as parallel to a plane
    pub const PLANE_EPSILON: f32 = 1e-4;
    /// Lift-off after a bounce so the next ray cannot re-hit the same point
    pub const BOUNCE_OFFSET: f32 = 0.01;
}

/// Rotate `v` about a unit `axis` by `angle` radians (Rodrigues form)
#[inline]
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    v * cos + axis.cross(v) * sin + axis * axis.dot(v) * (1.0 - cos)
}
