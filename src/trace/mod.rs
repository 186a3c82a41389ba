//! Deterministic trajectory tracing
//!
//! Planning runs synchronously and atomically inside a trace-start call;
//! playback advances once per external tick. This module must stay pure and
//! deterministic:
//! - Seeded RNG only, threaded through explicitly
//! - No wall clock, no platform dependencies
//! - Geometry snapshotted at trace start, never mutated mid-trace

pub mod follower;
pub mod intersect;
pub mod planner;
pub mod spin;
pub mod surface;
pub mod tracer;

pub use follower::{FollowState, PathFollower};
pub use intersect::{intersect_net, intersect_surface_plane, reflect};
pub use planner::{LaunchDiagnostics, LaunchParams, TraceEnd, TracedPath, plan};
pub use spin::apply_spin;
pub use surface::{Net, Surface};
pub use tracer::BallTracer;
