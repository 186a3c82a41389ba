//! Tracer facade
//!
//! Owns the geometry snapshot, the seeded RNG stream, the planned path and
//! the follower, and exposes the launch / tick / diagnostics surface an
//! external serve controller drives.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::follower::{FollowState, PathFollower};
use super::planner::{LaunchDiagnostics, LaunchParams, TraceEnd, TracedPath, plan};
use super::surface::Surface;
use crate::config::TraceConfig;

/// Plans and replays trajectories for one tracked ball.
///
/// Single-threaded and tick-driven: a trace is planned atomically inside
/// [`BallTracer::start_trace`], and a new trace wholesale-replaces the old
/// path and cursor. There is no cancellation beyond starting over.
#[derive(Debug, Clone)]
pub struct BallTracer {
    config: TraceConfig,
    surface: Surface,
    rng: Pcg32,
    path: TracedPath,
    follower: PathFollower,
    last_launch: Option<LaunchDiagnostics>,
}

impl BallTracer {
    /// Tracer over the default table with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, TraceConfig::default())
    }

    pub fn with_config(seed: u64, config: TraceConfig) -> Self {
        Self {
            config,
            surface: Surface::default(),
            rng: Pcg32::seed_from_u64(seed),
            path: TracedPath::empty(),
            follower: PathFollower::new(1.0),
            last_launch: None,
        }
    }

    /// Plan a new trajectory and begin playback at `speed`.
    ///
    /// When ray tracing is disabled this does nothing at all - the stored
    /// path and follower are left untouched and the caller is expected to
    /// drive the ball with its own physics instead.
    pub fn start_trace(&mut self, origin: Vec3, direction: Vec3, speed: f32, diag: LaunchDiagnostics) {
        if !self.config.use_ray_tracing {
            log::debug!("trace request ignored: ray tracing disabled");
            return;
        }

        let params = LaunchParams {
            origin,
            direction,
            speed,
            diag,
        };
        // The surface is captured here; set_surface_corners during playback
        // cannot disturb the path being followed
        self.path = plan(&params, &self.surface, &self.config, &mut self.rng);
        self.follower.speed = speed;
        self.follower.start(&self.path);
        self.last_launch = Some(diag);

        log::debug!(
            "trace planned: {} waypoints, {} bounces, end {:?}",
            self.path.len(),
            self.path.bounce_count(),
            self.path.end,
        );
    }

    /// Advance playback by `dt` seconds and return the tracked position
    pub fn tick(&mut self, dt: f32) -> Vec3 {
        self.follower.tick(&self.path, dt);
        self.follower.position()
    }

    /// Toggle whether this tracer drives motion at all.
    ///
    /// An explicit capability switch, not an error state: disabled means
    /// the owning object's motion comes from elsewhere.
    pub fn set_use_ray_tracing(&mut self, enabled: bool) {
        self.config.use_ray_tracing = enabled;
    }

    pub fn use_ray_tracing(&self) -> bool {
        self.config.use_ray_tracing
    }

    /// Replace the table geometry. Takes effect on the next trace; an
    /// in-flight trace keeps the corners it was planned with.
    pub fn set_surface_corners(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.surface = Surface::new(a, b, c, d);
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TraceConfig {
        &mut self.config
    }

    // --- Diagnostics; outputs only, nothing feeds back into the math ---

    pub fn path(&self) -> &TracedPath {
        &self.path
    }

    pub fn waypoint_count(&self) -> usize {
        self.path.len()
    }

    /// Table hit points of the current path, in bounce order
    pub fn bounce_points(&self) -> &[Vec3] {
        &self.path.bounce_points
    }

    /// How the current path ended, or `None` before any trace has run
    pub fn trace_end(&self) -> Option<TraceEnd> {
        (!self.path.is_empty()).then_some(self.path.end)
    }

    pub fn follow_state(&self) -> FollowState {
        self.follower.state()
    }

    pub fn is_following(&self) -> bool {
        self.follower.is_following()
    }

    pub fn is_finished(&self) -> bool {
        self.follower.is_finished()
    }

    pub fn position(&self) -> Vec3 {
        self.follower.position()
    }

    /// The launch diagnostics from the most recent trace, echoed unchanged
    pub fn last_launch(&self) -> Option<&LaunchDiagnostics> {
        self.last_launch.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn serve(tracer: &mut BallTracer) {
        tracer.start_trace(
            Vec3::new(0.1, 1.1, -1.2),
            Vec3::new(0.0, -0.4, 0.9),
            5.0,
            LaunchDiagnostics {
                actor_speed: 5.0,
                force: 0.5,
                ..Default::default()
            },
        );
    }

    #[test]
    fn test_start_trace_replaces_state_and_starts_playback() {
        let mut tracer = BallTracer::new(42);
        assert_eq!(tracer.follow_state(), FollowState::Idle);
        assert_eq!(tracer.trace_end(), None);

        serve(&mut tracer);
        assert!(tracer.is_following());
        assert!(tracer.waypoint_count() > 1);
        assert!(tracer.trace_end().is_some());
        assert_eq!(tracer.position(), Vec3::new(0.1, 1.1, -1.2));
        assert_eq!(tracer.last_launch().unwrap().force, 0.5);
    }

    #[test]
    fn test_disabled_ray_tracing_is_a_silent_noop() {
        let mut tracer = BallTracer::new(42);
        tracer.set_use_ray_tracing(false);
        serve(&mut tracer);
        // Nothing changed: no path, follower never left Idle
        assert_eq!(tracer.waypoint_count(), 0);
        assert_eq!(tracer.follow_state(), FollowState::Idle);
        assert!(tracer.last_launch().is_none());

        tracer.set_use_ray_tracing(true);
        serve(&mut tracer);
        assert!(tracer.is_following());
    }

    #[test]
    fn test_playback_runs_to_finish() {
        let mut tracer = BallTracer::new(7);
        serve(&mut tracer);
        let mut ticks = 0;
        while tracer.is_following() {
            tracer.tick(SIM_DT);
            ticks += 1;
            assert!(ticks < 1_000_000, "playback must terminate");
        }
        assert!(tracer.is_finished());
        assert_eq!(tracer.position(), tracer.path().last().unwrap());
    }

    #[test]
    fn test_same_seed_same_trace() {
        let mut tracer_a = BallTracer::new(1234);
        let mut tracer_b = BallTracer::new(1234);
        serve(&mut tracer_a);
        serve(&mut tracer_b);
        assert_eq!(tracer_a.path(), tracer_b.path());
    }

    #[test]
    fn test_reconfiguring_corners_leaves_current_path_alone() {
        let mut tracer = BallTracer::new(9);
        serve(&mut tracer);
        let before = tracer.path().clone();

        let y = 1.5;
        tracer.set_surface_corners(
            Vec3::new(-1.0, y, 2.0),
            Vec3::new(1.0, y, 2.0),
            Vec3::new(1.0, y, -2.0),
            Vec3::new(-1.0, y, -2.0),
        );
        assert_eq!(tracer.path(), &before);

        // The next trace picks up the new table
        serve(&mut tracer);
        assert!((tracer.surface().height() - y).abs() < 1e-6);
    }
}
