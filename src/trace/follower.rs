//! Constant-speed playback along a traced path
//!
//! A per-tick state machine: each tick is a plain function of the current
//! state and a delta time, so any scheduler - game loop, timer, test
//! harness - can drive it. At most one waypoint is consumed per tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::planner::TracedPath;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FollowState {
    /// No path loaded; nothing moves
    #[default]
    Idle,
    /// Advancing toward the next waypoint
    Following,
    /// Path exhausted; position rests on the last waypoint
    Finished,
}

/// Advances a tracked position along a [`TracedPath`] at constant speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFollower {
    state: FollowState,
    /// Next waypoint to reach; `== path.len()` means the path is spent
    cursor: usize,
    position: Vec3,
    /// World units per second
    pub speed: f32,
}

impl PathFollower {
    pub fn new(speed: f32) -> Self {
        Self {
            state: FollowState::Idle,
            cursor: 0,
            position: Vec3::ZERO,
            speed,
        }
    }

    #[inline]
    pub fn state(&self) -> FollowState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_following(&self) -> bool {
        self.state == FollowState::Following
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == FollowState::Finished
    }

    /// Drop any playback and return to `Idle`
    pub fn reset(&mut self) {
        self.state = FollowState::Idle;
        self.cursor = 0;
    }

    /// Load a freshly traced path and snap to its first waypoint.
    ///
    /// An empty path goes straight to `Finished` so a degenerate launch is
    /// queryable instead of silently doing nothing.
    pub fn start(&mut self, path: &TracedPath) {
        self.cursor = 0;
        match path.waypoints.first() {
            Some(&first) => {
                self.position = first;
                self.state = FollowState::Following;
            }
            None => self.state = FollowState::Finished,
        }
    }

    /// Advance one tick; a no-op outside `Following`.
    ///
    /// Moves at most `speed * dt` toward the cursor waypoint, snapping to
    /// it exactly when the remaining distance fits in this tick's step.
    pub fn tick(&mut self, path: &TracedPath, dt: f32) {
        if self.state != FollowState::Following {
            return;
        }
        if self.cursor >= path.waypoints.len() {
            self.state = FollowState::Finished;
            return;
        }

        let target = path.waypoints[self.cursor];
        let to_target = target - self.position;
        let remaining = to_target.length();
        let step = self.speed * dt;

        if remaining <= step {
            self.position = target;
            self.cursor += 1;
            if self.cursor >= path.waypoints.len() {
                self.state = FollowState::Finished;
            }
        } else {
            self.position += to_target / remaining * step;
        }
    }
}
