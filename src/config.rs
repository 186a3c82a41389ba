//! Tracer configuration
//!
//! Tuning knobs for planning and spin. Serialized alongside traced paths so
//! a dumped scenario records the exact values it was planned with.

use serde::{Deserialize, Serialize};

use crate::consts::NET_HEIGHT;

/// Randomized post-bounce spin settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpinConfig {
    /// Whether spin is applied at all
    pub enabled: bool,
    /// Chance a given bounce receives spin (0.0 - 1.0)
    pub probability: f64,
    /// Smallest spin rotation, degrees
    pub angle_min_deg: f32,
    /// Largest spin rotation, degrees
    pub angle_max_deg: f32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            probability: 0.5,
            angle_min_deg: 2.0,
            angle_max_deg: 10.0,
        }
    }
}

/// Planner configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Whether the tracer drives motion at all; when false, `start_trace`
    /// is a no-op and the caller falls back to its own physics
    pub use_ray_tracing: bool,
    /// Bounce budget; reaching it ends the trace normally
    pub max_bounces: u32,
    /// Strength of the downward bias applied to each bounce's outgoing
    /// direction, and of the cosmetic sag on interpolated points
    pub gravity_influence: f32,
    /// Net height above the table plane (world units)
    pub net_height: f32,
    /// Post-bounce spin settings
    pub spin: SpinConfig,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            use_ray_tracing: true,
            max_bounces: 8,
            gravity_influence: 0.3,
            net_height: NET_HEIGHT,
            spin: SpinConfig::default(),
        }
    }
}
