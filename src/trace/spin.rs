//! Randomized post-bounce spin
//!
//! Rotates a bounce's outgoing direction about the surface normal by a
//! bounded random angle, with a configurable chance per bounce. Pure given
//! the RNG, so tests pin a seed and replay the exact draws.

use glam::Vec3;
use rand::Rng;

use crate::config::SpinConfig;
use crate::rotate_about_axis;

/// Maybe rotate `dir` about `normal`, per the spin settings.
///
/// Draw order is fixed: probability roll, then angle, then sign. Changing
/// it would silently shift every seeded replay.
pub fn apply_spin<R: Rng>(dir: Vec3, normal: Vec3, cfg: &SpinConfig, rng: &mut R) -> Vec3 {
    if !cfg.enabled || !rng.random_bool(cfg.probability.clamp(0.0, 1.0)) {
        return dir;
    }
    let mut angle = rng
        .random_range(cfg.angle_min_deg..=cfg.angle_max_deg)
        .to_radians();
    if rng.random_bool(0.5) {
        angle = -angle;
    }
    rotate_about_axis(dir, normal, angle)
}
