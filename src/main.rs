//! Rally Trace demo
//!
//! Plans a few serves against the default table, replays each one at a
//! fixed timestep, then dumps the final path as JSON.

use glam::Vec3;

use rally_trace::consts::SIM_DT;
use rally_trace::{BallTracer, LaunchDiagnostics};

fn main() {
    env_logger::init();
    log::info!("rally-trace demo starting");

    let mut tracer = BallTracer::new(42);

    let serves = [
        // A flat drive from behind the near edge
        (Vec3::new(0.0, 1.1, -1.6), Vec3::new(0.05, -0.25, 1.0), 5.0),
        // A cross-table return from the far side
        (Vec3::new(-0.4, 1.0, 1.5), Vec3::new(0.15, -0.2, -1.0), 6.5),
    ];

    for (i, &(origin, direction, speed)) in serves.iter().enumerate() {
        let diag = LaunchDiagnostics {
            actor_direction: direction,
            actor_speed: speed,
            force: speed * 0.1,
            ..Default::default()
        };
        tracer.start_trace(origin, direction, speed, diag);
        log::info!(
            "serve {}: {} waypoints, {} bounces, end {:?}",
            i,
            tracer.waypoint_count(),
            tracer.bounce_points().len(),
            tracer.trace_end(),
        );

        let mut ticks = 0u32;
        while tracer.is_following() && ticks < 1_000_000 {
            tracer.tick(SIM_DT);
            ticks += 1;
        }
        log::info!(
            "serve {} replayed in {} ticks, resting at {}",
            i,
            ticks,
            tracer.position(),
        );
    }

    match serde_json::to_string_pretty(tracer.path()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize path: {err}"),
    }
}
