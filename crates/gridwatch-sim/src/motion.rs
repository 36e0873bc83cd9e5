//! Per-target motion evaluation.
//!
//! Pure functions that compute the next position and kinematics for one
//! target from its oscillator parameters, elapsed time, and an RNG.
//! No ECS dependency: operates on plain data, so the motion model is
//! testable without a live timer.

use std::f64::consts::TAU;

use rand::Rng;

use gridwatch_core::constants::{
    GEO_JITTER_DEG, HEADING_JITTER_DEG, SPEED_FLOOR_KMH, SPEED_JITTER_KMH, WORLD_CENTRE,
};
use gridwatch_core::types::{wrap_heading_deg, GeoFix, WorldPoint};

use crate::components::PathOscillator;

/// Input to the motion step for a single target.
pub struct MotionContext {
    pub oscillator: PathOscillator,
    pub elapsed_secs: f64,
    pub speed_kmh: f64,
    pub heading_deg: f64,
    pub geo: GeoFix,
}

/// Output from the motion step.
pub struct MotionUpdate {
    pub world: WorldPoint,
    pub speed_kmh: f64,
    pub heading_deg: f64,
    pub geo: GeoFix,
}

/// Advance one target by one tick.
///
/// The grid position follows the target's oscillator curve, so movement is
/// bounded and continuous regardless of jitter. Speed and heading follow
/// bounded random walks: speed never drops below the floor, heading wraps
/// modulo 360. The geo fix drifts cosmetically.
pub fn advance(ctx: &MotionContext, rng: &mut impl Rng) -> MotionUpdate {
    let osc = &ctx.oscillator;
    let world = WorldPoint::new(
        WORLD_CENTRE + osc.amp_x * (TAU * ctx.elapsed_secs / osc.period_x_secs + osc.phase).sin(),
        WORLD_CENTRE + osc.amp_y * (TAU * ctx.elapsed_secs / osc.period_y_secs + osc.phase).cos(),
    );

    let speed_kmh = (ctx.speed_kmh + rng.gen_range(-SPEED_JITTER_KMH..=SPEED_JITTER_KMH))
        .max(SPEED_FLOOR_KMH);
    let heading_deg = wrap_heading_deg(
        ctx.heading_deg + rng.gen_range(-HEADING_JITTER_DEG..=HEADING_JITTER_DEG),
    );
    let geo = GeoFix::new(
        ctx.geo.lat_deg + rng.gen_range(-GEO_JITTER_DEG..=GEO_JITTER_DEG),
        ctx.geo.lon_deg + rng.gen_range(-GEO_JITTER_DEG..=GEO_JITTER_DEG),
    );

    MotionUpdate {
        world,
        speed_kmh,
        heading_deg,
        geo,
    }
}
