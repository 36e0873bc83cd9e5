//! Motion system.
//!
//! Applies the pure motion step to every Active target and records the new
//! position in its trail. Idle and Lost targets are left untouched: their
//! position, kinematics, geo fix, and trail are all frozen.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use gridwatch_core::enums::LinkStatus;
use gridwatch_core::types::{GeoFix, SimTime, WorldPoint};

use crate::components::{Kinematics, PathOscillator, Trail};
use crate::motion::{self, MotionContext};

/// Run one motion step for all Active targets.
pub fn run(world: &mut World, time: &SimTime, rng: &mut ChaCha8Rng) {
    for (_entity, (status, oscillator, pos, kin, geo, trail)) in world.query_mut::<(
        &LinkStatus,
        &PathOscillator,
        &mut WorldPoint,
        &mut Kinematics,
        &mut GeoFix,
        &mut Trail,
    )>() {
        if *status != LinkStatus::Active {
            continue;
        }

        let ctx = MotionContext {
            oscillator: *oscillator,
            elapsed_secs: time.elapsed_secs,
            speed_kmh: kin.speed_kmh,
            heading_deg: kin.heading_deg,
            geo: *geo,
        };
        let update = motion::advance(&ctx, rng);

        *pos = update.world;
        kin.speed_kmh = update.speed_kmh;
        kin.heading_deg = update.heading_deg;
        *geo = update.geo;
        trail.push(update.world);
    }
}
