//! Entity spawn factories for populating the registry world.
//!
//! Builds the component bundle for each seeded target, repairing malformed
//! seed data (out-of-range heading, negative speed) on ingestion.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gridwatch_core::constants::{
    PATH_AMP_X_MAX, PATH_AMP_X_MIN, PATH_AMP_Y_MAX, PATH_AMP_Y_MIN, PATH_PERIOD_MAX_SECS,
    PATH_PERIOD_MIN_SECS,
};
use gridwatch_core::seed::TargetSeed;
use gridwatch_core::types::{wrap_heading_deg, WorldPoint};

use crate::components::{Designation, Kinematics, PathOscillator, Trail};

/// Populate the world from a seed list. Spawn order fixes the registry's
/// iteration order, which keeps runs with the same RNG seed identical.
pub fn populate(world: &mut World, seeds: &[TargetSeed], rng: &mut ChaCha8Rng) {
    for seed in seeds {
        spawn_target(world, seed, rng);
    }
}

/// Spawn a single target at the grid centre with an empty trail.
pub fn spawn_target(world: &mut World, seed: &TargetSeed, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let oscillator = roll_oscillator(rng);

    world.spawn((
        Designation {
            id: seed.id.clone(),
            name: seed.name.clone(),
        },
        seed.geo,
        WorldPoint::CENTRE,
        Kinematics {
            speed_kmh: seed.speed_kmh.max(0.0),
            heading_deg: wrap_heading_deg(seed.heading_deg),
        },
        seed.status,
        Trail::default(),
        oscillator,
    ))
}

/// Roll per-target path parameters from the seeded RNG.
fn roll_oscillator(rng: &mut ChaCha8Rng) -> PathOscillator {
    PathOscillator {
        amp_x: rng.gen_range(PATH_AMP_X_MIN..PATH_AMP_X_MAX),
        amp_y: rng.gen_range(PATH_AMP_Y_MIN..PATH_AMP_Y_MAX),
        period_x_secs: rng.gen_range(PATH_PERIOD_MIN_SECS..PATH_PERIOD_MAX_SECS),
        period_y_secs: rng.gen_range(PATH_PERIOD_MIN_SECS..PATH_PERIOD_MAX_SECS),
        phase: rng.gen_range(0.0..std::f64::consts::TAU),
    }
}
