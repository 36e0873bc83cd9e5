//! Target registry — canonical owner of all tracked entities.
//!
//! `TargetRegistry` owns the hecs world, advances motion on each tick, and
//! exposes immutable record snapshots. It has no knowledge of the viewport,
//! filtering, or selection: the timer mutates only this container, and input
//! handlers never touch it.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gridwatch_core::seed::TargetSeed;
use gridwatch_core::state::TargetRecord;
use gridwatch_core::types::SimTime;

use crate::systems;
use crate::world_setup;

/// Configuration for a new registry.
pub struct RegistryConfig {
    /// RNG seed for determinism. Same seed = same motion.
    pub seed: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The target registry. Owns the ECS world and all simulated motion state.
pub struct TargetRegistry {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
}

impl TargetRegistry {
    /// Create an empty registry with the given config.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        }
    }

    /// Populate the registry from a seed list. Called once at start.
    pub fn initialize(&mut self, seeds: &[TargetSeed]) {
        world_setup::populate(&mut self.world, seeds, &mut self.rng);
    }

    /// Advance all Active targets by one tick.
    ///
    /// A pure state-advance over in-memory data: with zero targets it is a
    /// no-op, and there is no failure mode.
    pub fn tick(&mut self) {
        self.time.advance();
        systems::movement::run(&mut self.world, &self.time, &mut self.rng);
    }

    /// Immutable view of all targets, ordered by id.
    pub fn records(&self) -> Vec<TargetRecord> {
        systems::snapshot::build_records(&self.world)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}
