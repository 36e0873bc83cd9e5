//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Motion logic lives in `motion` and `systems`, not here.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use gridwatch_core::constants::TRAIL_CAPACITY;
use gridwatch_core::types::WorldPoint;

/// Stable identity and human label of a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Designation {
    pub id: String,
    pub name: String,
}

/// Scalar motion state: ground speed and true heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    /// Non-negative ground speed (km/h).
    pub speed_kmh: f64,
    /// True heading in degrees, always within `[0, 360)`.
    pub heading_deg: f64,
}

/// Bounded history of past grid positions, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    points: VecDeque<WorldPoint>,
}

impl Trail {
    /// Append a position, evicting the oldest entry beyond capacity.
    pub fn push(&mut self, point: WorldPoint) {
        self.points.push_back(point);
        while self.points.len() > TRAIL_CAPACITY {
            self.points.pop_front();
        }
    }

    /// Newest recorded position, if any.
    pub fn latest(&self) -> Option<WorldPoint> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = WorldPoint> + '_ {
        self.points.iter().copied()
    }
}

/// Per-target bounded oscillatory path parameters, rolled once at spawn.
/// The target traces a smooth closed curve around the grid centre; the
/// exact waveform is cosmetic, the bounds are not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathOscillator {
    /// East-west amplitude (grid units).
    pub amp_x: f64,
    /// North-south amplitude (grid units).
    pub amp_y: f64,
    /// East-west oscillation period (seconds).
    pub period_x_secs: f64,
    /// North-south oscillation period (seconds).
    pub period_y_secs: f64,
    /// Phase offset (radians) so targets don't move in lockstep.
    pub phase: f64,
}

// WorldPoint, GeoFix, and LinkStatus from gridwatch-core are used as
// components directly, the same way Position and Velocity are.
