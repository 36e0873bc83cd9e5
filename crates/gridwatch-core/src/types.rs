//! Fundamental geometric and timing types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{TICK_RATE, WORLD_CENTRE, WORLD_MAX, WORLD_MIN};

/// Pixel coordinate within the host rendering surface.
pub type ScreenPoint = DVec2;

/// Normalized position on the tactical grid. Each axis spans `[0, 100]`,
/// independent of screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Cosmetic latitude/longitude fix. Drifts slowly each tick; never used
/// for screen placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoFix {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

/// Width and height of the host rendering surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl WorldPoint {
    /// Grid centre, the defined position for a target with no trail yet.
    pub const CENTRE: WorldPoint = WorldPoint { x: WORLD_CENTRE, y: WORLD_CENTRE };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both axes lie inside the `[0, 100]` grid.
    pub fn in_bounds(&self) -> bool {
        (WORLD_MIN..=WORLD_MAX).contains(&self.x) && (WORLD_MIN..=WORLD_MAX).contains(&self.y)
    }
}

impl Default for WorldPoint {
    fn default() -> Self {
        Self::CENTRE
    }
}

impl GeoFix {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Centre of the container in pixel coordinates.
    pub fn centre(&self) -> DVec2 {
        DVec2::new(self.width, self.height) * 0.5
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Normalize a heading in degrees into `[0, 360)` with wrap-around
/// arithmetic. Negative and oversized inputs wrap; nothing is clamped.
pub fn wrap_heading_deg(heading_deg: f64) -> f64 {
    heading_deg.rem_euclid(360.0)
}
