//! Viewport transform engine.
//!
//! Owns the pan offset and zoom factor and converts between normalized grid
//! coordinates and screen pixels. Independent of target data: panning and
//! zooming never touch the registry, and motion ticks never touch this.
//!
//! Convention: zoom scales about the container centre, pan is a post-zoom
//! screen-space offset.
//!
//! ```text
//! screen = centre + pan + zoom * (world/100 * container - centre)
//! ```

use glam::DVec2;
use serde::{Deserialize, Serialize};

use gridwatch_core::constants::{
    WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT, WORLD_MAX, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use gridwatch_core::types::{ContainerSize, ScreenPoint, WorldPoint};

/// Pan/zoom state plus the two coordinate conversions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    zoom: f64,
    pan: DVec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: DVec2::ZERO,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> DVec2 {
        self.pan
    }

    /// Add a screen-space delta to the pan offset. Unconditional: any
    /// finite input is accepted, the offset is unconstrained.
    pub fn pan_by(&mut self, delta: DVec2) {
        self.pan += delta;
    }

    /// Replace the pan offset outright (used by drag repositioning).
    pub fn set_pan(&mut self, pan: DVec2) {
        self.pan = pan;
    }

    /// Multiply the zoom factor, then clamp. Repeated wheel notches
    /// compound multiplicatively, not additively.
    pub fn zoom_by(&mut self, multiplier: f64) {
        self.zoom_to(self.zoom * multiplier);
    }

    /// Jump to an absolute zoom factor, clamped. Out-of-range input is
    /// always clamped, never rejected.
    pub fn zoom_to(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// On-screen zoom-in button: absolute step.
    pub fn step_in(&mut self) {
        self.zoom_to(self.zoom + ZOOM_STEP);
    }

    /// On-screen zoom-out button: absolute step.
    pub fn step_out(&mut self) {
        self.zoom_to(self.zoom - ZOOM_STEP);
    }

    /// Restore the default transform. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Map a grid coordinate to a pixel position inside the viewport.
    /// Exact inverse of [`Viewport::screen_to_world`].
    pub fn world_to_screen(&self, world: WorldPoint, container: ContainerSize) -> ScreenPoint {
        let centre = container.centre();
        let world_px = DVec2::new(
            world.x / WORLD_MAX * container.width,
            world.y / WORLD_MAX * container.height,
        );
        centre + self.pan + self.zoom * (world_px - centre)
    }

    /// Map a pixel position back to grid coordinates, for hit-testing raw
    /// pointer positions against the plane.
    pub fn screen_to_world(&self, point: ScreenPoint, container: ContainerSize) -> WorldPoint {
        let centre = container.centre();
        let world_px = centre + (point - centre - self.pan) / self.zoom;
        WorldPoint::new(
            world_px.x / container.width * WORLD_MAX,
            world_px.y / container.height * WORLD_MAX,
        )
    }

    /// Icon scale at the current zoom: `1/sqrt(zoom)`, so markers shrink
    /// only partially as zoom increases and stay legible at the extremes.
    pub fn marker_scale(&self) -> f64 {
        1.0 / self.zoom.sqrt()
    }
}

/// Map a wheel delta to a zoom multiplier: scrolling down zooms out.
pub fn wheel_factor(delta_y: f64) -> f64 {
    if delta_y > 0.0 {
        WHEEL_ZOOM_OUT
    } else {
        WHEEL_ZOOM_IN
    }
}
