//! Render snapshot — the complete visible state handed to the renderer.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::LinkStatus;
use crate::types::{ContainerSize, GeoFix, ScreenPoint, SimTime, WorldPoint};

/// Canonical full record of one tracked target, as owned by the registry.
/// Immutable snapshot row; callers must not treat it as live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub id: String,
    pub name: String,
    pub geo: GeoFix,
    /// Current grid position. Equals the newest trail point when the trail
    /// is non-empty; grid centre otherwise.
    pub world: WorldPoint,
    pub speed_kmh: f64,
    pub heading_deg: f64,
    pub status: LinkStatus,
    /// Past grid positions, oldest first, at most `TRAIL_CAPACITY` entries.
    pub trail: Vec<WorldPoint>,
}

/// A visible target resolved for drawing: grid position plus the screen
/// position under the current viewport transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetMarker {
    pub id: String,
    pub name: String,
    pub status: LinkStatus,
    pub world: WorldPoint,
    /// Pixel position of the marker anchor under the current transform.
    pub screen: ScreenPoint,
    /// Icon scale at the current zoom (`1/sqrt(zoom)`), so markers shrink
    /// only partially as zoom increases.
    pub marker_scale: f64,
    /// Whether this marker is the current selection.
    pub selected: bool,
    pub speed_kmh: f64,
    pub heading_deg: f64,
    /// Trail in grid coordinates, oldest first. Drawn inside the
    /// transformed plane, so it is not resolved to pixels here.
    pub trail: Vec<WorldPoint>,
}

/// Viewport transform in effect for this snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportView {
    pub zoom: f64,
    pub pan: DVec2,
    pub container: ContainerSize,
}

/// Read-only state assembled after each tick or input event.
///
/// `markers` holds the visible subset in registry order. `selected` carries
/// the full record for the detail readout and is independent of visibility:
/// a selected target filtered out of `markers` still appears here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub time: SimTime,
    pub markers: Vec<TargetMarker>,
    pub viewport: ViewportView,
    pub selected: Option<TargetRecord>,
}
