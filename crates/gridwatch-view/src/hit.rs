//! Marker hit-testing.
//!
//! Clicks are resolved against marker geometry as rendered (the marker's
//! screen position under the current transform, with its scaled icon
//! radius), not by re-deriving grid coordinates from the raw pointer point.
//! A click that lands on no marker is a background click.

use gridwatch_core::constants::MARKER_HIT_RADIUS_PX;
use gridwatch_core::state::TargetMarker;
use gridwatch_core::types::ScreenPoint;

/// Find the marker under the pointer, if any.
///
/// The selected marker renders on top, so it is tested first; the
/// remaining markers are tested in reverse paint order.
pub fn hit_test<'a>(markers: &'a [TargetMarker], point: ScreenPoint) -> Option<&'a TargetMarker> {
    if let Some(selected) = markers.iter().find(|m| m.selected) {
        if contains(selected, point) {
            return Some(selected);
        }
    }
    markers
        .iter()
        .rev()
        .find(|m| !m.selected && contains(m, point))
}

/// Whether the pointer falls inside a marker's rendered extent.
fn contains(marker: &TargetMarker, point: ScreenPoint) -> bool {
    (point - marker.screen).length() <= MARKER_HIT_RADIUS_PX * marker.marker_scale
}
