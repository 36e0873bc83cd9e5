//! Operator commands sent from the host shell to the console session.
//!
//! Commands are queued and processed in arrival order by the session loop.

use serde::{Deserialize, Serialize};

use crate::enums::StatusFilter;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Pointer ---
    /// Pointer button pressed at a screen position.
    /// Only the primary button starts a pan gesture.
    PointerDown { x: f64, y: f64, primary: bool },
    /// Pointer moved to a screen position.
    PointerMove { x: f64, y: f64 },
    /// Pointer button released at a screen position.
    PointerUp { x: f64, y: f64 },
    /// Pointer left the map surface. Abandons any pan gesture in flight.
    PointerLeave,

    // --- Zoom ---
    /// Wheel notch; the sign of `delta_y` selects zoom-in vs zoom-out.
    Wheel { delta_y: f64 },
    /// On-screen zoom-in button (absolute step, clamped).
    StepZoomIn,
    /// On-screen zoom-out button (absolute step, clamped).
    StepZoomOut,
    /// Jump to an absolute zoom factor, clamped to the valid range.
    ZoomTo { zoom: f64 },
    /// Restore zoom 1 and zero pan.
    ResetView,

    // --- Filtering ---
    /// Replace the free-text search query.
    SetSearchText { text: String },
    /// Replace the status filter.
    SetStatusFilter { filter: StatusFilter },

    // --- Selection ---
    /// Select a target by id (list-panel path). Unknown ids are accepted
    /// and degrade to "nothing selected" at resolution time.
    SelectTarget { id: String },
    /// Clear the current selection.
    ClearSelection,

    // --- Host surface ---
    /// The host rendering surface was resized.
    SetContainerSize { width: f64, height: f64 },
}
