//! Pointer drag state machine.
//!
//! States: `Idle` and `Dragging`. A primary-button press starts a drag,
//! recording the pointer's offset from the current pan; each move computes
//! the new pan as `pointer - grab`. Repositioning is absolute, so missed
//! move events cannot accumulate drift. Release and leave both end the drag.
//!
//! A press/release pair whose total travel stays under the click threshold
//! resolves as a click instead of a pan; the session turns that into a
//! marker selection or a background clear.

use glam::DVec2;

use gridwatch_core::constants::DRAG_CLICK_THRESHOLD_PX;

/// Current pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer offset from pan at press time; `pan = pointer - grab`.
        grab: DVec2,
        /// Screen position of the press, for click discrimination.
        origin: DVec2,
        /// Whether travel has exceeded the click threshold.
        moved: bool,
    },
}

/// Outcome of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// The gesture stayed under the movement threshold: resolve as a click.
    Click(DVec2),
    /// The gesture was a pan; nothing further to resolve.
    DragEnd,
    /// No drag was in progress (e.g. non-primary press, or release after
    /// the pointer left and re-entered the surface).
    Ignored,
}

/// Pointer input tracker owned by the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    state: DragState,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer pressed. Only the primary button starts a drag; `pan` is the
    /// viewport's current offset.
    pub fn press(&mut self, pointer: DVec2, primary: bool, pan: DVec2) {
        if !primary {
            return;
        }
        self.state = DragState::Dragging {
            grab: pointer - pan,
            origin: pointer,
            moved: false,
        };
    }

    /// Pointer moved. While dragging, returns the new absolute pan offset.
    pub fn drag_to(&mut self, pointer: DVec2) -> Option<DVec2> {
        match &mut self.state {
            DragState::Idle => None,
            DragState::Dragging { grab, origin, moved } => {
                if (pointer - *origin).length() > DRAG_CLICK_THRESHOLD_PX {
                    *moved = true;
                }
                Some(pointer - *grab)
            }
        }
    }

    /// Pointer released. Ends the drag and reports how to resolve it.
    pub fn release(&mut self, pointer: DVec2) -> Release {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Release::Ignored,
            DragState::Dragging { moved, .. } => {
                if moved {
                    Release::DragEnd
                } else {
                    Release::Click(pointer)
                }
            }
        }
    }

    /// Pointer left the surface, or the session is tearing down: abandon
    /// any gesture in flight without resolving a click.
    pub fn abandon(&mut self) {
        self.state = DragState::Idle;
    }
}
