//! Single-target selection.
//!
//! Selection is an axis independent of visibility: it survives ticks and
//! filter changes, and a selected target filtered out of the visible set
//! still resolves for the detail readout. A dangling id (never matching
//! a registry record) is not an error: it degrades to "nothing selected"
//! at resolution time, since selection and registry mutation are decoupled
//! in time.

use serde::{Deserialize, Serialize};

use gridwatch_core::state::TargetRecord;

/// States: `None` (nothing selected) or `Some(id)`. `select` transitions
/// from any state; `clear` and background clicks transition to `None`;
/// ticks and filter changes never transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a target by id. Accepts any id, present or not.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Resolve the selection against the current records. A dangling id
    /// yields `None` without being cleared.
    pub fn resolve<'a>(&self, records: &'a [TargetRecord]) -> Option<&'a TargetRecord> {
        let id = self.selected.as_deref()?;
        records.iter().find(|r| r.id == id)
    }
}
