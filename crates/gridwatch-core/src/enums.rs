//! Enumeration types used throughout the console.

use serde::{Deserialize, Serialize};

/// Datalink status of a tracked target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkStatus {
    /// Reporting and moving; advanced by the motion tick.
    #[default]
    Active,
    /// Reporting but stationary; frozen by the motion tick.
    Idle,
    /// Signal lost; frozen at last known state.
    Lost,
}

/// Operator-selected status filter for the visible set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Idle,
    Lost,
}

impl StatusFilter {
    /// Whether a target with the given status passes this filter.
    pub fn admits(self, status: LinkStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == LinkStatus::Active,
            StatusFilter::Idle => status == LinkStatus::Idle,
            StatusFilter::Lost => status == LinkStatus::Lost,
        }
    }
}
