//! Target seeds and the default roster used to populate the registry.

use serde::{Deserialize, Serialize};

use crate::enums::LinkStatus;
use crate::types::GeoFix;

/// Initial parameters for one tracked target. Headings outside `[0, 360)`
/// and negative speeds are repaired on ingestion, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSeed {
    pub id: String,
    pub name: String,
    pub geo: GeoFix,
    pub speed_kmh: f64,
    pub heading_deg: f64,
    pub status: LinkStatus,
}

impl TargetSeed {
    pub fn new(
        id: &str,
        name: &str,
        geo: GeoFix,
        speed_kmh: f64,
        heading_deg: f64,
        status: LinkStatus,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            geo,
            speed_kmh,
            heading_deg,
            status,
        }
    }
}

/// The standard five-asset roster the console starts with.
pub fn default_roster() -> Vec<TargetSeed> {
    vec![
        TargetSeed::new(
            "T-01",
            "Asset Alpha",
            GeoFix::new(40.7128, -74.0060),
            45.0,
            120.0,
            LinkStatus::Active,
        ),
        TargetSeed::new(
            "T-02",
            "Asset Bravo",
            GeoFix::new(51.5074, -0.1278),
            0.0,
            0.0,
            LinkStatus::Idle,
        ),
        TargetSeed::new(
            "T-03",
            "Target X",
            GeoFix::new(35.6762, 139.6503),
            88.0,
            240.0,
            LinkStatus::Active,
        ),
        TargetSeed::new(
            "T-04",
            "Courier 9",
            GeoFix::new(48.8566, 2.3522),
            12.0,
            45.0,
            LinkStatus::Active,
        ),
        TargetSeed::new(
            "T-05",
            "Ghost Node",
            GeoFix::new(-33.8688, 151.2093),
            0.0,
            0.0,
            LinkStatus::Lost,
        ),
    ]
}
