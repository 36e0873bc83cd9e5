//! Record builder: queries the world and produces immutable target records.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use gridwatch_core::enums::LinkStatus;
use gridwatch_core::state::TargetRecord;
use gridwatch_core::types::{GeoFix, WorldPoint};

use crate::components::{Designation, Kinematics, Trail};

/// Build an ordered record list from all targets in the world.
///
/// The grid position is reconstructed from the newest trail point; a target
/// that has never moved reports the grid centre. Records are sorted by id so
/// consumers see a stable order.
pub fn build_records(world: &World) -> Vec<TargetRecord> {
    let mut records: Vec<TargetRecord> = world
        .query::<(&Designation, &GeoFix, &WorldPoint, &Kinematics, &LinkStatus, &Trail)>()
        .iter()
        .map(|(_, (designation, geo, _pos, kin, status, trail))| TargetRecord {
            id: designation.id.clone(),
            name: designation.name.clone(),
            geo: *geo,
            world: trail.latest().unwrap_or(WorldPoint::CENTRE),
            speed_kmh: kin.speed_kmh,
            heading_deg: kin.heading_deg,
            status: *status,
            trail: trail.points().collect(),
        })
        .collect();

    records.sort_by(|a, b| a.id.cmp(&b.id));
    records
}
