// src/association.rs
//
// Plate detections arrive with no identity attached; the tracker knows the
// vehicles. A plate belongs to the vehicle whose box contains it.

use crate::types::{BBox, TrackedVehicle};

/// Find the tracked vehicle a plate detection belongs to: the first vehicle
/// whose box strictly contains the plate's top-left corner. `None` when the
/// plate sits inside no tracked vehicle.
pub fn match_plate_to_vehicle<'a>(
    plate: &BBox,
    vehicles: &'a [TrackedVehicle],
) -> Option<&'a TrackedVehicle> {
    vehicles
        .iter()
        .find(|v| v.bbox.contains(plate.x1(), plate.y1()))
}
