//! Point-in-time copy of the fleet handed to readers.

use chrono::{DateTime, Utc};
use fleet_core::GeoPoint;
use fleet_mobility::{Fleet, Vehicle};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub count: usize,
    pub timestamp: DateTime<Utc>,
    /// Center the current batch was spawned around.
    pub anchor: Option<GeoPoint>,
    pub vehicles: Vec<Vehicle>,
}

impl Snapshot {
    /// Clone the fleet as of `now`.
    pub fn capture(fleet: &Fleet, now: DateTime<Utc>) -> Self {
        Self {
            count:     fleet.len(),
            timestamp: now,
            anchor:    fleet.anchor.center(),
            vehicles:  fleet.vehicles.clone(),
        }
    }
}
