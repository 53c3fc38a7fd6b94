//! Operational status shown next to each vehicle.
//!
//! The status is advisory: it is drawn at spawn time and never changed by
//! the movement logic.  It does gate the nearest-vehicle lookup, which only
//! considers `Available` vehicles.

use serde::Serialize;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Ready to be dispatched (default state).
    #[default]
    Available,
    /// Driving to an incident.
    EnRoute,
    /// Occupied with a patient.
    Busy,
    /// Out of service.
    Offline,
}

impl VehicleStatus {
    /// Statuses a freshly spawned vehicle may start in.
    pub const SPAWN_POOL: [VehicleStatus; 3] =
        [VehicleStatus::Available, VehicleStatus::EnRoute, VehicleStatus::Busy];

    #[inline]
    pub fn is_available(self) -> bool {
        matches!(self, VehicleStatus::Available)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::EnRoute   => "en_route",
            VehicleStatus::Busy      => "busy",
            VehicleStatus::Offline   => "offline",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
