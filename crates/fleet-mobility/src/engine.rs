//! Elapsed-time movement along assigned paths.

use chrono::{DateTime, Utc};
use fleet_core::VehicleId;

use crate::Vehicle;

/// What one call to [`advance_vehicle`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Advance {
    /// Planar metres covered this tick.
    pub moved_m: f64,
    /// `true` if the vehicle snapped onto the next waypoint.
    pub reached_waypoint: bool,
}

/// Move `vehicle` toward its next waypoint by `speed × dt_secs` metres.
///
/// Returns `None` (vehicle untouched) if there is no waypoint ahead.  If the
/// budget covers the remaining gap the vehicle lands exactly on the
/// waypoint and the cursor advances by one; any leftover budget is
/// discarded.  Otherwise the vehicle moves `budget / gap` of the way along
/// the segment.
pub fn advance_vehicle(
    vehicle: &mut Vehicle,
    dt_secs: f64,
    now:     DateTime<Utc>,
) -> Option<Advance> {
    let next   = vehicle.next_waypoint()?;
    let budget = vehicle.speed_ms() * dt_secs.max(0.0);
    let gap    = vehicle.location.distance_m(next);

    let advance = if budget >= gap {
        vehicle.location = next;
        vehicle.cursor += 1;
        Advance { moved_m: gap, reached_waypoint: true }
    } else {
        vehicle.location = vehicle.location.interpolate(next, budget / gap);
        Advance { moved_m: budget, reached_waypoint: false }
    };

    vehicle.last_updated = now;
    Some(advance)
}

/// Aggregate result of [`advance_all`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveSummary {
    /// Vehicles that had a waypoint ahead and were moved.
    pub advanced: usize,
    /// Total planar metres covered.
    pub distance_m: f64,
    /// Vehicles whose path is consumed after this pass, in fleet order.
    pub consumed: Vec<VehicleId>,
}

/// Advance every vehicle by `dt_secs` and report which ones finished their
/// path.
pub fn advance_all(vehicles: &mut [Vehicle], dt_secs: f64, now: DateTime<Utc>) -> MoveSummary {
    let mut summary = MoveSummary::default();

    for vehicle in vehicles.iter_mut() {
        if let Some(adv) = advance_vehicle(vehicle, dt_secs, now) {
            summary.advanced   += 1;
            summary.distance_m += adv.moved_m;
        }
        if vehicle.is_path_consumed() {
            summary.consumed.push(vehicle.id);
        }
    }

    summary
}
