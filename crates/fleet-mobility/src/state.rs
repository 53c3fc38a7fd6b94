//! Per-vehicle state.

use chrono::{DateTime, Utc};
use fleet_core::{GeoPoint, VehicleId, VehicleStatus};
use serde::Serialize;

use crate::{MobilityError, MobilityResult};

/// One simulated vehicle.
///
/// A vehicle is either **parked** (empty `path`) or **driving** (a path of at
/// least one waypoint and a `cursor` into it).  `cursor` is the index of the
/// waypoint most recently reached; the vehicle is heading for
/// `path[cursor + 1]`.  Once `cursor == path.len() - 1` the path is consumed
/// and the vehicle waits for a new route.
///
/// Serialization exposes only what clients need; the path, cursor and
/// retry bookkeeping stay internal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub id: VehicleId,

    /// Registration plate shown on the dashboard.
    pub vehicle_number: String,

    /// Driver name.
    pub operator: String,

    pub status: VehicleStatus,

    /// Fixed at creation.
    pub speed_kmh: f64,

    pub location: GeoPoint,

    #[serde(skip)]
    pub path: Vec<GeoPoint>,

    /// Invariant: `cursor < path.len()` whenever `path` is non-empty, and
    /// `cursor == 0` when it is empty.
    #[serde(skip)]
    pub cursor: usize,

    /// Where the current path ends up, if one was assigned.
    pub destination: Option<GeoPoint>,

    pub last_updated: DateTime<Utc>,

    /// Time of the last failed route fetch.  Cleared on success.
    #[serde(skip)]
    pub route_failed_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// A parked vehicle at `location`.
    pub fn new(
        id:             VehicleId,
        vehicle_number: String,
        operator:       String,
        status:         VehicleStatus,
        speed_kmh:      f64,
        location:       GeoPoint,
        now:            DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            vehicle_number,
            operator,
            status,
            speed_kmh,
            location,
            path:            Vec::new(),
            cursor:          0,
            destination:     None,
            last_updated:    now,
            route_failed_at: None,
        }
    }

    /// Speed in metres per second.
    #[inline]
    pub fn speed_ms(&self) -> f64 {
        self.speed_kmh / 3.6
    }

    #[inline]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// `true` while there is a waypoint ahead of the cursor.
    #[inline]
    pub fn is_driving(&self) -> bool {
        self.cursor + 1 < self.path.len()
    }

    /// `true` once the cursor sits on the final waypoint.
    #[inline]
    pub fn is_path_consumed(&self) -> bool {
        !self.path.is_empty() && self.cursor + 1 >= self.path.len()
    }

    /// The waypoint the vehicle is heading for.
    #[inline]
    pub fn next_waypoint(&self) -> Option<GeoPoint> {
        self.path.get(self.cursor + 1).copied()
    }

    /// Waypoints still ahead of the cursor.
    #[inline]
    pub fn remaining_waypoints(&self) -> usize {
        self.path.len().saturating_sub(self.cursor + 1)
    }

    /// Replace the path wholesale and restart the cursor.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPath` (and leaves the vehicle untouched) if `path` is
    /// empty.
    pub fn assign_path(
        &mut self,
        path:        Vec<GeoPoint>,
        destination: GeoPoint,
        now:         DateTime<Utc>,
    ) -> MobilityResult<()> {
        if path.is_empty() {
            return Err(MobilityError::EmptyPath(self.id));
        }
        self.path            = path;
        self.cursor          = 0;
        self.destination     = Some(destination);
        self.route_failed_at = None;
        self.last_updated    = now;
        Ok(())
    }

    /// Drop the path and park in place.
    pub fn clear_path(&mut self) {
        self.path.clear();
        self.cursor = 0;
    }

    /// Record a failed route fetch.  The vehicle stays parked.
    pub fn mark_route_failed(&mut self, now: DateTime<Utc>) {
        self.clear_path();
        self.destination     = None;
        self.route_failed_at = Some(now);
    }

    /// `true` if this parked vehicle may request a route at `now`.
    ///
    /// A vehicle that never failed is always due; one that failed waits
    /// `retry_secs` before trying again.
    pub fn route_due(&self, now: DateTime<Utc>, retry_secs: f64) -> bool {
        if self.has_path() {
            return false;
        }
        match self.route_failed_at {
            None => true,
            Some(at) => (now - at).num_milliseconds() as f64 / 1000.0 >= retry_secs,
        }
    }
}
