//! The `Fleet` aggregate — every vehicle plus the anchoring state.

use chrono::{DateTime, Utc};
use fleet_core::{GeoPoint, VehicleId};

use crate::{MobilityError, MobilityResult, Vehicle};

/// Where the fleet was last spawned.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Anchor {
    /// No fleet has been spawned yet.
    #[default]
    Empty,
    /// The current batch was spawned around this point.
    Anchored(GeoPoint),
}

impl Anchor {
    #[inline]
    pub fn center(self) -> Option<GeoPoint> {
        match self {
            Anchor::Empty => None,
            Anchor::Anchored(c) => Some(c),
        }
    }
}

/// The current vehicle batch.
///
/// Vehicles are never removed one by one: [`Fleet::replace`] swaps in a new
/// batch and a new anchor in a single assignment.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    pub vehicles: Vec<Vehicle>,
    pub anchor: Anchor,
    /// When the tick engine last ran.  `None` until the first tick.
    pub last_tick: Option<DateTime<Utc>>,
}

impl Fleet {
    /// An empty, unanchored fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh batch anchored at `center`.
    ///
    /// `last_tick` is set to `now` so the first tick after a respawn moves
    /// nothing.
    pub fn replace(&mut self, vehicles: Vec<Vehicle>, center: GeoPoint, now: DateTime<Utc>) {
        *self = Fleet {
            vehicles,
            anchor: Anchor::Anchored(center),
            last_tick: Some(now),
        };
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn vehicle_mut(&mut self, id: VehicleId) -> MobilityResult<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(MobilityError::VehicleNotFound(id))
    }
}
