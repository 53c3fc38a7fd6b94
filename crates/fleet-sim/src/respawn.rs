//! Respawn policy.
//!
//! Fleet-level state machine with two states, `Empty` and
//! `Anchored(center)`.  A query with reference `r` spawns a new batch at `r`
//! when the fleet is empty, or when `r` is farther than the threshold from
//! the current anchor.  Otherwise the fleet is reused.
//!
//! The distance is measured in raw degrees, not metres, so the threshold is
//! configured as `respawn_threshold_deg`.

use fleet_core::GeoPoint;
use fleet_mobility::Anchor;

/// Why a respawn fires.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RespawnReason {
    /// No fleet exists yet.
    Empty,
    /// The viewer moved `distance_deg` away from `from`.
    Moved { from: GeoPoint, distance_deg: f64 },
}

/// `Some(reason)` if a query referencing `reference` must respawn the fleet.
pub fn needs_respawn(anchor: Anchor, reference: GeoPoint, threshold_deg: f64) -> Option<RespawnReason> {
    match anchor {
        Anchor::Empty => Some(RespawnReason::Empty),
        Anchor::Anchored(center) => {
            let distance_deg = center.degree_distance(reference);
            (distance_deg > threshold_deg).then_some(RespawnReason::Moved { from: center, distance_deg })
        }
    }
}
