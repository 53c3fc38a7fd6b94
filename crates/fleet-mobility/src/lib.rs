//! `fleet-mobility` — vehicle state, the fleet aggregate, and movement.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`state`]  | `Vehicle` — per-vehicle record with path and cursor           |
//! | [`store`]  | `Fleet`, `Anchor` — the vehicle batch and its anchoring state |
//! | [`engine`] | `advance_vehicle`, `advance_all` — elapsed-time movement      |
//! | [`error`]  | `MobilityError`, `MobilityResult<T>`                          |
//!
//! # Movement model (waypoint chase)
//!
//! Each vehicle owns a path of waypoints and a cursor pointing at the
//! waypoint it last reached.  A tick of `dt` seconds gives the vehicle a
//! distance budget of `speed × dt`.  If the budget covers the gap to
//! `path[cursor + 1]` the vehicle snaps onto it and the cursor advances by
//! one; otherwise it moves that far along the straight segment.  Leftover
//! budget is dropped, so a vehicle crosses at most one waypoint per tick.
//!
//! Routing is not done here.  The caller (`fleet-sim`) collects the
//! vehicles whose path is consumed and fetches new ones.

pub mod engine;
pub mod error;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::{Advance, MoveSummary, advance_all, advance_vehicle};
pub use error::{MobilityError, MobilityResult};
pub use state::Vehicle;
pub use store::{Anchor, Fleet};
