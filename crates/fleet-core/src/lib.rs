//! `fleet-core` — foundational types for the fleet position simulator.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, planar distance, interpolation             |
//! | [`ids`]      | `VehicleId`                                            |
//! | [`status`]   | `VehicleStatus` enum                                   |
//! | [`rng`]      | `FleetRng` (seeded or entropy-backed)                  |
//! | [`time`]     | `Clock` trait, `SystemClock`, `ManualClock`            |
//! | [`config`]   | `FleetConfig`, `load_config`                           |
//! | [`error`]    | `FleetError`, `FleetResult`                            |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FleetConfig, MAX_RADIUS_DEG, load_config};
pub use error::{FleetError, FleetResult};
pub use geo::{GeoPoint, METERS_PER_DEGREE};
pub use ids::VehicleId;
pub use rng::FleetRng;
pub use status::VehicleStatus;
pub use time::{Clock, ManualClock, SystemClock, elapsed_secs};
