//! `fleet-sim` — fleet manager and pull-driven tick loop.
//!
//! # One query, one critical section
//!
//! ```text
//! FleetHandle::snapshot(reference?)
//!   lock fleet
//!   ① Respawn  — Empty, or anchor farther than the threshold from the
//!                reference → spawn a new batch and route every vehicle.
//!   ② Advance  — move each vehicle by speed × min(now − last_tick, cap).
//!   ③ Reroute  — vehicles that consumed their path, and parked vehicles
//!                whose retry delay has passed, fetch new routes
//!                (concurrently; applied once all fetches are back).
//!   ④ Copy out — clone the vehicles into a `Snapshot`.
//!   unlock
//! ```
//!
//! There is no background clock.  Simulated time moves only when someone
//! asks for a snapshot, so two queries far apart see one capped catch-up
//! step and rapid queries see near-continuous motion.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_core::{FleetConfig, SystemClock};
//! use fleet_route::StraightLineProvider;
//! use fleet_sim::{FleetHandle, FleetSimBuilder};
//!
//! let sim = FleetSimBuilder::new(FleetConfig::default(), StraightLineProvider::default())
//!     .seed(42)
//!     .build()?;
//! let handle = FleetHandle::new(sim, SystemClock);
//! let snap = handle.snapshot(None).await;
//! ```

pub mod builder;
pub mod error;
pub mod handle;
pub mod nearest;
pub mod respawn;
pub mod sim;
pub mod snapshot;
pub mod spawn;


pub use builder::FleetSimBuilder;
pub use error::{SimError, SimResult};
pub use handle::FleetHandle;
pub use nearest::{ETA_SPEED_KMH, NearestVehicle, nearest_available};
pub use respawn::{RespawnReason, needs_respawn};
pub use sim::{FleetSim, TickReport};
pub use snapshot::Snapshot;
pub use spawn::Spawner;
