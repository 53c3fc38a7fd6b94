//! `fleet-server` — HTTP front end for the fleet position simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`api`]     | axum `Router`, query parsing, JSON response bodies        |
//! | [`cli`]     | `clap` arguments, route provider selection                |
//! | [`error`]   | `ApiError` and its HTTP mapping                           |
//! | [`logging`] | `tracing-subscriber` bootstrap                            |
//!
//! The binary in `main.rs` wires these together: parse [`cli::Args`], load
//! the config, pick a provider, build one [`fleet_sim::FleetHandle`], and
//! serve [`api::router`] on it.

pub mod api;
pub mod cli;
pub mod error;
pub mod logging;


pub use api::router;
pub use cli::{Args, build_provider};
pub use error::{ApiError, ApiResult};
pub use logging::init_logging;
