//! `fleet-route` — road-following paths from an external routing service.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`provider`] | `RouteProvider` trait (two-point and multi-stop), `Route` |
//! | [`osrm`]     | `OsrmClient` — HTTP client for an OSRM `route/v1` service  |
//! | [`straight`] | `StraightLineProvider` — offline fallback                  |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                             |
//!
//! Every `RouteError` means "no path right now".  The fleet manager never
//! treats one as fatal; it leaves the vehicle parked and retries later.

pub mod error;
pub mod osrm;
pub mod provider;
pub mod straight;


pub use error::{RouteError, RouteResult};
pub use osrm::{OsrmClient, parse_route_response};
pub use provider::{Route, RouteProvider};
pub use straight::StraightLineProvider;
