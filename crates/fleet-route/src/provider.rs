//! Routing trait and the `Route` result type.
//!
//! # Pluggability
//!
//! The fleet manager calls routing only through [`RouteProvider`], so the
//! OSRM client can be swapped for the straight-line fallback (or a scripted
//! provider in tests) without touching the simulation.

use std::sync::Arc;

use async_trait::async_trait;
use fleet_core::GeoPoint;

use crate::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered list of waypoints from start to destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Waypoints in travel order, latitude first.
    pub waypoints: Vec<GeoPoint>,
    /// Road distance reported by the provider, metres.
    pub distance_m: f64,
    /// Travel time reported by the provider, seconds.
    pub duration_secs: f64,
}

impl Route {
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Append `leg`, dropping its first waypoint when it repeats our last.
    pub fn extend_with(&mut self, leg: Route) {
        let skip = usize::from(!self.is_empty() && self.waypoints.last() == leg.waypoints.first());
        self.waypoints.extend(leg.waypoints.into_iter().skip(skip));
        self.distance_m    += leg.distance_m;
        self.duration_secs += leg.duration_secs;
    }
}

// ── RouteProvider trait ───────────────────────────────────────────────────────

/// Source of driving paths between two coordinates.
///
/// Implementations must bound their own latency (e.g. a request timeout):
/// callers await them while holding the fleet lock.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Compute a path from `start` to `end`.
    async fn fetch_path(&self, start: GeoPoint, end: GeoPoint) -> RouteResult<Route>;

    /// Compute one path visiting `stops` in order.
    ///
    /// The default fetches each leg with [`fetch_path`](Self::fetch_path)
    /// and joins them.  Fails with `Malformed` for fewer than two stops.
    async fn fetch_multi(&self, stops: &[GeoPoint]) -> RouteResult<Route> {
        check_stops(stops)?;
        let mut joined = Route { waypoints: Vec::new(), distance_m: 0.0, duration_secs: 0.0 };
        for leg in stops.windows(2) {
            joined.extend_with(self.fetch_path(leg[0], leg[1]).await?);
        }
        Ok(joined)
    }
}

pub(crate) fn check_stops(stops: &[GeoPoint]) -> RouteResult<()> {
    if stops.len() < 2 {
        return Err(RouteError::Malformed(format!("need at least 2 stops, got {}", stops.len())));
    }
    Ok(())
}

#[async_trait]
impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    async fn fetch_path(&self, start: GeoPoint, end: GeoPoint) -> RouteResult<Route> {
        (**self).fetch_path(start, end).await
    }

    async fn fetch_multi(&self, stops: &[GeoPoint]) -> RouteResult<Route> {
        (**self).fetch_multi(stops).await
    }
}

#[async_trait]
impl<P: RouteProvider + ?Sized> RouteProvider for Arc<P> {
    async fn fetch_path(&self, start: GeoPoint, end: GeoPoint) -> RouteResult<Route> {
        (**self).fetch_path(start, end).await
    }

    async fn fetch_multi(&self, stops: &[GeoPoint]) -> RouteResult<Route> {
        (**self).fetch_multi(stops).await
    }
}
