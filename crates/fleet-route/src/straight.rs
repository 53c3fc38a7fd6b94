//! Offline fallback provider.
//!
//! Produces a straight segment from start to end, chopped into waypoints no
//! more than `spacing_m` apart so vehicles still move in visible steps.
//! Used when no OSRM server is configured.

use async_trait::async_trait;
use fleet_core::GeoPoint;

use crate::{Route, RouteProvider, RouteResult};

#[derive(Copy, Clone, Debug)]
pub struct StraightLineProvider {
    /// Maximum gap between consecutive waypoints, metres.
    pub spacing_m: f64,
    /// Speed used to fill in `Route::duration_secs`, km/h.
    pub assumed_speed_kmh: f64,
}

impl Default for StraightLineProvider {
    fn default() -> Self {
        Self { spacing_m: 100.0, assumed_speed_kmh: 40.0 }
    }
}

impl StraightLineProvider {
    /// Build the route synchronously.  Always succeeds.
    pub fn route(&self, start: GeoPoint, end: GeoPoint) -> Route {
        let distance_m = start.distance_m(end);
        let segments = if self.spacing_m > 0.0 {
            ((distance_m / self.spacing_m).ceil() as usize).max(1)
        } else {
            1
        };

        // Last waypoint is `end` itself, not a rounded interpolation of it.
        let waypoints = (0..segments)
            .map(|i| start.interpolate(end, i as f64 / segments as f64))
            .chain(std::iter::once(end))
            .collect();

        let speed_ms = self.assumed_speed_kmh / 3.6;
        let duration_secs = if speed_ms > 0.0 { distance_m / speed_ms } else { 0.0 };

        Route { waypoints, distance_m, duration_secs }
    }
}

#[async_trait]
impl RouteProvider for StraightLineProvider {
    async fn fetch_path(&self, start: GeoPoint, end: GeoPoint) -> RouteResult<Route> {
        Ok(self.route(start, end))
    }
}
