//! Shared, locked access to the one fleet.

use std::sync::Arc;

use fleet_core::{Clock, GeoPoint, SystemClock};
use fleet_route::{Route, RouteProvider, RouteResult};
use tokio::sync::Mutex;

use crate::{FleetSim, NearestVehicle, Snapshot};

/// Cloneable handle passed to every request handler.
///
/// Each operation takes the fleet lock once and holds it across respawn,
/// tick, route assignment, and copy-out, so no caller ever sees a vehicle
/// mid-update or a batch mid-respawn.  The clock is read after the lock is
/// acquired, which keeps tick timestamps monotonic in lock order.
pub struct FleetHandle<P: RouteProvider, C: Clock = SystemClock> {
    sim:      Arc<Mutex<FleetSim<P>>>,
    provider: Arc<P>,
    clock:    Arc<C>,
}

impl<P: RouteProvider, C: Clock> Clone for FleetHandle<P, C> {
    fn clone(&self) -> Self {
        Self {
            sim:      Arc::clone(&self.sim),
            provider: Arc::clone(&self.provider),
            clock:    Arc::clone(&self.clock),
        }
    }
}

impl<P: RouteProvider, C: Clock> FleetHandle<P, C> {
    pub fn new(sim: FleetSim<P>, clock: C) -> Self {
        Self::with_shared_clock(sim, Arc::new(clock))
    }

    /// Like [`new`](Self::new) but keeps the caller's clock handle live, so
    /// tests can move a `ManualClock` after construction.
    pub fn with_shared_clock(sim: FleetSim<P>, clock: Arc<C>) -> Self {
        let provider = sim.provider();
        Self {
            sim: Arc::new(Mutex::new(sim)),
            provider,
            clock,
        }
    }

    /// Respawn if needed, tick, and return the fleet.
    pub async fn snapshot(&self, reference: Option<GeoPoint>) -> Snapshot {
        let mut sim = self.sim.lock().await;
        let now = self.clock.now();
        sim.snapshot(reference, now).await
    }

    /// Tick and return the fleet without moving its anchor.
    pub async fn current(&self) -> Snapshot {
        let mut sim = self.sim.lock().await;
        let now = self.clock.now();
        sim.current(now).await
    }

    /// Tick, then list the `limit` nearest available vehicles to `point`.
    pub async fn nearest(&self, point: GeoPoint, limit: usize) -> Vec<NearestVehicle> {
        let mut sim = self.sim.lock().await;
        let now = self.clock.now();
        sim.nearest(point, limit, now).await
    }

    /// Ask the route provider directly.  Does not touch the fleet.
    pub async fn route(&self, start: GeoPoint, end: GeoPoint) -> RouteResult<Route> {
        self.provider.fetch_path(start, end).await
    }

    /// Ask the route provider for a path through every stop in order.
    pub async fn route_multi(&self, stops: &[GeoPoint]) -> RouteResult<Route> {
        self.provider.fetch_multi(stops).await
    }

    /// Run `f` against the simulator under the lock.
    pub async fn inspect<R>(&self, f: impl FnOnce(&FleetSim<P>) -> R) -> R {
        let sim = self.sim.lock().await;
        f(&sim)
    }
}
