//! The `FleetSim` struct: fleet manager plus tick orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, info, warn};

use fleet_core::{FleetConfig, GeoPoint, VehicleId, elapsed_secs};
use fleet_mobility::{Fleet, advance_all};
use fleet_route::RouteProvider;

use crate::{NearestVehicle, Snapshot, Spawner, nearest_available, needs_respawn};

/// What one [`FleetSim::tick`] did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Simulated seconds, after the cap.
    pub dt_secs: f64,
    /// Vehicles that moved.
    pub advanced: usize,
    /// Planar metres covered by the whole fleet.
    pub distance_m: f64,
    /// Vehicles that reached the end of their path.
    pub arrivals: usize,
    /// Route fetches issued after moving.
    pub routes_requested: usize,
    /// Route fetches that produced a path.
    pub routes_assigned: usize,
}

/// The simulator state and the operations that mutate it.
///
/// `FleetSim` is not synchronised; wrap it in a
/// [`FleetHandle`][crate::FleetHandle] to share it between request handlers.
/// Create via [`FleetSimBuilder`][crate::FleetSimBuilder].
pub struct FleetSim<P: RouteProvider> {
    pub config: FleetConfig,

    /// The one fleet this process simulates.
    pub fleet: Fleet,

    pub(crate) provider: Arc<P>,

    pub(crate) spawner: Spawner,
}

impl<P: RouteProvider> FleetSim<P> {
    // ── Fleet manager ─────────────────────────────────────────────────────

    /// Replace every vehicle with `count` fresh ones around `center` and
    /// route each toward a random point near `center`.
    ///
    /// Returns the number of vehicles that received a path.
    pub async fn initialize_fleet(&mut self, center: GeoPoint, count: usize, now: DateTime<Utc>) -> usize {
        let vehicles = self.spawner.spawn_batch(&self.config, center, count, now);
        self.fleet.replace(vehicles, center, now);

        let requests: Vec<(VehicleId, GeoPoint)> = self.fleet.vehicles
            .iter()
            .map(|v| (v.id, center))
            .collect();
        let assigned = self.assign_routes(requests, now).await;

        info!(%center, count, assigned, next_id = %self.spawner.peek_id(), "fleet spawned");
        assigned
    }

    /// Route one vehicle from its location toward a random point near
    /// `reference`.  Returns `true` if a path was assigned.
    pub async fn assign_route(&mut self, id: VehicleId, reference: GeoPoint, now: DateTime<Utc>) -> bool {
        self.assign_routes(vec![(id, reference)], now).await == 1
    }

    /// Fetch routes for a batch of `(vehicle, reference)` pairs concurrently.
    ///
    /// Vehicle state is only written after every fetch has returned, so a
    /// cancelled call leaves no half-applied paths behind.
    async fn assign_routes(&mut self, requests: Vec<(VehicleId, GeoPoint)>, now: DateTime<Utc>) -> usize {
        if requests.is_empty() {
            return 0;
        }

        let radius = self.config.destination_radius_deg;
        let jobs: Vec<(VehicleId, GeoPoint, GeoPoint)> = requests
            .into_iter()
            .filter_map(|(id, reference)| {
                let from = self.fleet.vehicle(id)?.location;
                Some((id, from, self.spawner.destination(reference, radius)))
            })
            .collect();

        let provider = &self.provider;
        let results = join_all(
            jobs.iter().map(|&(_, from, to)| provider.fetch_path(from, to)),
        )
        .await;

        let mut assigned = 0;
        for ((id, _, destination), result) in jobs.into_iter().zip(results) {
            let Ok(vehicle) = self.fleet.vehicle_mut(id) else { continue };

            match result.map(|route| vehicle.assign_path(route.waypoints, destination, now)) {
                Ok(Ok(())) => {
                    debug!(vehicle = %id, %destination, waypoints = vehicle.path.len(), "route assigned");
                    assigned += 1;
                }
                Ok(Err(e)) => {
                    warn!(vehicle = %id, error = %e, "route rejected");
                    vehicle.mark_route_failed(now);
                }
                Err(e) => {
                    warn!(vehicle = %id, error = %e, "route unavailable");
                    vehicle.mark_route_failed(now);
                }
            }
        }
        assigned
    }

    // ── Tick engine ───────────────────────────────────────────────────────

    /// Advance every vehicle by the time elapsed since the previous tick
    /// (capped), then reroute vehicles that finished their path or are due
    /// for a retry.
    pub async fn tick(&mut self, now: DateTime<Utc>) -> TickReport {
        let dt_secs = elapsed_secs(self.fleet.last_tick, now, self.config.tick_cap_secs);
        let summary = advance_all(&mut self.fleet.vehicles, dt_secs, now);

        // Parked vehicles first: consumed ones still hold a path here and are
        // not picked up twice.
        let retry_secs = self.config.route_retry_secs;
        let mut requests: Vec<(VehicleId, GeoPoint)> = self.fleet.vehicles
            .iter()
            .filter(|v| v.route_due(now, retry_secs))
            .map(|v| (v.id, v.location))
            .collect();

        for &id in &summary.consumed {
            if let Ok(vehicle) = self.fleet.vehicle_mut(id) {
                vehicle.clear_path();
                requests.push((id, vehicle.location));
            }
        }

        let routes_requested = requests.len();
        let routes_assigned = self.assign_routes(requests, now).await;

        self.fleet.last_tick = Some(now);

        TickReport {
            dt_secs,
            advanced: summary.advanced,
            distance_m: summary.distance_m,
            arrivals: summary.consumed.len(),
            routes_requested,
            routes_assigned,
        }
    }

    // ── Query operations ──────────────────────────────────────────────────

    /// Respawn if the policy says so, tick, and copy out the fleet.
    ///
    /// A missing or invalid `reference` falls back to
    /// `config.default_reference`.  Never fails: vehicles without a route
    /// are simply reported where they stand.
    pub async fn snapshot(&mut self, reference: Option<GeoPoint>, now: DateTime<Utc>) -> Snapshot {
        let reference = reference
            .filter(|r| r.is_valid())
            .unwrap_or(self.config.default_reference);

        if let Some(reason) = needs_respawn(self.fleet.anchor, reference, self.config.respawn_threshold_deg) {
            info!(?reason, %reference, "respawning fleet");
            self.initialize_fleet(reference, self.config.vehicle_count, now).await;
        }

        let report = self.tick(now).await;
        debug!(?report, "tick");
        Snapshot::capture(&self.fleet, now)
    }

    /// Tick and copy out without consulting the respawn policy.
    pub async fn current(&mut self, now: DateTime<Utc>) -> Snapshot {
        let report = self.tick(now).await;
        debug!(?report, "tick");
        Snapshot::capture(&self.fleet, now)
    }

    /// Tick, then rank available vehicles by distance to `point`.
    pub async fn nearest(&mut self, point: GeoPoint, limit: usize, now: DateTime<Utc>) -> Vec<NearestVehicle> {
        self.tick(now).await;
        nearest_available(&self.fleet.vehicles, point, limit)
    }

    /// Shared handle to the route provider.
    pub fn provider(&self) -> Arc<P> {
        Arc::clone(&self.provider)
    }
}
