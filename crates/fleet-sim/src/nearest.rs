//! Nearest available vehicle lookup with a flat-speed ETA.

use fleet_core::GeoPoint;
use fleet_mobility::Vehicle;
use serde::Serialize;

/// Average speed assumed for ETA estimates, km/h.
pub const ETA_SPEED_KMH: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestVehicle {
    pub vehicle: Vehicle,
    pub distance_meters: f64,
    pub eta_seconds: u64,
}

/// Up to `limit` available vehicles closest to `point`, nearest first.
pub fn nearest_available(vehicles: &[Vehicle], point: GeoPoint, limit: usize) -> Vec<NearestVehicle> {
    let mut ranked: Vec<(f64, &Vehicle)> = vehicles
        .iter()
        .filter(|v| v.status.is_available())
        .map(|v| (v.location.distance_m(point), v))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));

    ranked
        .into_iter()
        .take(limit)
        .map(|(distance_meters, v)| NearestVehicle {
            vehicle: v.clone(),
            distance_meters,
            eta_seconds: (distance_meters / 1000.0 / ETA_SPEED_KMH * 3600.0) as u64,
        })
        .collect()
}
