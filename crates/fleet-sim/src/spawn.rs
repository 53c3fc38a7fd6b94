//! Vehicle factory.

use chrono::{DateTime, Utc};
use fleet_core::{FleetConfig, FleetRng, GeoPoint, VehicleId, VehicleStatus};
use fleet_mobility::Vehicle;

/// Registration series letters, drawn per vehicle.
const PLATE_SERIES: [&str; 6] = ["AB", "CD", "EF", "GH", "JK", "LM"];

/// Creates vehicles and picks random points.
///
/// Owns the fleet RNG and the id counter.  The counter survives respawns so
/// that no id is ever handed out twice.
pub struct Spawner {
    rng:     FleetRng,
    next_id: VehicleId,
}

impl Spawner {
    pub fn new(rng: FleetRng) -> Self {
        Self { rng, next_id: VehicleId(1) }
    }

    /// The id the next spawned vehicle will get.
    #[inline]
    pub fn peek_id(&self) -> VehicleId {
        self.next_id
    }

    /// `count` parked vehicles scattered within `spawn_radius_deg` of
    /// `center`.
    pub fn spawn_batch(
        &mut self,
        config: &FleetConfig,
        center: GeoPoint,
        count:  usize,
        now:    DateTime<Utc>,
    ) -> Vec<Vehicle> {
        (0..count)
            .map(|_| self.spawn_one(config, center, now))
            .collect()
    }

    fn spawn_one(&mut self, config: &FleetConfig, center: GeoPoint, now: DateTime<Utc>) -> Vehicle {
        let id = self.next_id;
        self.next_id = id.next();

        let location = self.rng.random_offset(center, config.spawn_radius_deg);
        let operator = self
            .rng
            .choose(&config.operators)
            .cloned()
            .unwrap_or_else(|| "Unassigned".to_string());
        let status = self
            .rng
            .choose(&VehicleStatus::SPAWN_POOL)
            .copied()
            .unwrap_or_default();
        let speed_kmh = self.rng.gen_range(config.min_speed_kmh..=config.max_speed_kmh);

        let series = self.rng.choose(&PLATE_SERIES).copied().unwrap_or("AA");
        let plate = format!(
            "DL-{:02}{}-{:04}",
            self.rng.gen_range(1..=13u32),
            series,
            self.rng.gen_range(1000..=9999u32),
        );

        Vehicle::new(id, plate, operator, status, speed_kmh, location, now)
    }

    /// A random route destination within `radius_deg` of `reference`.
    #[inline]
    pub fn destination(&mut self, reference: GeoPoint, radius_deg: f64) -> GeoPoint {
        self.rng.random_offset(reference, radius_deg)
    }
}
