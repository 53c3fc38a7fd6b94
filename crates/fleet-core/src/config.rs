//! Simulator configuration.
//!
//! Every field has a default, so a config file only needs to list the values
//! it overrides:
//!
//! ```json
//! { "vehicle_count": 25, "default_reference": { "lat": 19.076, "lng": 72.8777 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{FleetError, FleetResult, GeoPoint};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Vehicles created on every (re)spawn.
    pub vehicle_count: usize,

    /// Lower bound of the uniform speed draw, km/h.
    pub min_speed_kmh: f64,

    /// Upper bound of the uniform speed draw, km/h.
    pub max_speed_kmh: f64,

    /// Max per-axis offset (degrees) of a spawn location from the anchor.
    pub spawn_radius_deg: f64,

    /// Max per-axis offset (degrees) of a route destination from its
    /// reference point.
    pub destination_radius_deg: f64,

    /// Respawn when the query reference is farther than this from the
    /// anchor.  Compared against the raw degree-space distance, not metres.
    pub respawn_threshold_deg: f64,

    /// Upper bound on the elapsed time a single tick may simulate.
    pub tick_cap_secs: f64,

    /// Minimum wait before retrying a vehicle whose route fetch failed.
    pub route_retry_secs: f64,

    /// Reference used when a query carries no usable coordinate.
    pub default_reference: GeoPoint,

    /// Master RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Operator names drawn at spawn.
    pub operators: Vec<String>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            vehicle_count:          10,
            min_speed_kmh:          30.0,
            max_speed_kmh:          60.0,
            spawn_radius_deg:       0.01,
            destination_radius_deg: 0.02,
            respawn_threshold_deg:  0.05,
            tick_cap_secs:          2.0,
            route_retry_secs:       5.0,
            default_reference:      GeoPoint::new(28.6139, 77.2090),
            seed:                   None,
            operators: [
                "Rajesh Kumar", "Amit Singh", "Priya Sharma", "Suresh Yadav",
                "Vikram Patel", "Anjali Gupta", "Mohammed Irfan", "Deepak Verma",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Upper bound for `spawn_radius_deg` and `destination_radius_deg`.
pub const MAX_RADIUS_DEG: f64 = 90.0;

impl FleetConfig {
    /// Reject configurations the simulator cannot run with.
    ///
    /// Every float must be finite, so nothing downstream (the uniform speed
    /// and offset draws in particular) can be handed an empty or unbounded
    /// range.
    pub fn validate(&self) -> FleetResult<()> {
        if self.vehicle_count == 0 {
            return Err(FleetError::Config("vehicle_count must be positive".into()));
        }
        let speeds_ok = self.min_speed_kmh.is_finite()
            && self.max_speed_kmh.is_finite()
            && self.min_speed_kmh > 0.0
            && self.min_speed_kmh <= self.max_speed_kmh;
        if !speeds_ok {
            return Err(FleetError::Config(format!(
                "invalid speed range {}..={} km/h",
                self.min_speed_kmh, self.max_speed_kmh
            )));
        }
        for (name, radius) in [
            ("spawn_radius_deg", self.spawn_radius_deg),
            ("destination_radius_deg", self.destination_radius_deg),
        ] {
            if !(radius.is_finite() && (0.0..=MAX_RADIUS_DEG).contains(&radius)) {
                return Err(FleetError::Config(format!(
                    "{name} must be within 0..={MAX_RADIUS_DEG}, got {radius}"
                )));
            }
        }
        if !self.tick_cap_secs.is_finite() || self.tick_cap_secs <= 0.0 {
            return Err(FleetError::Config("tick_cap_secs must be positive".into()));
        }
        for (name, value) in [
            ("route_retry_secs", self.route_retry_secs),
            ("respawn_threshold_deg", self.respawn_threshold_deg),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FleetError::Config(format!("{name} must be a non-negative number, got {value}")));
            }
        }
        if !self.default_reference.is_valid() {
            return Err(FleetError::Config(format!(
                "default_reference {} is not a valid coordinate",
                self.default_reference
            )));
        }
        if self.operators.is_empty() {
            return Err(FleetError::Config("operators pool is empty".into()));
        }
        Ok(())
    }
}

/// Read a JSON config file and validate it.
pub fn load_config<P: AsRef<Path>>(path: P) -> FleetResult<FleetConfig> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let config: FleetConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}
