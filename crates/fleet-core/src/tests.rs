//! Unit tests for fleet-core.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, METERS_PER_DEGREE};

    #[test]
    fn distance_uses_fixed_scale() {
        let a = GeoPoint::new(28.60, 77.20);
        let b = GeoPoint::new(28.60, 77.21);
        let d = a.distance_m(b);
        assert!((d - 0.01 * METERS_PER_DEGREE).abs() < 1e-6, "d = {d}");
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = GeoPoint::new(28.6, 77.2);
        let b = GeoPoint::new(28.603, 77.204);
        assert_eq!(a.distance_m(a), 0.0);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
        // 3-4-5 triangle in thousandths of a degree.
        assert!((a.degree_distance(b) - 0.005).abs() < 1e-9);
    }

    #[test]
    fn interpolate_endpoints_and_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 2.0);
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_eq!(a.interpolate(b, 1.0), b);
        assert_eq!(a.interpolate(b, 0.5), GeoPoint::new(0.5, 1.0));
    }

    #[test]
    fn interpolate_clamps_ratio() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 1.0);
        assert_eq!(a.interpolate(b, -3.0), a);
        assert_eq!(a.interpolate(b, 7.5), b);
    }

    #[test]
    fn lng_lat_conversion() {
        let p = GeoPoint::from_lng_lat([77.2, 28.6]);
        assert_eq!(p, GeoPoint::new(28.6, 77.2));
        assert_eq!(p.to_lng_lat(), [77.2, 28.6]);
    }

    #[test]
    fn validity() {
        assert!(GeoPoint::new(28.6, 77.2).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn clamped_pulls_points_onto_valid_range() {
        let p = GeoPoint::new(28.6, 77.2);
        assert_eq!(p.clamped(), p);
        assert_eq!(GeoPoint::new(90.01, 180.2).clamped(), GeoPoint::new(90.0, 180.0));
        assert_eq!(GeoPoint::new(-95.0, -181.0).clamped(), GeoPoint::new(-90.0, -180.0));
        assert!(GeoPoint::new(89.9999, 180.0001).clamped().is_valid());
    }

    #[test]
    fn serializes_as_lat_lng_object() {
        let json = serde_json::to_value(GeoPoint::new(1.5, 2.5)).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 1.5, "lng": 2.5 }));
    }
}

#[cfg(test)]
mod ids_and_status {
    use crate::{VehicleId, VehicleStatus};

    #[test]
    fn vehicle_id_display_and_serde() {
        assert_eq!(VehicleId(7).to_string(), "AMB-0007");
        assert_eq!(serde_json::to_value(VehicleId(12)).unwrap(), "AMB-0012");
        assert_eq!(VehicleId(7).next(), VehicleId(8));
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(serde_json::to_value(VehicleStatus::EnRoute).unwrap(), "en_route");
        assert_eq!(VehicleStatus::Available.to_string(), "available");
        assert!(VehicleStatus::Available.is_available());
        assert!(!VehicleStatus::Busy.is_available());
        assert!(!VehicleStatus::SPAWN_POOL.contains(&VehicleStatus::Offline));
    }
}

#[cfg(test)]
mod rng {
    use crate::{FleetRng, GeoPoint};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = FleetRng::new(99);
        let mut b = FleetRng::new(99);
        for _ in 0..20 {
            assert_eq!(a.gen_range(0.0..1.0f64), b.gen_range(0.0..1.0f64));
        }
    }

    #[test]
    fn random_offset_stays_in_box() {
        let mut rng = FleetRng::new(1);
        let c = GeoPoint::new(28.6, 77.2);
        for _ in 0..1_000 {
            let p = rng.random_offset(c, 0.01);
            assert!(p.within_bbox(c, 0.01 + 1e-12), "{p} outside box");
        }
    }

    #[test]
    fn random_offset_near_edges_stays_on_the_globe() {
        let mut rng = FleetRng::new(3);
        for c in [
            GeoPoint::new(89.999, 179.999),
            GeoPoint::new(-89.999, -179.999),
            GeoPoint::new(0.0, 180.0),
        ] {
            for _ in 0..500 {
                let p = rng.random_offset(c, 0.02);
                assert!(p.is_valid(), "{p} drawn around {c}");
                assert!(p.within_bbox(c, 0.02 + 1e-12), "{p} left the neighbourhood of {c}");
            }
        }
    }

    #[test]
    fn zero_radius_returns_center() {
        let mut rng = FleetRng::new(1);
        let c = GeoPoint::new(10.0, 20.0);
        assert_eq!(rng.random_offset(c, 0.0), c);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = FleetRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }
}

#[cfg(test)]
mod time {
    use chrono::{Duration, TimeZone, Utc};

    use crate::{Clock, ManualClock, elapsed_secs};

    #[test]
    fn elapsed_without_previous_tick_is_zero() {
        assert_eq!(elapsed_secs(None, Utc::now(), 2.0), 0.0);
    }

    #[test]
    fn elapsed_is_capped_and_non_negative() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(elapsed_secs(Some(t0), t0 + Duration::milliseconds(500), 2.0), 0.5);
        assert_eq!(elapsed_secs(Some(t0), t0 + Duration::seconds(1000), 2.0), 2.0);
        assert_eq!(elapsed_secs(Some(t0), t0 - Duration::seconds(5), 2.0), 0.0);
    }

    #[test]
    fn manual_clock_moves_only_when_told() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::new(t0);
        assert_eq!(clock.now(), t0);
        assert_eq!(clock.now(), t0);
        clock.advance_secs(1.25);
        assert_eq!(clock.now(), t0 + Duration::milliseconds(1250));
        clock.set(t0);
        assert_eq!(clock.now(), t0);
    }
}

#[cfg(test)]
mod config {
    use std::io::Write;

    use crate::{FleetConfig, FleetError, GeoPoint, load_config};

    #[test]
    fn default_is_valid() {
        let c = FleetConfig::default();
        c.validate().unwrap();
        assert_eq!(c.vehicle_count, 10);
        assert_eq!(c.tick_cap_secs, 2.0);
    }

    #[test]
    fn rejects_bad_speed_range() {
        let c = FleetConfig { min_speed_kmh: 70.0, max_speed_kmh: 60.0, ..Default::default() };
        assert!(matches!(c.validate(), Err(FleetError::Config(_))));
    }

    #[test]
    fn rejects_non_finite_speeds() {
        let c = FleetConfig { max_speed_kmh: f64::INFINITY, ..Default::default() };
        assert!(matches!(c.validate(), Err(FleetError::Config(_))));
        let c = FleetConfig { min_speed_kmh: f64::NAN, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_huge_or_non_finite_radii() {
        let c: FleetConfig = serde_json::from_str(r#"{ "spawn_radius_deg": 1e308 }"#).unwrap();
        assert!(matches!(c.validate(), Err(FleetError::Config(msg)) if msg.contains("spawn_radius_deg")));

        let c = FleetConfig { destination_radius_deg: 90.5, ..Default::default() };
        assert!(c.validate().is_err());
        let c = FleetConfig { destination_radius_deg: f64::NAN, ..Default::default() };
        assert!(c.validate().is_err());
        let c = FleetConfig { spawn_radius_deg: -0.1, ..Default::default() };
        assert!(c.validate().is_err());

        let c = FleetConfig { spawn_radius_deg: 90.0, ..Default::default() };
        c.validate().unwrap();
    }

    #[test]
    fn rejects_non_finite_timings() {
        let c = FleetConfig { tick_cap_secs: f64::INFINITY, ..Default::default() };
        assert!(c.validate().is_err());
        let c = FleetConfig { route_retry_secs: f64::NAN, ..Default::default() };
        assert!(c.validate().is_err());
        let c = FleetConfig { respawn_threshold_deg: -1.0, ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_vehicles_and_empty_operators() {
        let c = FleetConfig { vehicle_count: 0, ..Default::default() };
        assert!(c.validate().is_err());
        let c = FleetConfig { operators: vec![], ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "vehicle_count": 4, "default_reference": {{ "lat": 19.0, "lng": 72.8 }} }}"#).unwrap();
        let c = load_config(f.path()).unwrap();
        assert_eq!(c.vehicle_count, 4);
        assert_eq!(c.default_reference, GeoPoint::new(19.0, 72.8));
        assert_eq!(c.max_speed_kmh, 60.0);
    }

    #[test]
    fn malformed_file_is_json_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        assert!(matches!(load_config(f.path()), Err(FleetError::Json(_))));
    }
}
