//! Unit tests for fleet-mobility.

use chrono::{DateTime, TimeZone, Utc};
use fleet_core::{GeoPoint, VehicleId, VehicleStatus};

use crate::Vehicle;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// Vehicle at `loc` driving at 36 km/h (exactly 10 m/s).
fn vehicle_at(id: u32, loc: GeoPoint) -> Vehicle {
    Vehicle::new(
        VehicleId(id),
        format!("DL-1C-{id:04}"),
        "Test Driver".into(),
        VehicleStatus::Available,
        36.0,
        loc,
        t0(),
    )
}

/// Three waypoints heading east, 111 m apart.
fn east_path() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 0.001),
        GeoPoint::new(0.0, 0.002),
    ]
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vehicle {
    use super::*;
    use crate::MobilityError;

    #[test]
    fn new_vehicle_is_parked() {
        let v = vehicle_at(1, GeoPoint::new(0.0, 0.0));
        assert!(!v.has_path());
        assert!(!v.is_driving());
        assert!(!v.is_path_consumed());
        assert_eq!(v.next_waypoint(), None);
        assert!((v.speed_ms() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn assign_path_resets_cursor_and_sets_destination() {
        let mut v = vehicle_at(1, GeoPoint::new(0.0, 0.0));
        v.cursor = 5;
        v.route_failed_at = Some(t0());
        let dest = GeoPoint::new(0.0, 0.002);
        v.assign_path(east_path(), dest, t0()).unwrap();

        assert_eq!(v.cursor, 0);
        assert_eq!(v.destination, Some(dest));
        assert_eq!(v.next_waypoint(), Some(GeoPoint::new(0.0, 0.001)));
        assert_eq!(v.remaining_waypoints(), 2);
        assert!(v.route_failed_at.is_none());
        assert!(v.is_driving());
    }

    #[test]
    fn assign_empty_path_is_rejected() {
        let mut v = vehicle_at(3, GeoPoint::new(0.0, 0.0));
        let err = v.assign_path(vec![], GeoPoint::new(1.0, 1.0), t0()).unwrap_err();
        assert!(matches!(err, MobilityError::EmptyPath(id) if id == VehicleId(3)));
        assert!(v.destination.is_none());
    }

    #[test]
    fn single_waypoint_path_is_immediately_consumed() {
        let mut v = vehicle_at(1, GeoPoint::new(0.0, 0.0));
        v.assign_path(vec![GeoPoint::new(0.0, 0.0)], GeoPoint::new(0.0, 0.0), t0()).unwrap();
        assert!(v.is_path_consumed());
        assert!(!v.is_driving());
    }

    #[test]
    fn route_due_honours_retry_delay() {
        let mut v = vehicle_at(1, GeoPoint::new(0.0, 0.0));
        assert!(v.route_due(t0(), 5.0));

        v.mark_route_failed(t0());
        assert!(!v.route_due(t0() + chrono::Duration::seconds(4), 5.0));
        assert!(v.route_due(t0() + chrono::Duration::seconds(5), 5.0));

        v.assign_path(east_path(), GeoPoint::new(0.0, 0.002), t0()).unwrap();
        assert!(!v.route_due(t0() + chrono::Duration::seconds(60), 5.0));
    }

    #[test]
    fn serialization_hides_internal_fields() {
        let mut v = vehicle_at(2, GeoPoint::new(28.6, 77.2));
        v.assign_path(east_path(), GeoPoint::new(0.0, 0.002), t0()).unwrap();
        let json = serde_json::to_value(&v).unwrap();

        assert_eq!(json["id"], "AMB-0002");
        assert_eq!(json["status"], "available");
        assert_eq!(json["location"]["lat"], 28.6);
        assert_eq!(json["location"]["lng"], 77.2);
        assert!(json.get("path").is_none());
        assert!(json.get("cursor").is_none());
        assert!(json.get("route_failed_at").is_none());
        assert!(json["last_updated"].as_str().unwrap().starts_with("2026-03-01T12:00:00"));
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;
    use crate::{advance_all, advance_vehicle};

    fn driving() -> Vehicle {
        let mut v = vehicle_at(1, GeoPoint::new(0.0, 0.0));
        v.assign_path(east_path(), GeoPoint::new(0.0, 0.002), t0()).unwrap();
        v
    }

    #[test]
    fn parked_vehicle_is_untouched() {
        let mut v = vehicle_at(1, GeoPoint::new(0.0, 0.0));
        let before = v.clone();
        assert!(advance_vehicle(&mut v, 1.0, t0()).is_none());
        assert_eq!(v, before);
    }

    #[test]
    fn partial_step_interpolates() {
        let mut v = driving();
        // 10 m/s × 5 s = 50 m of a 111 m segment.
        let adv = advance_vehicle(&mut v, 5.0, t0()).unwrap();
        assert!(!adv.reached_waypoint);
        assert!((adv.moved_m - 50.0).abs() < 1e-9);
        assert_eq!(v.cursor, 0);
        let moved = GeoPoint::new(0.0, 0.0).distance_m(v.location);
        assert!((moved - 50.0).abs() < 1e-6, "moved {moved}");
    }

    #[test]
    fn sufficient_budget_snaps_to_waypoint() {
        let mut v = driving();
        let adv = advance_vehicle(&mut v, 20.0, t0()).unwrap();
        assert!(adv.reached_waypoint);
        assert_eq!(v.cursor, 1);
        assert_eq!(v.location, GeoPoint::new(0.0, 0.001));
    }

    /// A budget spanning several segments still crosses only one waypoint;
    /// the rest is dropped.
    #[test]
    fn at_most_one_waypoint_per_tick() {
        let mut v = driving();
        // 10 m/s × 100 s = 1000 m, enough for both 111 m segments.
        let adv = advance_vehicle(&mut v, 100.0, t0()).unwrap();
        assert_eq!(v.cursor, 1);
        assert_eq!(v.location, GeoPoint::new(0.0, 0.001));
        assert!((adv.moved_m - 111.0).abs() < 1e-6);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut v = driving();
        let before = v.location;
        let adv = advance_vehicle(&mut v, 0.0, t0()).unwrap();
        assert_eq!(adv.moved_m, 0.0);
        assert_eq!(v.location, before);
        assert_eq!(v.cursor, 0);
    }

    #[test]
    fn moved_distance_never_exceeds_budget() {
        let mut v = driving();
        for dt in [0.3, 1.7, 2.0, 0.01, 4.0, 9.0] {
            let before = v.location;
            if let Some(adv) = advance_vehicle(&mut v, dt, t0()) {
                let real = before.distance_m(v.location);
                assert!(real <= v.speed_ms() * dt + 1e-6, "dt {dt}: moved {real}");
                assert!((real - adv.moved_m).abs() < 1e-6);
            }
            assert!(v.cursor < v.path.len());
        }
    }

    #[test]
    fn advance_all_reports_consumed_paths() {
        let mut a = driving();
        a.id = VehicleId(10);
        a.cursor = 1; // one segment left
        a.location = GeoPoint::new(0.0, 0.001);

        let mut b = driving();
        b.id = VehicleId(11);

        let mut parked = vehicle_at(12, GeoPoint::new(0.0, 0.0));
        parked.last_updated = t0();

        let later = t0() + chrono::Duration::seconds(30);
        let mut fleet = vec![a, b, parked];
        let summary = advance_all(&mut fleet, 20.0, later);

        assert_eq!(summary.advanced, 2);
        assert_eq!(summary.consumed, vec![VehicleId(10)]);
        assert!((summary.distance_m - 222.0).abs() < 1e-6);
        assert_eq!(fleet[0].last_updated, later);
        assert_eq!(fleet[2].last_updated, t0());
    }
}

// ── Fleet ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet {
    use super::*;
    use crate::{Anchor, Fleet, MobilityError};

    #[test]
    fn new_fleet_is_empty_and_unanchored() {
        let f = Fleet::new();
        assert!(f.is_empty());
        assert_eq!(f.anchor, Anchor::Empty);
        assert_eq!(f.anchor.center(), None);
        assert!(f.last_tick.is_none());
    }

    #[test]
    fn replace_swaps_batch_and_anchor() {
        let mut f = Fleet::new();
        let c1 = GeoPoint::new(1.0, 1.0);
        f.replace(vec![vehicle_at(1, c1), vehicle_at(2, c1)], c1, t0());
        assert_eq!(f.len(), 2);
        assert_eq!(f.anchor, Anchor::Anchored(c1));
        assert_eq!(f.last_tick, Some(t0()));

        let c2 = GeoPoint::new(2.0, 2.0);
        f.replace(vec![vehicle_at(3, c2)], c2, t0());
        assert_eq!(f.len(), 1);
        assert!(f.vehicle(VehicleId(1)).is_none());
        assert!(f.vehicle(VehicleId(3)).is_some());
        assert_eq!(f.anchor.center(), Some(c2));
    }

    #[test]
    fn vehicle_mut_missing_id_errors() {
        let mut f = Fleet::new();
        assert!(matches!(f.vehicle_mut(VehicleId(9)), Err(MobilityError::VehicleNotFound(_))));
    }
}
