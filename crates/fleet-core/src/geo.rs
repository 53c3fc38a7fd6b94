//! Geographic coordinate type and planar spatial utilities.
//!
//! All distances here use a flat-earth approximation: one degree of either
//! latitude or longitude is taken to be [`METERS_PER_DEGREE`] metres.  The
//! simulator only ever measures sub-kilometre hops between neighbouring
//! waypoints, where the error of ignoring `cos(lat)` is acceptable.

use serde::{Deserialize, Serialize};

/// Fixed degrees-to-metres scale factor used by [`GeoPoint::distance_m`].
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// A WGS-84 coordinate, latitude first.
///
/// Serializes as `{ "lat": .., "lng": .. }`, which is the shape clients of
/// the snapshot endpoint expect.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build from a longitude-first pair, as found in GeoJSON and OSRM output.
    #[inline]
    pub fn from_lng_lat([lng, lat]: [f64; 2]) -> Self {
        Self { lat, lng }
    }

    /// Longitude-first pair for GeoJSON output.
    #[inline]
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// `true` if latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Euclidean distance in raw degree space.
    #[inline]
    pub fn degree_distance(self, other: GeoPoint) -> f64 {
        (other.lat - self.lat).hypot(other.lng - self.lng)
    }

    /// Approximate planar distance in metres.
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        self.degree_distance(other) * METERS_PER_DEGREE
    }

    /// The point `ratio` of the way from `self` to `other`, linear per axis.
    ///
    /// `ratio` is clamped to `[0, 1]`, so the result always lies on the
    /// segment.
    pub fn interpolate(self, other: GeoPoint, ratio: f64) -> GeoPoint {
        let t = ratio.clamp(0.0, 1.0);
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }

    /// Displace by `d_lat` / `d_lng` degrees.
    #[inline]
    pub fn offset(self, d_lat: f64, d_lng: f64) -> GeoPoint {
        GeoPoint { lat: self.lat + d_lat, lng: self.lng + d_lng }
    }

    /// Pull the point onto the valid range: latitude into [-90, 90] and
    /// longitude into [-180, 180].
    ///
    /// Longitude is clamped rather than wrapped.  Distances here are planar,
    /// so a wrapped point just across the antimeridian would sit a whole
    /// globe away from its neighbours.
    #[inline]
    pub fn clamped(self) -> GeoPoint {
        GeoPoint {
            lat: self.lat.clamp(-90.0, 90.0),
            lng: self.lng.clamp(-180.0, 180.0),
        }
    }

    /// Axis-aligned box check, `half_deg` on each side of `center`.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lng - center.lng).abs() <= half_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
