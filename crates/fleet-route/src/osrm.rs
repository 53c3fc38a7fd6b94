//! HTTP client for an OSRM `route/v1` endpoint.
//!
//! Request shape:
//!
//! ```text
//! GET {base}/route/v1/{profile}/{lng},{lat};{lng},{lat}?overview=full&geometries=geojson
//! ```
//!
//! Multi-stop routes put every stop in the coordinate list, separated by `;`.
//!
//! OSRM answers with longitude-first GeoJSON coordinates; they are flipped to
//! latitude-first [`GeoPoint`]s before leaving this module.

use std::time::Duration;

use async_trait::async_trait;
use fleet_core::GeoPoint;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::provider::check_stops;
use crate::{Route, RouteError, RouteProvider, RouteResult};

pub const DEFAULT_PROFILE: &str = "driving";

/// Routing client for a self-hosted or public OSRM server.
#[derive(Clone, Debug)]
pub struct OsrmClient {
    client:   Client,
    base_url: String,
    profile:  String,
}

impl OsrmClient {
    /// Create a client for `base_url` (e.g. `http://osrm:5000`).  Every
    /// request is abandoned after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RouteResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            profile:  DEFAULT_PROFILE.to_string(),
        })
    }

    /// Use a profile other than `driving`.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Request URL without the query string.
    pub fn route_url(&self, start: GeoPoint, end: GeoPoint) -> String {
        self.stops_url(&[start, end])
    }

    /// Request URL for a route through every stop, in order.
    pub fn stops_url(&self, stops: &[GeoPoint]) -> String {
        let coords: Vec<String> = stops.iter().map(|p| format!("{},{}", p.lng, p.lat)).collect();
        format!("{}/route/v1/{}/{}", self.base_url, self.profile, coords.join(";"))
    }

    async fn request(&self, url: &str) -> RouteResult<Route> {
        debug!(%url, "requesting OSRM route");

        let response = self.client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_route_response(&body)
    }
}

#[async_trait]
impl RouteProvider for OsrmClient {
    async fn fetch_path(&self, start: GeoPoint, end: GeoPoint) -> RouteResult<Route> {
        self.request(&self.route_url(start, end)).await
    }

    /// One OSRM request with every stop in the coordinate list.
    async fn fetch_multi(&self, stops: &[GeoPoint]) -> RouteResult<Route> {
        check_stops(stops)?;
        self.request(&self.stops_url(stops)).await
    }
}

// ── Response parsing ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// Extract the first route from an OSRM JSON body.
///
/// Fails on a non-`Ok` code, an empty route list, or a geometry with fewer
/// than two coordinates.
pub fn parse_route_response(body: &str) -> RouteResult<Route> {
    let response: OsrmResponse = serde_json::from_str(body)?;
    if response.code != "Ok" {
        return Err(RouteError::NoRoute(response.code));
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::NoRoute("empty route list".into()))?;

    let parsed = Route {
        waypoints: route
            .geometry
            .coordinates
            .into_iter()
            .map(GeoPoint::from_lng_lat)
            .collect(),
        distance_m:    route.distance,
        duration_secs: route.duration,
    };

    if parsed.len() < 2 {
        return Err(RouteError::Malformed(format!("geometry has {} coordinate(s)", parsed.len())));
    }
    if let Some(bad) = parsed.waypoints.iter().find(|p| !p.is_valid()) {
        return Err(RouteError::Malformed(format!("invalid coordinate {bad}")));
    }
    Ok(parsed)
}
