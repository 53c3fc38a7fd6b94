//! HTTP routes.
//!
//! ```text
//! GET /                                   service banner
//! GET /health                             liveness
//! GET /api/fleet/vehicles?lat=&lng=       respawn if needed, tick, list all
//! GET /api/fleet/nearest?lat=&lng=&limit= nearest available vehicles + ETA
//! GET /api/routing/route?start_lat=&start_lng=&end_lat=&end_lng=
//!
//! POST /api/emergency/nearest-ambulance   {location: {latitude, longitude}, limit}
//! POST /api/routing/route                 {start_location, end_location}
//! POST /api/routing/route/multi           [{latitude, longitude}, ...]
//! ```
//!
//! Query coordinates arrive as raw strings so that malformed input can be
//! handled per endpoint: the vehicle list falls back to the default
//! reference, the other GET routes answer 400.  JSON bodies with values out
//! of range answer 422.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use fleet_core::{Clock, GeoPoint, VehicleId, VehicleStatus};
use fleet_mobility::Vehicle;
use fleet_route::{Route, RouteProvider};
use fleet_sim::{FleetHandle, NearestVehicle};

use crate::error::{ApiResult, bad_request, unprocessable};

pub const DEFAULT_NEAREST_LIMIT: usize = 5;
pub const MAX_NEAREST_LIMIT: usize = 20;

/// Build the application router around one fleet.
pub fn router<P, C>(fleet: FleetHandle<P, C>) -> Router
where
    P: RouteProvider + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/fleet/vehicles", get(list_vehicles::<P, C>))
        .route("/api/fleet/nearest", get(nearest_vehicles::<P, C>))
        .route("/api/routing/route", get(route_between::<P, C>).post(route_from_body::<P, C>))
        .route("/api/routing/route/multi", post(route_through_stops::<P, C>))
        .route("/api/emergency/nearest-ambulance", post(nearest_ambulance::<P, C>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(fleet)
}

// ── Query parsing ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ReferenceQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NearestQuery {
    pub lat:   Option<String>,
    pub lng:   Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub start_lat: Option<String>,
    pub start_lng: Option<String>,
    pub end_lat:   Option<String>,
    pub end_lng:   Option<String>,
}

fn parse_coord(name: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{name} is not a number: {raw:?}"))
}

/// `Ok(None)` when both halves are absent; otherwise both must be present,
/// numeric, and inside lat ±90 / lng ±180.
pub fn parse_point(lat: Option<&str>, lng: Option<&str>) -> Result<Option<GeoPoint>, String> {
    let (lat, lng) = match (lat, lng) {
        (None, None) => return Ok(None),
        (Some(lat), Some(lng)) => (parse_coord("lat", lat)?, parse_coord("lng", lng)?),
        _ => return Err("lat and lng must be given together".to_string()),
    };
    let point = GeoPoint::new(lat, lng);
    if point.is_valid() {
        Ok(Some(point))
    } else {
        Err(format!("coordinate out of range: {point}"))
    }
}

fn require_point(lat: Option<&str>, lng: Option<&str>, what: &str) -> ApiResult<GeoPoint> {
    parse_point(lat, lng)
        .map_err(bad_request)?
        .ok_or_else(|| bad_request(format!("{what} coordinate is required")))
}

pub fn parse_limit(raw: Option<&str>) -> Result<usize, String> {
    let Some(raw) = raw else { return Ok(DEFAULT_NEAREST_LIMIT) };
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_NEAREST_LIMIT).contains(&n) => Ok(n),
        _ => Err(format!("limit must be an integer in 1..={MAX_NEAREST_LIMIT}, got {raw:?}")),
    }
}

// ── JSON request bodies ───────────────────────────────────────────────────────

/// `{ "latitude": .., "longitude": .. }`, the location shape of the JSON
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude:  f64,
    pub longitude: f64,
}

impl Location {
    pub fn to_point(self, what: &str) -> ApiResult<GeoPoint> {
        let point = GeoPoint::new(self.latitude, self.longitude);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(unprocessable(format!("{what} location out of range: {point}")))
        }
    }
}

impl From<GeoPoint> for Location {
    fn from(p: GeoPoint) -> Self {
        Self { latitude: p.lat, longitude: p.lng }
    }
}

fn default_limit() -> i64 {
    DEFAULT_NEAREST_LIMIT as i64
}

#[derive(Debug, Deserialize)]
pub struct NearestAmbulanceRequest {
    pub location: Location,
    #[serde(default = "default_limit")]
    pub limit:    i64,
}

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub start_location: Location,
    pub end_location:   Location,
}

// ── Response bodies ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct VehiclesResponse {
    pub success:   bool,
    pub count:     usize,
    pub timestamp: DateTime<Utc>,
    pub data:      Vec<Vehicle>,
}

#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub success: bool,
    pub count:   usize,
    pub data:    Vec<NearestVehicle>,
}

/// A vehicle in the field names of the emergency endpoint.
#[derive(Debug, Serialize)]
pub struct AmbulanceView {
    pub id:               VehicleId,
    pub vehicle_number:   String,
    pub current_location: Location,
    pub status:           VehicleStatus,
    pub driver_name:      String,
    pub destination:      Option<Location>,
    pub last_updated:     DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NearestAmbulance {
    pub ambulance:       AmbulanceView,
    pub distance_meters: f64,
    pub eta_seconds:     u64,
}

impl From<NearestVehicle> for NearestAmbulance {
    fn from(n: NearestVehicle) -> Self {
        let v = n.vehicle;
        Self {
            ambulance: AmbulanceView {
                id:               v.id,
                vehicle_number:   v.vehicle_number,
                current_location: v.location.into(),
                status:           v.status,
                driver_name:      v.operator,
                destination:      v.destination.map(Location::from),
                last_updated:     v.last_updated,
            },
            distance_meters: n.distance_meters,
            eta_seconds:     n.eta_seconds,
        }
    }
}

/// GeoJSON `LineString`, longitude first.
#[derive(Debug, Serialize)]
pub struct LineString {
    #[serde(rename = "type")]
    pub kind:        &'static str,
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub distance_meters:  f64,
    pub duration_seconds: u64,
    pub geometry:         LineString,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            distance_meters:  route.distance_m,
            duration_seconds: route.duration_secs.max(0.0) as u64,
            geometry: LineString {
                kind:        "LineString",
                coordinates: route.waypoints.iter().map(|p| p.to_lng_lat()).collect(),
            },
        }
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Fleet position simulator",
        "version": env!("CARGO_PKG_VERSION"),
        "status":  "running",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn list_vehicles<P: RouteProvider, C: Clock>(
    State(fleet): State<FleetHandle<P, C>>,
    Query(q): Query<ReferenceQuery>,
) -> Json<VehiclesResponse> {
    let reference = parse_point(q.lat.as_deref(), q.lng.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "bad reference coordinate, using default");
        None
    });

    let snap = fleet.snapshot(reference).await;
    debug!(count = snap.count, anchor = ?snap.anchor, "vehicles served");

    Json(VehiclesResponse {
        success:   true,
        count:     snap.count,
        timestamp: snap.timestamp,
        data:      snap.vehicles,
    })
}

async fn nearest_vehicles<P: RouteProvider, C: Clock>(
    State(fleet): State<FleetHandle<P, C>>,
    Query(q): Query<NearestQuery>,
) -> ApiResult<Json<NearestResponse>> {
    let point = require_point(q.lat.as_deref(), q.lng.as_deref(), "incident")?;
    let limit = parse_limit(q.limit.as_deref()).map_err(bad_request)?;

    let data = fleet.nearest(point, limit).await;
    Ok(Json(NearestResponse { success: true, count: data.len(), data }))
}

async fn route_between<P: RouteProvider, C: Clock>(
    State(fleet): State<FleetHandle<P, C>>,
    Query(q): Query<RouteQuery>,
) -> ApiResult<Json<RouteResponse>> {
    let start = require_point(q.start_lat.as_deref(), q.start_lng.as_deref(), "start")?;
    let end = require_point(q.end_lat.as_deref(), q.end_lng.as_deref(), "end")?;

    let route = fleet.route(start, end).await?;
    Ok(Json(route.into()))
}

async fn nearest_ambulance<P: RouteProvider, C: Clock>(
    State(fleet): State<FleetHandle<P, C>>,
    Json(req): Json<NearestAmbulanceRequest>,
) -> ApiResult<Json<Vec<NearestAmbulance>>> {
    let point = req.location.to_point("incident")?;
    let limit = usize::try_from(req.limit)
        .ok()
        .filter(|n| (1..=MAX_NEAREST_LIMIT).contains(n))
        .ok_or_else(|| unprocessable(format!("limit must be in 1..={MAX_NEAREST_LIMIT}, got {}", req.limit)))?;

    let nearest = fleet.nearest(point, limit).await;
    Ok(Json(nearest.into_iter().map(NearestAmbulance::from).collect()))
}

async fn route_from_body<P: RouteProvider, C: Clock>(
    State(fleet): State<FleetHandle<P, C>>,
    Json(req): Json<RouteRequest>,
) -> ApiResult<Json<RouteResponse>> {
    let start = req.start_location.to_point("start")?;
    let end = req.end_location.to_point("end")?;

    let route = fleet.route(start, end).await?;
    Ok(Json(route.into()))
}

async fn route_through_stops<P: RouteProvider, C: Clock>(
    State(fleet): State<FleetHandle<P, C>>,
    Json(stops): Json<Vec<Location>>,
) -> ApiResult<Json<RouteResponse>> {
    if stops.len() < 2 {
        return Err(unprocessable(format!("need at least 2 waypoints, got {}", stops.len())));
    }
    let stops = stops
        .into_iter()
        .enumerate()
        .map(|(i, loc)| loc.to_point(&format!("waypoint {i}")))
        .collect::<ApiResult<Vec<GeoPoint>>>()?;

    let route = fleet.route_multi(&stops).await?;
    Ok(Json(route.into()))
}
