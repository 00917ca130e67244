//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, RideSegment, Route, Stop, TripPlan};
use crate::locations::Location;

/// One end of a trip request: a catalog location or a raw coordinate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Named place from the location catalog
    Location { location: String },

    /// Raw position
    Coordinate { latitude: f64, longitude: f64 },
}

/// Request to plan a trip.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    pub origin: Endpoint,
    pub destination: Endpoint,
}

/// A stop in responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResult {
    /// Stop id
    pub id: String,

    /// Display name
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,
}

/// One ride on one route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub route_id: String,
    pub route_name: String,

    /// Display color, if the route has one
    pub route_color: Option<String>,

    /// Where the rider boards
    pub board: StopResult,

    /// Where the rider gets off
    pub alight: StopResult,

    /// Every stop ridden through, boarding and alighting stops included
    pub stops: Vec<StopResult>,

    /// Ride length along the stop sequence
    pub distance_km: f64,
}

/// Response for trip planning.
#[derive(Debug, Serialize)]
pub struct TripPlanResult {
    /// Rides in order
    pub segments: Vec<SegmentResult>,

    /// First boarding stop
    pub start_stop: StopResult,

    /// Last alighting stop
    pub end_stop: StopResult,

    /// Walk from the origin to the first boarding stop
    pub walk_to_start_km: f64,

    /// Walk from the last alighting stop to the destination
    pub walk_from_end_km: f64,

    /// Stops across all rides; a transfer stop counts once per ride
    pub total_stop_count: usize,

    /// Number of route changes
    pub transfer_count: usize,

    /// Distance ridden on board, walks excluded
    pub ride_distance_km: f64,
}

/// A route in the route listing.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub color: Option<String>,
    pub stops: Vec<StopResult>,
}

/// Response for the route listing.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

/// A named place.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Response for the location listing.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<LocationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Machine-readable error category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

// Conversion implementations

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        let Coordinate {
            latitude,
            longitude,
        } = stop.coordinate();
        Self {
            id: stop.id().as_str().to_string(),
            name: stop.name().to_string(),
            latitude,
            longitude,
        }
    }
}

impl SegmentResult {
    pub fn from_segment(segment: &RideSegment) -> Self {
        let route = segment.route();
        Self {
            route_id: route.id().as_str().to_string(),
            route_name: route.name().to_string(),
            route_color: route.color().map(str::to_string),
            board: StopResult::from_stop(segment.board_stop()),
            alight: StopResult::from_stop(segment.alight_stop()),
            stops: segment.stops().iter().map(StopResult::from_stop).collect(),
            distance_km: segment.distance_km(),
        }
    }
}

impl TripPlanResult {
    pub fn from_trip(trip: &TripPlan) -> Self {
        Self {
            segments: trip
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            start_stop: StopResult::from_stop(trip.start_stop()),
            end_stop: StopResult::from_stop(trip.end_stop()),
            walk_to_start_km: trip.walk_distance_to_start(),
            walk_from_end_km: trip.walk_distance_from_end(),
            total_stop_count: trip.total_stop_count(),
            transfer_count: trip.transfer_count(),
            ride_distance_km: trip.ride_distance_km(),
        }
    }
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id().as_str().to_string(),
            name: route.name().to_string(),
            code: route.code().map(str::to_string),
            color: route.color().map(str::to_string),
            stops: route.stops().iter().map(StopResult::from_stop).collect(),
        }
    }
}

impl LocationResult {
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            latitude: location.coordinate.latitude,
            longitude: location.coordinate.longitude,
        }
    }
}
