//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::Coordinate;
use crate::locations::LocationCatalog;
use crate::planner::{PlanError, TripPlanner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", get(list_routes))
        .route("/locations", get(list_locations))
        .route("/trip/plan", post(plan_trip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every route with its ordered stops.
async fn list_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    let routes = state
        .graph
        .routes()
        .iter()
        .map(|route| RouteResult::from_route(route.as_ref()))
        .collect();

    Json(RoutesResponse { routes })
}

/// The places users can pick as origin or destination.
async fn list_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    let locations = state
        .catalog
        .iter()
        .map(LocationResult::from_location)
        .collect();

    Json(LocationsResponse { locations })
}

/// Plan a trip between two endpoints.
async fn plan_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TripPlanResult>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let origin = resolve_endpoint(&state.catalog, &req.origin, "origin")?;
    let destination = resolve_endpoint(&state.catalog, &req.destination, "destination")?;

    // Hold this request's snapshot of the network
    let graph = state.graph.clone();
    let planner = TripPlanner::new(&graph, &state.config);
    let trip = planner.plan(origin, destination)?;

    Ok(Json(TripPlanResult::from_trip(&trip)))
}

/// Turn a request endpoint into a coordinate.
fn resolve_endpoint(
    catalog: &LocationCatalog,
    endpoint: &Endpoint,
    which: &str,
) -> Result<Coordinate, AppError> {
    match endpoint {
        Endpoint::Location { location } => catalog
            .get(location)
            .map(|l| l.coordinate)
            .ok_or_else(|| AppError::NotFound {
                message: format!("Unknown {which} location: {location}"),
            }),
        Endpoint::Coordinate {
            latitude,
            longitude,
        } => {
            let valid = latitude.is_finite()
                && longitude.is_finite()
                && (-90.0..=90.0).contains(latitude)
                && (-180.0..=180.0).contains(longitude);
            if !valid {
                return Err(AppError::BadRequest {
                    message: format!("Invalid {which} coordinate: {latitude}, {longitude}"),
                });
            }
            Ok(Coordinate::new(*latitude, *longitude))
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },

    /// The request was understood but no trip can be offered
    Unprocessable { kind: &'static str, message: String },

    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::SameLocation { .. } => AppError::Unprocessable {
                kind: "same_location",
                message: e.to_string(),
            },
            PlanError::NoTripFound { .. } => AppError::Unprocessable {
                kind: "no_trip_found",
                message: e.to_string(),
            },
            PlanError::InvalidInput(_) => AppError::Unprocessable {
                kind: "invalid_input",
                message: e.to_string(),
            },
            PlanError::InvalidPlan(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, kind, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, None, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, None, message),
            AppError::Unprocessable { kind, message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(kind), message)
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, None, message),
        };

        warn!(%status, kind, %message, "request failed");

        let body = Json(ErrorResponse {
            error: message,
            kind,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;
    use crate::geo::GeoError;
    use crate::network::{NetworkDocument, TransitGraph};
    use crate::planner::PlannerConfig;

    fn campus_state() -> AppState {
        let doc = NetworkDocument::campus().unwrap();
        let graph = TransitGraph::new(&doc.to_network().unwrap());
        let catalog = LocationCatalog::from_records_or_graph(&doc.locations, &graph);
        AppState::new(graph, catalog, PlannerConfig::default())
    }

    async fn plan(state: &AppState, body: serde_json::Value) -> Result<TripPlanResult, AppError> {
        let bytes = Bytes::from(serde_json::to_vec(&body).unwrap());
        plan_trip(State(state.clone()), bytes)
            .await
            .map(|Json(r)| r)
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn routes_are_listed_in_order() {
        let Json(resp) = list_routes(State(campus_state())).await;
        let names: Vec<&str> = resp.routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Gold Route",
                "Red Route",
                "Blue Route",
                "Green Route",
                "Trolley Route"
            ]
        );
        assert_eq!(resp.routes[0].stops[0].name, "Tech Square WB");
    }

    #[tokio::test]
    async fn locations_fall_back_to_stop_names() {
        let Json(resp) = list_locations(State(campus_state())).await;
        assert_eq!(resp.locations.len(), 30);
        assert!(resp.locations.iter().any(|l| l.name == "Student Center"));
    }

    #[tokio::test]
    async fn plan_between_named_locations() {
        let state = campus_state();
        let trip = plan(
            &state,
            serde_json::json!({
                "origin": { "location": "tech square wb" },
                "destination": { "location": "North Avenue Apartments" }
            }),
        )
        .await
        .unwrap();

        assert_eq!(trip.start_stop.id, "stop1");
        assert_eq!(trip.end_stop.id, "stop22");
        assert_eq!(trip.transfer_count, 1);
        assert_eq!(trip.segments[0].route_name, "Gold Route");
        assert_eq!(trip.segments[1].route_name, "Blue Route");
        assert_eq!(trip.segments[1].board.id, "stop16");
    }

    #[tokio::test]
    async fn plan_between_coordinates() {
        let state = campus_state();
        let trip = plan(
            &state,
            serde_json::json!({
                "origin": { "latitude": 33.7766, "longitude": -84.3887 },
                "destination": { "latitude": 33.7801, "longitude": -84.3848 }
            }),
        )
        .await
        .unwrap();

        assert_eq!(trip.transfer_count, 0);
        assert!(trip.walk_to_start_km > 0.0);
        assert!(trip.walk_from_end_km > 0.0);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let state = campus_state();
        let err = plan_trip(State(state), Bytes::from_static(b"{ not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn unknown_location_is_not_found() {
        let state = campus_state();
        let err = plan(
            &state,
            serde_json::json!({
                "origin": { "location": "Atlantis" },
                "destination": { "location": "Student Center" }
            }),
        )
        .await
        .unwrap_err();

        match err {
            AppError::NotFound { message } => {
                assert_eq!(message, "Unknown origin location: Atlantis")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn out_of_range_coordinate_is_bad_request() {
        let state = campus_state();
        let err = plan(
            &state,
            serde_json::json!({
                "origin": { "latitude": 95.0, "longitude": 0.0 },
                "destination": { "location": "Student Center" }
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn same_location_is_unprocessable() {
        let state = campus_state();
        let err = plan(
            &state,
            serde_json::json!({
                "origin": { "location": "Student Center" },
                "destination": { "location": "Student Center" }
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Unprocessable {
                kind: "same_location",
                ..
            }
        ));
    }

    #[test]
    fn plan_errors_map_to_kinds() {
        let err = AppError::from(PlanError::NoTripFound {
            from: StopId::parse("a").unwrap(),
            to: StopId::parse("b").unwrap(),
        });
        assert!(matches!(
            err,
            AppError::Unprocessable {
                kind: "no_trip_found",
                ..
            }
        ));

        let err = AppError::from(PlanError::InvalidInput(GeoError::EmptyStopSet));
        assert!(matches!(
            err,
            AppError::Unprocessable {
                kind: "invalid_input",
                ..
            }
        ));
    }

    #[test]
    fn error_statuses() {
        let resp = AppError::Unprocessable {
            kind: "no_trip_found",
            message: "none".to_string(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = AppError::NotFound {
            message: "x".to_string(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
