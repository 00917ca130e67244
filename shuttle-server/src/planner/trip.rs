//! Trip assembly: nearest stops, path search, and walking legs.

use tracing::debug;

use crate::domain::{Coordinate, DomainError, StopId, TripPlan};
use crate::geo::{GeoError, nearest};
use crate::network::TransitGraph;

use super::config::PlannerConfig;
use super::search::PathSearch;

/// Why no trip plan could be produced.
///
/// All variants are expected outcomes the caller should present to the
/// user; none of them are worth retrying, since planning is deterministic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The stop set was empty or an endpoint is not a finite coordinate
    #[error("invalid input: {0}")]
    InvalidInput(#[from] GeoError),

    /// Origin and destination resolve to the same stop
    #[error("origin and destination are both nearest to stop {stop}")]
    SameLocation { stop: StopId },

    /// The search found no path between the two stops
    #[error("no trip found from stop {from} to stop {to}")]
    NoTripFound { from: StopId, to: StopId },

    /// The search returned segments that violate trip invariants
    #[error("search produced an invalid trip: {0}")]
    InvalidPlan(#[from] DomainError),
}

/// Plans trips between two coordinates over a transit graph.
pub struct TripPlanner<'a> {
    graph: &'a TransitGraph,
    config: &'a PlannerConfig,
}

impl<'a> TripPlanner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a TransitGraph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Plan a trip from `origin` to `destination`.
    ///
    /// Each end is snapped to its nearest stop; the walk to and from those
    /// stops is reported alongside the rides.
    pub fn plan(&self, origin: Coordinate, destination: Coordinate) -> Result<TripPlan, PlanError> {
        let start = nearest(origin, self.graph.stops())?;
        let end = nearest(destination, self.graph.stops())?;

        debug!(
            %origin,
            %destination,
            start = %start.stop.id(),
            end = %end.stop.id(),
            walk_to_start_km = start.distance_km,
            walk_from_end_km = end.distance_km,
            "resolved nearest stops"
        );

        // Identical coordinates always land here too: resolution is deterministic
        if start.stop.id() == end.stop.id() {
            return Err(PlanError::SameLocation {
                stop: start.stop.id().clone(),
            });
        }

        let search = PathSearch::new(self.graph, self.config);
        let result = search.find_path(start.stop.id(), end.stop.id());

        let Some(segments) = result.path else {
            return Err(PlanError::NoTripFound {
                from: start.stop.id().clone(),
                to: end.stop.id().clone(),
            });
        };

        Ok(TripPlan::new(segments, start.distance_km, end.distance_km)?)
    }
}
