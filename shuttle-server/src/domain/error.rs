//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from search outcomes and IO errors.

use super::{RouteId, StopId};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A route was given no stops
    #[error("route {0} has no stops")]
    EmptyRoute(RouteId),

    /// Invalid segment construction (e.g., alight before board)
    #[error("invalid segment: {0}")]
    InvalidSegment(&'static str),

    /// Stop index is out of range for the route
    #[error("stop index {index} is out of range for route {route}")]
    StopIndexOutOfRange { route: RouteId, index: usize },

    /// Consecutive segments don't share a stop
    #[error("stops {0} and {1} are not a transfer point")]
    StopsNotConnected(StopId, StopId),

    /// Trip has no segments
    #[error("trip must have at least one segment")]
    EmptyTrip,

    /// Walking leg distance is negative or not a number
    #[error("invalid walking distance: {0}")]
    InvalidWalkDistance(f64),
}
