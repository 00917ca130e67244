//! Ride segment type.
//!
//! A `RideSegment` is one continuous ride on a single route from a
//! boarding stop to an alighting stop. It holds an `Arc<Route>` plus two
//! indices, so cloning it during search is cheap and its stops are always
//! a contiguous slice of the route.

use std::sync::Arc;

use super::{DomainError, Route, Stop};
use crate::geo;

/// Index of a stop within a route's ordered stop sequence.
///
/// Used instead of `StopId` so that routes visiting the same stop twice
/// (loops) are unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopIndex(pub usize);

impl StopIndex {
    /// Returns the next index.
    pub fn next(self) -> Self {
        StopIndex(self.0 + 1)
    }
}

/// A ride on one route.
///
/// # Invariants
///
/// - `alight_idx > board_idx` (rides only move forward along the route)
/// - Both indices are valid for the route's stops
#[derive(Debug, Clone)]
pub struct RideSegment {
    route: Arc<Route>,
    board_idx: StopIndex,
    alight_idx: StopIndex,
}

impl RideSegment {
    /// Construct a segment, validating direction and bounds.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `alight_idx <= board_idx` or either index is out
    /// of range for the route.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use shuttle_server::domain::{Coordinate, RideSegment, Route, RouteId, Stop, StopId, StopIndex};
    ///
    /// let stops = ["stop1", "stop2", "stop3"]
    ///     .iter()
    ///     .map(|id| Stop::new(StopId::parse(id).unwrap(), *id, Coordinate::new(0.0, 0.0)))
    ///     .collect();
    /// let route = Arc::new(Route::new(RouteId::parse("R1").unwrap(), "R1", stops).unwrap());
    ///
    /// let ride = RideSegment::new(route.clone(), StopIndex(0), StopIndex(2)).unwrap();
    /// assert_eq!(ride.stops().len(), 3);
    ///
    /// // Backwards rides are rejected
    /// assert!(RideSegment::new(route, StopIndex(2), StopIndex(1)).is_err());
    /// ```
    pub fn new(
        route: Arc<Route>,
        board_idx: StopIndex,
        alight_idx: StopIndex,
    ) -> Result<Self, DomainError> {
        if alight_idx <= board_idx {
            return Err(DomainError::InvalidSegment(
                "alight index must be after board index",
            ));
        }

        if alight_idx.0 >= route.stops().len() {
            return Err(DomainError::StopIndexOutOfRange {
                route: route.id().clone(),
                index: alight_idx.0,
            });
        }

        Ok(Self {
            route,
            board_idx,
            alight_idx,
        })
    }

    /// Returns the route this segment rides.
    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    pub fn board_idx(&self) -> StopIndex {
        self.board_idx
    }

    pub fn alight_idx(&self) -> StopIndex {
        self.alight_idx
    }

    pub fn board_stop(&self) -> &Stop {
        // Safe: validated at construction
        &self.route.stops()[self.board_idx.0]
    }

    pub fn alight_stop(&self) -> &Stop {
        // Safe: validated at construction
        &self.route.stops()[self.alight_idx.0]
    }

    /// Returns all stops ridden, board to alight inclusive.
    pub fn stops(&self) -> &[Stop] {
        &self.route.stops()[self.board_idx.0..=self.alight_idx.0]
    }

    /// Number of stops ridden, including board and alight.
    pub fn stop_count(&self) -> usize {
        self.alight_idx.0 - self.board_idx.0 + 1
    }

    /// Straight-line length of the ride in kilometers, stop to stop.
    pub fn distance_km(&self) -> f64 {
        self.stops()
            .windows(2)
            .map(|w| geo::distance(w[0].coordinate(), w[1].coordinate()))
            .sum()
    }
}

impl PartialEq for RideSegment {
    fn eq(&self, other: &Self) -> bool {
        self.route.id() == other.route.id()
            && self.board_idx == other.board_idx
            && self.alight_idx == other.alight_idx
    }
}
