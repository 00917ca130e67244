//! Trip plan type.
//!
//! A `TripPlan` is the full answer to a query: walk to the first stop,
//! one or more ride segments, walk from the last stop.

use super::{DomainError, RideSegment, Stop};

/// A complete trip from the origin's nearest stop to the destination's.
///
/// # Invariants
///
/// - At least one segment
/// - Consecutive segments connect: each alight stop matches the next
///   board stop by id or by name
/// - Walking distances are finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    segments: Vec<RideSegment>,
    walk_to_start_km: f64,
    walk_from_end_km: f64,
}

impl TripPlan {
    /// Construct a trip plan, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `segments` is empty, if consecutive segments do
    /// not share a stop, or if a walking distance is negative or not finite.
    pub fn new(
        segments: Vec<RideSegment>,
        walk_to_start_km: f64,
        walk_from_end_km: f64,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyTrip);
        }

        for window in segments.windows(2) {
            let alight = window[0].alight_stop();
            let board = window[1].board_stop();
            if !alight.is_transfer_match(board) {
                return Err(DomainError::StopsNotConnected(
                    alight.id().clone(),
                    board.id().clone(),
                ));
            }
        }

        for walk in [walk_to_start_km, walk_from_end_km] {
            if !walk.is_finite() || walk < 0.0 {
                return Err(DomainError::InvalidWalkDistance(walk));
            }
        }

        Ok(Self {
            segments,
            walk_to_start_km,
            walk_from_end_km,
        })
    }

    pub fn segments(&self) -> &[RideSegment] {
        &self.segments
    }

    /// The stop where the first ride boards.
    pub fn start_stop(&self) -> &Stop {
        // Safe: validated non-empty at construction
        self.segments[0].board_stop()
    }

    /// The stop where the last ride alights.
    pub fn end_stop(&self) -> &Stop {
        // Safe: validated non-empty at construction
        self.segments[self.segments.len() - 1].alight_stop()
    }

    /// Walking distance from the origin to the start stop, in kilometers.
    pub fn walk_distance_to_start(&self) -> f64 {
        self.walk_to_start_km
    }

    /// Walking distance from the end stop to the destination, in kilometers.
    pub fn walk_distance_from_end(&self) -> f64 {
        self.walk_from_end_km
    }

    /// Sum of stops ridden over all segments.
    ///
    /// A transfer stop is counted once per segment it appears in.
    pub fn total_stop_count(&self) -> usize {
        self.segments.iter().map(RideSegment::stop_count).sum()
    }

    /// Number of route changes.
    pub fn transfer_count(&self) -> usize {
        self.segments.len() - 1
    }

    /// Returns true if the trip needs no transfer.
    pub fn is_direct(&self) -> bool {
        self.segments.len() == 1
    }

    /// Total ride distance in kilometers, excluding the walking legs.
    pub fn ride_distance_km(&self) -> f64 {
        self.segments.iter().map(RideSegment::distance_km).sum()
    }
}
