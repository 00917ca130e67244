//! Domain types for the shuttle trip planner.
//!
//! This module contains the core value types: stops, routes, ride
//! segments and trip plans. All types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod coordinate;
mod error;
mod route;
mod segment;
mod stop;
mod trip;

pub use coordinate::Coordinate;
pub use error::DomainError;
pub use route::{InvalidRouteId, Route, RouteId};
pub use segment::{RideSegment, StopIndex};
pub use stop::{InvalidStopId, Stop, StopId};
pub use trip::TripPlan;
