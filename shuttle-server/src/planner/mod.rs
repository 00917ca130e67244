//! Trip planner using transfer-aware BFS.
//!
//! This module answers: "which shuttles do I ride to get from here to
//! there?" Both ends are snapped to their nearest stop, then a
//! breadth-first search explores rides and transfers between routes until
//! it first reaches the destination stop.

mod config;
mod search;
mod trip;


pub use config::{DEFAULT_MAX_ITERATIONS, PlannerConfig};
pub use search::{PathSearch, SearchResult, Termination};
pub use trip::{PlanError, TripPlanner};
