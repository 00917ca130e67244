//! The transit network: validated routes plus the indexed graph view.
//!
//! A `TransitNetwork` is the input boundary. It is built from a
//! [`NetworkDocument`] (or directly from `Route`s) and is immutable.
//! The [`TransitGraph`] built from it owns the lookup indices the
//! planner searches over.

mod document;
mod graph;

pub use document::{LocationRecord, NetworkDocument, RouteRecord, StopRecord};
pub use graph::TransitGraph;

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{DomainError, InvalidRouteId, InvalidStopId, Route, RouteId};

/// Error building or loading a transit network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The network has no routes
    #[error("network has no routes")]
    Empty,

    /// Two routes share an id
    #[error("duplicate route id: {0}")]
    DuplicateRoute(RouteId),

    /// A route failed validation
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    InvalidRouteId(#[from] InvalidRouteId),

    #[error(transparent)]
    InvalidStopId(#[from] InvalidStopId),

    /// The network document could not be read
    #[error("failed to read network document: {0}")]
    Io(#[from] std::io::Error),

    /// The network document is not valid JSON for the expected shape
    #[error("malformed network document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A non-empty collection of routes with unique ids.
///
/// Route order is significant: it is the order in which the planner
/// enumerates boarding and transfer candidates.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    routes: Vec<Arc<Route>>,
}

impl TransitNetwork {
    /// Build a network, rejecting an empty route list and duplicate ids.
    pub fn new(routes: Vec<Route>) -> Result<Self, NetworkError> {
        if routes.is_empty() {
            return Err(NetworkError::Empty);
        }

        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.id()) {
                return Err(NetworkError::DuplicateRoute(route.id().clone()));
            }
        }

        Ok(Self {
            routes: routes.into_iter().map(Arc::new).collect(),
        })
    }

    /// Routes in network order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}
