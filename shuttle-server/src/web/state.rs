//! Application state for the web layer.

use std::sync::Arc;

use crate::locations::LocationCatalog;
use crate::network::TransitGraph;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The graph is immutable once built; each request plans against the
/// snapshot it cloned from here.
#[derive(Clone)]
pub struct AppState {
    /// Indexed shuttle network
    pub graph: Arc<TransitGraph>,

    /// Named places accepted as trip endpoints
    pub catalog: Arc<LocationCatalog>,

    /// Trip planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: TransitGraph, catalog: LocationCatalog, config: PlannerConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
