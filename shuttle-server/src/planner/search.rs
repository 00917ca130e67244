//! Transfer-aware BFS path search.
//!
//! Finds a sequence of rides from a start stop to an end stop, changing
//! routes wherever two routes share a stop (by id or by name). The queue
//! is strictly FIFO, so chains with fewer segments are expanded first, but
//! the first path that reaches the end stop is returned as-is: it is not
//! guaranteed to have the fewest transfers, stops, or kilometers.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{RideSegment, Route, RouteId, StopId, StopIndex};
use crate::network::TransitGraph;

use super::config::PlannerConfig;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A path to the end stop was found.
    Found,
    /// Start and end are the same stop; a trip needs at least one ride.
    SameStop,
    /// Every reachable ride-and-route state was expanded.
    QueueExhausted,
    /// The iteration cap was hit before a path was found.
    IterationCap,
}

/// Result of a path search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Ride segments from start to end, or `None` if no path was found.
    pub path: Option<Vec<RideSegment>>,

    /// Number of queue entries processed.
    pub iterations: usize,

    pub termination: Termination,
}

impl SearchResult {
    fn found(path: Vec<RideSegment>, iterations: usize) -> Self {
        Self {
            path: Some(path),
            iterations,
            termination: Termination::Found,
        }
    }

    fn no_path(termination: Termination, iterations: usize) -> Self {
        Self {
            path: None,
            iterations,
            termination,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// One queued state: riding `route`, currently at `stop`.
#[derive(Debug, Clone)]
struct SearchEntry {
    stop: StopId,
    route: Arc<Route>,

    /// Completed rides leading to this state.
    segments: Vec<RideSegment>,

    /// Stops already passed through on this chain. Each branch owns its
    /// copy so siblings never see each other's marks.
    visited_stops: HashSet<StopId>,
}

/// Breadth-first path search over a transit graph.
pub struct PathSearch<'a> {
    graph: &'a TransitGraph,
    config: &'a PlannerConfig,
}

impl<'a> PathSearch<'a> {
    /// Create a search over `graph`.
    pub fn new(graph: &'a TransitGraph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Find the first path from `start` to `end`.
    ///
    /// Never fails: same start and end, a disconnected network, and an
    /// exhausted iteration budget all come back as a result with no path.
    pub fn find_path(&self, start: &StopId, end: &StopId) -> SearchResult {
        if start == end {
            return finish(SearchResult::no_path(Termination::SameStop, 0));
        }

        // Seed one entry per route calling at the start stop
        let mut queue: VecDeque<SearchEntry> = self
            .graph
            .routes_containing(start)
            .map(|route| SearchEntry {
                stop: start.clone(),
                route: route.clone(),
                segments: Vec::new(),
                visited_stops: HashSet::from([start.clone()]),
            })
            .collect();

        // (stop, route) states already expanded in this run
        let mut visited: HashMap<StopId, HashSet<RouteId>> = HashMap::new();
        let mut iterations = 0;

        while let Some(entry) = queue.pop_front() {
            if iterations >= self.config.max_iterations {
                return finish(SearchResult::no_path(Termination::IterationCap, iterations));
            }
            iterations += 1;

            trace!(
                stop = %entry.stop,
                route = %entry.route.id(),
                depth = entry.segments.len(),
                queued = queue.len(),
                "expanding search entry"
            );

            if !visited
                .entry(entry.stop.clone())
                .or_default()
                .insert(entry.route.id().clone())
            {
                continue;
            }

            let Some(board_idx) = entry.route.position(&entry.stop) else {
                continue;
            };

            if let Some(path) = self.expand(entry, StopIndex(board_idx), end, &mut queue) {
                return finish(SearchResult::found(path, iterations));
            }
        }

        finish(SearchResult::no_path(
            Termination::QueueExhausted,
            iterations,
        ))
    }

    /// Ride forward from the entry's boarding point.
    ///
    /// Returns the completed path if the end stop is on this ride;
    /// otherwise queues a transfer entry for every other route at every
    /// stop not yet visited on this chain.
    fn expand(
        &self,
        entry: SearchEntry,
        board_idx: StopIndex,
        end: &StopId,
        queue: &mut VecDeque<SearchEntry>,
    ) -> Option<Vec<RideSegment>> {
        let route = entry.route.clone();

        for (idx, stop) in route.stops().iter().enumerate().skip(board_idx.next().0) {
            let Ok(segment) = RideSegment::new(route.clone(), board_idx, StopIndex(idx)) else {
                continue;
            };

            if stop.id() == end {
                let mut segments = entry.segments;
                segments.push(segment);
                return Some(segments);
            }

            if entry.visited_stops.contains(stop.id()) {
                continue;
            }

            for transfer in self.graph.transfer_routes(stop) {
                if transfer.id() == route.id() {
                    continue;
                }

                // Name-only matches board at the transfer route's own record
                let Some(transfer_idx) = transfer.boarding_position(stop) else {
                    continue;
                };
                let board_stop = &transfer.stops()[transfer_idx];

                let mut visited_stops = entry.visited_stops.clone();
                visited_stops.insert(stop.id().clone());
                visited_stops.insert(board_stop.id().clone());

                let mut segments = entry.segments.clone();
                segments.push(segment.clone());

                queue.push_back(SearchEntry {
                    stop: board_stop.id().clone(),
                    route: transfer.clone(),
                    segments,
                    visited_stops,
                });
            }
        }

        None
    }
}

fn finish(result: SearchResult) -> SearchResult {
    debug!(
        termination = ?result.termination,
        iterations = result.iterations,
        segments = result.path.as_ref().map_or(0, Vec::len),
        "path search complete"
    );
    result
}
