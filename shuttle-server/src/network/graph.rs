//! Read-only graph view over a transit network.
//!
//! Route and stop lookups go through pre-built indices so the planner's
//! inner loop does hash lookups instead of scanning every route.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Route, RouteId, Stop, StopId, StopIndex};

use super::TransitNetwork;

/// Indexed view of a [`TransitNetwork`].
///
/// Route positions stored in the indices refer to network order, and every
/// index list is sorted ascending, so iteration always follows the order
/// routes were supplied in.
#[derive(Debug)]
pub struct TransitGraph {
    routes: Vec<Arc<Route>>,

    /// Route id -> position in `routes`.
    route_positions: HashMap<RouteId, usize>,

    /// Distinct stops by id, in first-seen order across routes.
    stops: Vec<Stop>,

    /// Stop id -> position in `stops`.
    stops_by_id: HashMap<StopId, usize>,

    /// Stop id -> routes calling there (route positions, ascending).
    routes_by_stop_id: HashMap<StopId, Vec<usize>>,

    /// Stop name -> routes calling at a stop with that name.
    routes_by_stop_name: HashMap<String, Vec<usize>>,
}

impl TransitGraph {
    /// Build the indices for a network.
    pub fn new(network: &TransitNetwork) -> Self {
        let routes = network.routes().to_vec();

        let mut route_positions = HashMap::with_capacity(routes.len());
        let mut stops = Vec::new();
        let mut stops_by_id = HashMap::new();
        let mut routes_by_stop_id: HashMap<StopId, Vec<usize>> = HashMap::new();
        let mut routes_by_stop_name: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, route) in routes.iter().enumerate() {
            route_positions.insert(route.id().clone(), pos);

            for stop in route.stops() {
                if !stops_by_id.contains_key(stop.id()) {
                    stops_by_id.insert(stop.id().clone(), stops.len());
                    stops.push(stop.clone());
                }

                // Routes are visited in order, so checking the tail dedups
                let by_id = routes_by_stop_id.entry(stop.id().clone()).or_default();
                if by_id.last() != Some(&pos) {
                    by_id.push(pos);
                }

                let by_name = routes_by_stop_name
                    .entry(stop.name().to_string())
                    .or_default();
                if by_name.last() != Some(&pos) {
                    by_name.push(pos);
                }
            }
        }

        Self {
            routes,
            route_positions,
            stops,
            stops_by_id,
            routes_by_stop_id,
            routes_by_stop_name,
        }
    }

    /// All routes in network order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Look up a route by id.
    pub fn route(&self, id: &RouteId) -> Option<&Arc<Route>> {
        self.route_positions.get(id).map(|&pos| &self.routes[pos])
    }

    /// Every distinct stop, in the order first seen across routes.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.stops_by_id.get(id).map(|&pos| &self.stops[pos])
    }

    /// The ordered stop sequence of a route.
    pub fn stops_on_route(&self, route: &RouteId) -> Option<&[Stop]> {
        self.route(route).map(|r| r.stops())
    }

    /// Position of a stop on a route (first occurrence).
    pub fn index_of_stop(&self, route: &RouteId, stop: &StopId) -> Option<StopIndex> {
        self.route(route)?.position(stop).map(StopIndex)
    }

    /// Routes calling at the stop with this id, in network order.
    pub fn routes_containing(&self, stop: &StopId) -> impl Iterator<Item = &Arc<Route>> + '_ {
        self.route_list(self.routes_by_stop_id.get(stop))
    }

    /// Routes calling at any stop with this name, in network order.
    pub fn routes_containing_name(&self, name: &str) -> impl Iterator<Item = &Arc<Route>> + '_ {
        self.route_list(self.routes_by_stop_name.get(name))
    }

    /// Routes a rider at `stop` could transfer to: those calling at the
    /// same stop id or at a stop with the same name, in network order.
    ///
    /// Includes the route(s) `stop` itself is on; callers exclude their
    /// current route.
    pub fn transfer_routes(&self, stop: &Stop) -> Vec<&Arc<Route>> {
        let by_id = self.routes_by_stop_id.get(stop.id()).map(Vec::as_slice);
        let by_name = self.routes_by_stop_name.get(stop.name()).map(Vec::as_slice);

        let mut positions: Vec<usize> = by_id
            .unwrap_or(&[])
            .iter()
            .chain(by_name.unwrap_or(&[]))
            .copied()
            .collect();
        positions.sort_unstable();
        positions.dedup();

        positions.into_iter().map(|pos| &self.routes[pos]).collect()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    fn route_list<'a>(
        &'a self,
        positions: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a Arc<Route>> + 'a {
        positions
            .into_iter()
            .flatten()
            .map(move |&pos| &self.routes[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn stop(id: &str, name: &str) -> Stop {
        Stop::new(StopId::parse(id).unwrap(), name, Coordinate::new(0.0, 0.0))
    }

    fn route(id: &str, stops: Vec<Stop>) -> Route {
        Route::new(RouteId::parse(id).unwrap(), id, stops).unwrap()
    }

    fn sid(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn rid(s: &str) -> RouteId {
        RouteId::parse(s).unwrap()
    }

    fn ids<'a>(routes: impl IntoIterator<Item = &'a Arc<Route>>) -> Vec<&'a str> {
        routes.into_iter().map(|r| r.id().as_str()).collect()
    }

    /// Gold: a -> hub1 -> b
    /// Blue: hub2 -> c        (hub2 shares hub1's name)
    /// Red:  b -> d -> b      (loop through b)
    fn make_graph() -> TransitGraph {
        let network = TransitNetwork::new(vec![
            route(
                "gold",
                vec![stop("a", "A"), stop("hub1", "Hub"), stop("b", "B")],
            ),
            route("blue", vec![stop("hub2", "Hub"), stop("c", "C")]),
            route("red", vec![stop("b", "B"), stop("d", "D"), stop("b", "B")]),
        ])
        .unwrap();
        TransitGraph::new(&network)
    }

    #[test]
    fn distinct_stops_in_first_seen_order() {
        let graph = make_graph();
        let stop_ids: Vec<&str> = graph.stops().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(stop_ids, ["a", "hub1", "b", "hub2", "c", "d"]);
        assert_eq!(graph.stop_count(), 6);
        assert_eq!(graph.route_count(), 3);
    }

    #[test]
    fn lookup_route_and_stop() {
        let graph = make_graph();
        assert_eq!(graph.route(&rid("blue")).unwrap().name(), "blue");
        assert!(graph.route(&rid("green")).is_none());
        assert_eq!(graph.stop(&sid("hub2")).unwrap().name(), "Hub");
        assert!(graph.stop(&sid("zz")).is_none());
    }

    #[test]
    fn stops_on_route_and_index() {
        let graph = make_graph();
        assert_eq!(graph.stops_on_route(&rid("red")).unwrap().len(), 3);
        assert!(graph.stops_on_route(&rid("green")).is_none());

        assert_eq!(
            graph.index_of_stop(&rid("gold"), &sid("b")),
            Some(StopIndex(2))
        );
        // Loop routes report the first occurrence
        assert_eq!(
            graph.index_of_stop(&rid("red"), &sid("b")),
            Some(StopIndex(0))
        );
        assert_eq!(graph.index_of_stop(&rid("blue"), &sid("a")), None);
        assert_eq!(graph.index_of_stop(&rid("green"), &sid("a")), None);
    }

    #[test]
    fn routes_containing_by_id() {
        let graph = make_graph();
        assert_eq!(ids(graph.routes_containing(&sid("b"))), ["gold", "red"]);
        assert_eq!(ids(graph.routes_containing(&sid("hub1"))), ["gold"]);
        assert!(graph.routes_containing(&sid("zz")).next().is_none());
    }

    #[test]
    fn routes_containing_by_name() {
        let graph = make_graph();
        assert_eq!(ids(graph.routes_containing_name("Hub")), ["gold", "blue"]);
        assert!(graph.routes_containing_name("Nowhere").next().is_none());
    }

    #[test]
    fn transfer_routes_union_in_network_order() {
        let graph = make_graph();
        let hub2 = graph.stop(&sid("hub2")).unwrap();
        assert_eq!(ids(graph.transfer_routes(hub2)), ["gold", "blue"]);

        let b = graph.stop(&sid("b")).unwrap();
        assert_eq!(ids(graph.transfer_routes(b)), ["gold", "red"]);

        let lonely = stop("x", "X");
        assert!(graph.transfer_routes(&lonely).is_empty());
    }
}
