//! Module for building and querying the network of trade routes and choke points
use crate::route::{ChokePointID, ChokePointMap, RouteID, RouteMap};
use crate::units::Dollars;
use log::info;
use petgraph::Undirected;
use petgraph::graph::{Graph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;

/// A bipartite graph linking routes to the choke points they pass through
type RouteGraph = Graph<NetworkNode, (), Undirected>;

#[derive(Eq, PartialEq, Clone, Hash, Debug)]
/// A node in the route network
enum NetworkNode {
    /// A trade route
    Route(RouteID),
    /// A choke point with a record in the dataset
    ChokePoint(ChokePointID),
}

/// How exposed trade is to a choke point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChokePointExposure {
    /// The choke point
    pub choke_point: ChokePointID,
    /// Number of listed routes passing through it
    pub route_count: usize,
    /// Value of trade passing through it per year
    pub trade_value: Dollars,
}

/// The network of trade routes and choke points
pub struct RouteNetwork {
    graph: RouteGraph,
    route_nodes: HashMap<RouteID, NodeIndex>,
    choke_point_nodes: HashMap<ChokePointID, NodeIndex>,
    choke_point_order: Vec<(ChokePointID, Dollars)>,
}

impl RouteNetwork {
    /// Build the network.
    ///
    /// Waypoints named by a route which have no choke point record are skipped and logged.
    pub fn new(routes: &RouteMap, choke_points: &ChokePointMap) -> Self {
        let mut graph = Graph::default();
        let choke_point_nodes: HashMap<_, _> = choke_points
            .keys()
            .map(|id| (id.clone(), graph.add_node(NetworkNode::ChokePoint(id.clone()))))
            .collect();

        let mut route_nodes = HashMap::new();
        for route in routes.values() {
            let route_node = graph.add_node(NetworkNode::Route(route.id.clone()));
            route_nodes.insert(route.id.clone(), route_node);
            for name in &route.choke_points {
                let Some(&choke_point_node) = choke_point_nodes.get(name) else {
                    info!(
                        "Route '{}' passes {name}, which has no choke point record",
                        route.id
                    );
                    continue;
                };
                graph.update_edge(route_node, choke_point_node, ());
            }
        }

        let choke_point_order = choke_points
            .values()
            .map(|choke_point| (choke_point.id.clone(), choke_point.trade_value))
            .collect();

        Self {
            graph,
            route_nodes,
            choke_point_nodes,
            choke_point_order,
        }
    }

    /// The routes passing through a choke point, in the order they were added.
    ///
    /// Returns an empty list for an unknown choke point.
    pub fn routes_through(&self, choke_point: &ChokePointID) -> Vec<RouteID> {
        let Some(&node) = self.choke_point_nodes.get(choke_point) else {
            return Vec::new();
        };

        let mut routes: Vec<_> = self
            .graph
            .neighbors(node)
            .filter_map(|neighbour| match &self.graph[neighbour] {
                NetworkNode::Route(id) => Some((neighbour, id.clone())),
                NetworkNode::ChokePoint(_) => None,
            })
            .collect();
        routes.sort_by_key(|(index, _)| *index);
        routes.into_iter().map(|(_, id)| id).collect()
    }

    /// The choke points with records that a route passes through
    pub fn choke_points_on(&self, route: &RouteID) -> Vec<ChokePointID> {
        let Some(&node) = self.route_nodes.get(route) else {
            return Vec::new();
        };

        let mut choke_points: Vec<_> = self
            .graph
            .neighbors(node)
            .filter_map(|neighbour| match &self.graph[neighbour] {
                NetworkNode::ChokePoint(id) => Some((neighbour, id.clone())),
                NetworkNode::Route(_) => None,
            })
            .collect();
        choke_points.sort_by_key(|(index, _)| *index);
        choke_points.into_iter().map(|(_, id)| id).collect()
    }

    /// Rank choke points by the number of routes passing through them.
    ///
    /// Ties are broken by trade value, then by input order.
    pub fn exposure(&self) -> Vec<ChokePointExposure> {
        let mut exposure: Vec<_> = self
            .choke_point_order
            .iter()
            .map(|(id, trade_value)| ChokePointExposure {
                choke_point: id.clone(),
                route_count: self.graph.neighbors(self.choke_point_nodes[id]).count(),
                trade_value: *trade_value,
            })
            .collect();
        exposure.sort_by(|a, b| {
            b.route_count
                .cmp(&a.route_count)
                .then_with(|| b.trade_value.0.total_cmp(&a.trade_value.0))
        });

        exposure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{choke_point_map, route_map};
    use itertools::assert_equal;
    use rstest::{fixture, rstest};

    #[fixture]
    fn network(route_map: RouteMap, choke_point_map: ChokePointMap) -> RouteNetwork {
        RouteNetwork::new(&route_map, &choke_point_map)
    }

    #[rstest]
    fn test_routes_through(network: RouteNetwork) {
        assert_equal(
            network.routes_through(&"Strait of Malacca".into()),
            [
                RouteID::new("Asia - North Europe"),
                RouteID::new("Middle East - Asia Crude Oil"),
            ],
        );
        assert_equal(
            network.routes_through(&"Suez Canal".into()),
            [RouteID::new("Asia - North Europe")],
        );
        assert!(network.routes_through(&"Cape of Good Hope".into()).is_empty());
    }

    #[rstest]
    fn test_choke_points_on(network: RouteNetwork) {
        assert_equal(
            network.choke_points_on(&"Asia - North Europe".into()),
            [
                ChokePointID::new("Strait of Malacca"),
                ChokePointID::new("Suez Canal"),
            ],
        );
        assert!(
            network
                .choke_points_on(&"Brazil - China Iron Ore".into())
                .is_empty()
        );
    }

    #[rstest]
    fn test_exposure(network: RouteNetwork) {
        let exposure = network.exposure();
        assert_equal(
            exposure
                .iter()
                .map(|entry| (&*entry.choke_point.0, entry.route_count)),
            [
                ("Strait of Malacca", 2),
                ("Strait of Hormuz", 1),
                ("Suez Canal", 1),
                ("Panama Canal", 0),
            ],
        );
    }
}
