//! Complete haversine-weighted graph over a node snapshot.

use log::{debug, warn};

use super::WeightedGraph;
use crate::models::GeoNode;

/// Builds a complete undirected graph over `nodes`.
///
/// Every pair `i < j` is connected once with its haversine distance in
/// kilometers. Zero or one node yields a graph with no edges. If an id
/// appears more than once, the first occurrence is kept.
///
/// # Examples
///
/// ```
/// use geo_routing::graph::build_graph;
/// use geo_routing::models::GeoNode;
///
/// let nodes = vec![
///     GeoNode::new("a", "A", 0.0, 0.0).unwrap(),
///     GeoNode::new("b", "B", 0.0, 1.0).unwrap(),
///     GeoNode::new("c", "C", 1.0, 0.0).unwrap(),
/// ];
/// let g = build_graph(&nodes);
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 3);
/// ```
pub fn build_graph(nodes: &[GeoNode]) -> WeightedGraph {
    let n = nodes.len();
    let mut graph = WeightedGraph::with_capacity(n, n * n.saturating_sub(1) / 2);

    let mut unique: Vec<&GeoNode> = Vec::with_capacity(n);
    for node in nodes {
        if graph.add_node(node.id().clone()) {
            unique.push(node);
        } else {
            warn!("Duplicate node id {} ignored while building graph", node.id());
        }
    }

    for (i, a) in unique.iter().enumerate() {
        for b in &unique[i + 1..] {
            let weight = a.distance_to(b);
            if let Err(err) = graph.add_edge(a.id(), b.id(), weight) {
                warn!("Skipping edge {} - {}: {err}", a.id(), b.id());
            }
        }
    }

    debug!(
        "Built graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
