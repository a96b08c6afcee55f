//! Dijkstra's algorithm over a [`WeightedGraph`].
//!
//! # Complexity
//!
//! O((V + E) log V). On a complete graph built from haversine distances the
//! direct edge is always optimal by the triangle inequality, so the result is
//! the two-node path `[start, end]`. Rounding can make a detour through
//! collinear nodes come out a hair shorter than the direct edge, so a
//! relaxation must beat the current cost by more than [`RELAXATION_TOLERANCE`].

use std::collections::BinaryHeap;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use super::state::State;
use crate::graph::WeightedGraph;
use crate::models::{NodeId, Path};
use crate::Error;

/// Relative margin (absolute below 1 km) a new cost must undercut the best by.
pub const RELAXATION_TOLERANCE: f64 = 1e-9;

fn improves(candidate: f64, best: f64) -> bool {
    best - candidate > RELAXATION_TOLERANCE * best.max(1.0)
}

/// Finds the minimum-weight path from `start` to `end`.
///
/// Returns [`Path::unreachable`] if `end` cannot be reached and a one-node
/// path when `start == end`. Among routes whose costs agree to within
/// [`RELAXATION_TOLERANCE`] the first one discovered is kept, which on a
/// complete graph is the direct edge.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if either node is absent from the graph.
///
/// # Examples
///
/// ```
/// use geo_routing::graph::build_graph;
/// use geo_routing::models::GeoNode;
/// use geo_routing::shortest_path::dijkstra;
///
/// let nodes = vec![
///     GeoNode::new("a", "A", 0.0, 0.0).unwrap(),
///     GeoNode::new("b", "B", 0.0, 1.0).unwrap(),
///     GeoNode::new("c", "C", 1.0, 0.0).unwrap(),
/// ];
/// let g = build_graph(&nodes);
/// let path = dijkstra(&g, nodes[0].id(), nodes[2].id()).unwrap();
/// assert_eq!(path.nodes(), &[nodes[0].id().clone(), nodes[2].id().clone()]);
/// ```
pub fn dijkstra(graph: &WeightedGraph, start: &NodeId, end: &NodeId) -> Result<Path, Error> {
    let source = graph.node_index(start)?;
    let target = graph.node_index(end)?;

    if source == target {
        return Ok(Path::single(start.clone()));
    }

    let node_count = graph.node_count();
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(node_count);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count);

    heap.push(State {
        cost: 0.0,
        node: source,
    });
    distances.insert(source, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Stale heap entry
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for (next, weight) in graph.neighbors(node) {
            let next_cost = cost + weight;
            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                Entry::Occupied(mut entry) => {
                    if improves(next_cost, *entry.get()) {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    let Some(&distance) = distances.get(&target) else {
        return Ok(Path::unreachable());
    };

    let mut nodes = vec![graph.id_at(target).clone()];
    let mut current = target;
    while let Some(&prev) = predecessors.get(&current) {
        nodes.push(graph.id_at(prev).clone());
        current = prev;
    }
    nodes.reverse();

    Ok(Path::new(nodes, distance))
}
