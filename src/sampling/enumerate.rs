//! Simple-path enumeration.
//!
//! # Algorithm
//!
//! Iterative depth-first search. Each stack frame holds the unexplored
//! neighbours of the node at the same depth of the current path; a bitset
//! marks the nodes on the path so none is visited twice. Reaching the target
//! records the path and backtracks without extending past it.
//!
//! # Complexity
//!
//! Exponential in the number of nodes: a complete graph on n nodes has
//! Σ_{k=0}^{n-2} (n-2)!/(n-2-k)! simple paths between two of its nodes. The
//! `max_paths` cutoff bounds the work.

use std::vec::IntoIter;

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

use crate::error::SamplingError;
use crate::graph::WeightedGraph;
use crate::models::{NodeId, Path};

/// Enumerates every simple path from `start` to `end`, each with its distance.
///
/// Returns an empty collection when either node is absent, the nodes are
/// disconnected, or `start == end`. Order is unspecified.
///
/// # Errors
///
/// [`SamplingError::TooManyPaths`] as soon as more than `max_paths` paths are found.
///
/// # Examples
///
/// ```
/// use geo_routing::graph::build_graph;
/// use geo_routing::models::GeoNode;
/// use geo_routing::sampling::enumerate_simple_paths;
///
/// let nodes = vec![
///     GeoNode::new("a", "A", 0.0, 0.0).unwrap(),
///     GeoNode::new("b", "B", 0.0, 1.0).unwrap(),
///     GeoNode::new("c", "C", 1.0, 0.0).unwrap(),
/// ];
/// let g = build_graph(&nodes);
/// // a→c directly, or a→b→c
/// let paths = enumerate_simple_paths(&g, nodes[0].id(), nodes[2].id(), 100).unwrap();
/// assert_eq!(paths.len(), 2);
/// ```
pub fn enumerate_simple_paths(
    graph: &WeightedGraph,
    start: &NodeId,
    end: &NodeId,
    max_paths: usize,
) -> Result<Vec<Path>, SamplingError> {
    let (Ok(source), Ok(target)) = (graph.node_index(start), graph.node_index(end)) else {
        return Ok(Vec::new());
    };
    if source == target {
        return Ok(Vec::new());
    }

    let children = |node: NodeIndex| -> IntoIter<(NodeIndex, f64)> {
        graph.neighbors(node).collect::<Vec<_>>().into_iter()
    };

    let mut on_path = FixedBitSet::with_capacity(graph.node_count());
    on_path.insert(source.index());
    let mut path = vec![source];
    let mut costs = vec![0.0];
    let mut stack = vec![children(source)];
    let mut found = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let Some((child, weight)) = frame.next() else {
            stack.pop();
            costs.pop();
            if let Some(last) = path.pop() {
                on_path.set(last.index(), false);
            }
            continue;
        };

        let cost = costs.last().copied().unwrap_or_default() + weight;
        if child == target {
            if found.len() == max_paths {
                return Err(SamplingError::TooManyPaths { max: max_paths });
            }
            let nodes = path
                .iter()
                .chain(std::iter::once(&target))
                .map(|&n| graph.id_at(n).clone())
                .collect();
            found.push(Path::new(nodes, cost));
        } else if !on_path.contains(child.index()) {
            on_path.insert(child.index());
            path.push(child);
            costs.push(cost);
            stack.push(children(child));
        }
    }

    Ok(found)
}
