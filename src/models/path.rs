//! Paths through a weighted graph.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// An ordered sequence of distinct nodes with its total distance in kilometers.
///
/// An empty path with infinite distance means "no route".
///
/// # Examples
///
/// ```
/// use geo_routing::models::{NodeId, Path};
///
/// let p = Path::new(vec![NodeId::from("a"), NodeId::from("b")], 12.5);
/// assert_eq!(p.len(), 2);
/// assert!(p.is_reachable());
///
/// let none = Path::unreachable();
/// assert!(none.is_empty());
/// assert!(none.distance().is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<NodeId>,
    distance: f64,
}

impl Path {
    /// Creates a path from its nodes and total distance.
    pub fn new(nodes: Vec<NodeId>, distance: f64) -> Self {
        Self { nodes, distance }
    }

    /// The one-node path from a node to itself.
    pub fn single(node: NodeId) -> Self {
        Self::new(vec![node], 0.0)
    }

    /// The empty path signalling that no route exists.
    pub fn unreachable() -> Self {
        Self::new(Vec::new(), f64::INFINITY)
    }

    /// Nodes in travel order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Total distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if this path describes an actual route.
    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty() && self.distance.is_finite()
    }

    /// Consumes the path, returning its nodes and distance.
    pub fn into_parts(self) -> (Vec<NodeId>, f64) {
        (self.nodes, self.distance)
    }
}
