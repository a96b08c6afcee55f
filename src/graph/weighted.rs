//! Undirected weighted graph keyed by node id.

use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::models::NodeId;
use crate::Error;

/// An undirected graph with non-negative edge weights in kilometers.
///
/// Nodes are addressed by [`NodeId`]; internally they live in a
/// [`petgraph`] graph and are looked up through an id index.
///
/// # Examples
///
/// ```
/// use geo_routing::graph::WeightedGraph;
/// use geo_routing::models::NodeId;
///
/// let (a, b) = (NodeId::from("a"), NodeId::from("b"));
/// let mut g = WeightedGraph::new();
/// g.add_node(a.clone());
/// g.add_node(b.clone());
/// g.add_edge(&a, &b, 4.0).unwrap();
///
/// assert_eq!(g.weight(&b, &a), Some(4.0));
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: UnGraph<NodeId, f64>,
    index: HashMap<NodeId, NodeIndex>,
}

impl WeightedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            index: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a node, returning `false` if the id was already present.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        let idx = self.graph.add_node(id.clone());
        self.index.insert(id, idx);
        true
    }

    /// Connects two existing nodes, replacing any previous weight.
    ///
    /// # Errors
    ///
    /// [`Error::NodeNotFound`] if either endpoint is missing,
    /// [`Error::InvalidWeight`] for a negative or non-finite weight, or for a
    /// self-loop with a nonzero weight. Zero-weight self-loops are ignored.
    pub fn add_edge(&mut self, a: &NodeId, b: &NodeId, weight: f64) -> Result<(), Error> {
        let ia = self.node_index(a)?;
        let ib = self.node_index(b)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight });
        }
        if ia == ib {
            return if weight == 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidWeight { weight })
            };
        }
        self.graph.update_edge(ia, ib, weight);
        Ok(())
    }

    /// Returns `true` if the node is in the graph.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Weight of the edge between two nodes, if both exist and are connected.
    pub fn weight(&self, a: &NodeId, b: &NodeId) -> Option<f64> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.graph
            .find_edge(ia, ib)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.graph.node_weights()
    }

    /// Every undirected edge once, as `(a, b, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], *e.weight()))
    }

    /// Total weight along consecutive nodes, or `None` if any hop is missing.
    pub fn path_distance(&self, nodes: &[NodeId]) -> Option<f64> {
        nodes
            .windows(2)
            .map(|pair| self.weight(&pair[0], &pair[1]))
            .sum()
    }

    pub(crate) fn node_index(&self, id: &NodeId) -> Result<NodeIndex, Error> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::NodeNotFound(id.clone()))
    }

    /// Neighbours of `node` with the connecting edge weight.
    pub(crate) fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph.edges(node).map(move |e| {
            let next = if e.source() == node { e.target() } else { e.source() };
            (next, *e.weight())
        })
    }

    /// Edges as `(position, position, weight)`; positions follow insertion order.
    pub(crate) fn indexed_edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
    }

    pub(crate) fn id_at(&self, node: NodeIndex) -> &NodeId {
        &self.graph[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (NodeId, NodeId, NodeId) {
        (NodeId::from("a"), NodeId::from("b"), NodeId::from("c"))
    }

    #[test]
    fn test_empty_graph() {
        let g = WeightedGraph::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains(&NodeId::from("a")));
    }

    #[test]
    fn test_add_node_idempotent() {
        let (a, _, _) = ids();
        let mut g = WeightedGraph::new();
        assert!(g.add_node(a.clone()));
        assert!(!g.add_node(a.clone()));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_add_edge_symmetric_and_replaced() {
        let (a, b, _) = ids();
        let mut g = WeightedGraph::new();
        g.add_node(a.clone());
        g.add_node(b.clone());
        g.add_edge(&a, &b, 2.0).expect("valid edge");
        g.add_edge(&b, &a, 3.0).expect("valid edge");
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(&a, &b), Some(3.0));
        assert_eq!(g.weight(&b, &a), Some(3.0));
    }

    #[test]
    fn test_add_edge_unknown_node() {
        let (a, b, _) = ids();
        let mut g = WeightedGraph::new();
        g.add_node(a.clone());
        assert_eq!(g.add_edge(&a, &b, 1.0), Err(Error::NodeNotFound(b)));
    }

    #[test]
    fn test_add_edge_invalid_weight() {
        let (a, b, _) = ids();
        let mut g = WeightedGraph::new();
        g.add_node(a.clone());
        g.add_node(b.clone());
        assert!(matches!(g.add_edge(&a, &b, -1.0), Err(Error::InvalidWeight { .. })));
        assert!(matches!(g.add_edge(&a, &b, f64::NAN), Err(Error::InvalidWeight { .. })));
        assert!(matches!(g.add_edge(&a, &a, 1.0), Err(Error::InvalidWeight { .. })));
        assert!(g.add_edge(&a, &a, 0.0).is_ok());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_path_distance() {
        let (a, b, c) = ids();
        let mut g = WeightedGraph::new();
        for id in [&a, &b, &c] {
            g.add_node(id.clone());
        }
        g.add_edge(&a, &b, 1.5).expect("valid edge");
        g.add_edge(&b, &c, 2.5).expect("valid edge");
        assert_eq!(g.path_distance(&[a.clone(), b.clone(), c.clone()]), Some(4.0));
        assert_eq!(g.path_distance(&[a.clone(), c.clone()]), None);
        assert_eq!(g.path_distance(&[a.clone()]), Some(0.0));
    }

    #[test]
    fn test_edges_listed_once() {
        let (a, b, c) = ids();
        let mut g = WeightedGraph::new();
        for id in [&a, &b, &c] {
            g.add_node(id.clone());
        }
        g.add_edge(&a, &b, 1.0).expect("valid edge");
        g.add_edge(&c, &b, 2.0).expect("valid edge");
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(&a, &b, 1.0), (&c, &b, 2.0)]);
    }

    #[test]
    fn test_neighbors_from_either_endpoint() {
        let (a, b, _) = ids();
        let mut g = WeightedGraph::new();
        g.add_node(a.clone());
        g.add_node(b.clone());
        g.add_edge(&a, &b, 7.0).expect("valid edge");
        let ib = g.node_index(&b).expect("present");
        let found: Vec<_> = g.neighbors(ib).map(|(n, w)| (g.id_at(n).clone(), w)).collect();
        assert_eq!(found, vec![(a, 7.0)]);
    }
}
