//! Pairwise cost model derived from graph edge weights.

use crate::error::SamplingError;
use crate::graph::WeightedGraph;

/// A single pairwise cost between two node positions.
///
/// Positions follow the graph's node insertion order, i.e. the order of
/// [`WeightedGraph::node_ids`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairwiseTerm {
    /// Row position.
    pub i: usize,
    /// Column position.
    pub j: usize,
    /// Edge weight in kilometers, never zero.
    pub weight: f64,
}

/// Dense pairwise cost model over the nodes of a graph.
///
/// Holds one term per nonzero-weight edge in each orientation, matching the
/// entries of a symmetric n×n cost matrix. A model with no terms is
/// degenerate: the graph carries no weighted edges at all.
///
/// The optimizer only consults [`CostModel::is_degenerate`]. [`CostModel::size`]
/// and [`CostModel::terms`] expose the matrix entries for callers that hand
/// the model to an external pairwise-cost solver.
///
/// # Examples
///
/// ```
/// use geo_routing::graph::WeightedGraph;
/// use geo_routing::models::NodeId;
/// use geo_routing::sampling::CostModel;
///
/// let mut g = WeightedGraph::new();
/// g.add_node(NodeId::from("a"));
/// let model = CostModel::from_graph(&g, 10).unwrap();
/// assert!(model.is_degenerate());
///
/// let b = NodeId::from("b");
/// g.add_node(b.clone());
/// g.add_edge(&NodeId::from("a"), &b, 3.5).unwrap();
/// let model = CostModel::from_graph(&g, 10).unwrap();
/// assert_eq!(model.size(), 2);
/// let total: f64 = model.terms().iter().map(|t| t.weight).sum();
/// assert_eq!(total, 7.0);
/// ```
#[derive(Debug, Clone)]
pub struct CostModel {
    size: usize,
    terms: Vec<PairwiseTerm>,
}

impl CostModel {
    /// Builds the cost model for `graph`.
    ///
    /// # Errors
    ///
    /// [`SamplingError::GraphTooLarge`] if the graph has more than `max_nodes` nodes.
    pub fn from_graph(graph: &WeightedGraph, max_nodes: usize) -> Result<Self, SamplingError> {
        let size = graph.node_count();
        if size > max_nodes {
            return Err(SamplingError::GraphTooLarge {
                nodes: size,
                max: max_nodes,
            });
        }

        let mut terms = Vec::with_capacity(graph.edge_count() * 2);
        for (i, j, weight) in graph.indexed_edges() {
            if weight == 0.0 {
                continue;
            }
            terms.push(PairwiseTerm { i, j, weight });
            terms.push(PairwiseTerm { i: j, j: i, weight });
        }

        Ok(Self { size, terms })
    }

    /// Number of nodes (matrix dimension).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Nonzero pairwise terms.
    pub fn terms(&self) -> &[PairwiseTerm] {
        &self.terms
    }

    /// Returns `true` if there are no pairwise terms.
    pub fn is_degenerate(&self) -> bool {
        self.terms.is_empty()
    }
}
