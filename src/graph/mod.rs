//! Weighted graphs over delivery points.
//!
//! - [`WeightedGraph`] — undirected graph with non-negative weights, keyed by node id
//! - [`build_graph`] — complete haversine-weighted graph over a node snapshot, O(n²)

mod builder;
mod weighted;

pub use builder::build_graph;
pub use weighted::WeightedGraph;
