use thiserror::Error;

use crate::models::NodeId;

/// Errors reported to callers of the routing engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid algorithm '{0}'. Use 'dijkstra' or 'qaoa'")]
    InvalidMode(String),
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("No path found between {start} and {end}")]
    NoPathFound { start: NodeId, end: NodeId },
    #[error("Invalid edge weight: {weight}")]
    InvalidWeight { weight: f64 },
    #[error("Invalid coordinates: lat {lat}, lng {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },
}

/// Failures inside the probabilistic-sampling branch.
///
/// The optimizer absorbs every variant and falls back to Dijkstra; they are
/// only observable when the sampling building blocks are called directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Graph has {nodes} nodes, sampling is limited to {max}")]
    GraphTooLarge { nodes: usize, max: usize },
    #[error("Path enumeration exceeded {max} candidate paths")]
    TooManyPaths { max: usize },
    #[error("No candidate paths available")]
    NoPathAvailable,
    #[error("Path weights do not form a distribution (total {total})")]
    InvalidDistribution { total: f64 },
    #[error("Weighted draw failed: {0}")]
    Weighted(#[from] rand::distr::weighted::Error),
}
