//! Bounds on the probabilistic-sampling branch.

use serde::{Deserialize, Serialize};

/// Cutoffs that keep simple-path enumeration from blocking indefinitely.
///
/// A complete graph on 10 nodes has 109 601 simple paths between any two of
/// its nodes, so the defaults accept graphs of that size.
///
/// # Examples
///
/// ```
/// use geo_routing::sampling::SamplingConfig;
///
/// let config = SamplingConfig::default().with_max_nodes(6).with_max_paths(500);
/// assert_eq!(config.max_nodes, 6);
/// assert_eq!(config.max_paths, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Largest graph (node count) the cost model accepts.
    pub max_nodes: usize,
    /// Largest number of candidate paths enumeration may produce.
    pub max_paths: usize,
}

impl SamplingConfig {
    pub const DEFAULT_MAX_NODES: usize = 10;
    pub const DEFAULT_MAX_PATHS: usize = 200_000;

    /// Sets the node-count cutoff.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Sets the path-count cutoff.
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            max_paths: Self::DEFAULT_MAX_PATHS,
        }
    }
}
