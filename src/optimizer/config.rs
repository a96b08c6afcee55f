//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::sampling::SamplingConfig;

/// Configuration carried by a [`RouteOptimizer`](super::RouteOptimizer).
///
/// Every field has a default, so a host can deserialize a partial table from
/// its own configuration file.
///
/// # Examples
///
/// ```
/// use geo_routing::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.sampling.max_nodes, 10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Cutoffs for the probabilistic-sampling branch.
    pub sampling: SamplingConfig,
    /// Fixed seed for the sampler; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl OptimizerConfig {
    /// Replaces the sampling cutoffs.
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Fixes the sampler seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
