//! Probabilistic-sampling route selection.
//!
//! A classical stand-in for the "qaoa" mode: no quantum computation is
//! performed.
//!
//! - [`CostModel`] — pairwise cost terms from graph edge weights
//! - [`enumerate_simple_paths`] — bounded all-simple-paths DFS
//! - [`selection_probabilities`] / [`sample_path`] — inverse-cost weighting and a seeded draw
//! - [`SamplingConfig`] — node-count and path-count cutoffs

mod config;
mod cost_model;
mod enumerate;
mod sampler;

pub use config::SamplingConfig;
pub use cost_model::{CostModel, PairwiseTerm};
pub use enumerate::enumerate_simple_paths;
pub use sampler::{sample_path, selection_probabilities};
