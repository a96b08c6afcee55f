//! Route optimization entry point.
//!
//! - [`RouteOptimizer`] — mode dispatch (`dijkstra` / `qaoa`) with deterministic fallback
//! - [`OptimizerConfig`] — sampling cutoffs and seed
//! - [`NodeSource`] — read seam onto the node store

mod config;
mod route_optimizer;
mod source;

pub use config::OptimizerConfig;
pub use route_optimizer::RouteOptimizer;
pub use source::NodeSource;
