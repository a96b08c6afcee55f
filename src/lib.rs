//! # geo-routing
//!
//! Route selection between geographic delivery points. Builds a complete
//! haversine-weighted graph over a node snapshot, then either solves the
//! shortest path deterministically or samples a simple path with probability
//! proportional to inverse cost, falling back to the deterministic answer
//! whenever sampling fails.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (GeoNode, NodeId, Path, Algorithm, RouteResult)
//! - [`distance`] — Haversine great-circle distance
//! - [`graph`] — Weighted graph and the complete-graph builder
//! - [`shortest_path`] — Dijkstra
//! - [`sampling`] — Cost model, simple-path enumeration, inverse-cost sampler
//! - [`optimizer`] — Mode dispatch, fallback policy, and timing

pub mod distance;
mod error;
pub mod graph;
pub mod models;
pub mod optimizer;
pub mod sampling;
pub mod shortest_path;

pub use error::{Error, SamplingError};
