//! Domain model types for geographic route selection.
//!
//! Provides delivery points with opaque ids, paths as ordered node
//! sequences with their distance, and the per-call route result.

mod node;
mod path;
mod result;

pub use node::{GeoNode, NodeId};
pub use path::Path;
pub use result::{Algorithm, RouteResult};
