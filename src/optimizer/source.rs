//! Read access to the current set of delivery points.

use crate::models::GeoNode;

/// Supplies the node snapshot a route is computed over.
///
/// Implemented by the persistence layer; the engine only reads from it.
/// Slices and vectors act as in-memory snapshots.
pub trait NodeSource {
    /// Returns the current nodes in a stable order.
    fn current_nodes(&self) -> Vec<GeoNode>;
}

impl NodeSource for [GeoNode] {
    fn current_nodes(&self) -> Vec<GeoNode> {
        self.to_vec()
    }
}

impl NodeSource for Vec<GeoNode> {
    fn current_nodes(&self) -> Vec<GeoNode> {
        self.clone()
    }
}
