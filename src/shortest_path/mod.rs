//! Deterministic minimum-weight routing.
//!
//! - [`dijkstra`] — binary-heap Dijkstra with predecessor tracking, O((V + E) log V)

mod dijkstra;
mod state;

pub use dijkstra::{dijkstra, RELAXATION_TOLERANCE};
