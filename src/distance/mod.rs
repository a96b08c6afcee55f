//! Great-circle distance between geographic coordinates.
//!
//! Provides the haversine distance used to weight every graph edge.

mod haversine;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
