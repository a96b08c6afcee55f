//! Node identity and geographic delivery points.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;
use crate::Error;

/// Opaque node identifier.
///
/// Cheap to clone: the underlying string is shared, so paths and graphs can
/// hold many copies without reallocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// A named delivery point at a latitude/longitude in degrees.
///
/// # Examples
///
/// ```
/// use geo_routing::models::GeoNode;
///
/// let node = GeoNode::new("a", "Warehouse", 40.7831, -73.9712).unwrap();
/// assert_eq!(node.id().as_str(), "a");
/// assert_eq!(node.name(), "Warehouse");
///
/// assert!(GeoNode::new("b", "Nowhere", 91.0, 0.0).is_none());
/// assert!(GeoNode::new("c", "Nowhere", f64::NAN, 0.0).is_none());
/// ```
///
/// Deserialization applies the same coordinate check as [`GeoNode::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoNode")]
pub struct GeoNode {
    id: NodeId,
    name: String,
    lat: f64,
    lng: f64,
}

impl GeoNode {
    /// Creates a node with an explicit id.
    ///
    /// Returns `None` if either coordinate is non-finite, the latitude lies
    /// outside [-90, 90] or the longitude outside [-180, 180].
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
        })
    }

    /// Creates a node with a freshly generated v4 UUID as its id.
    pub fn create(name: impl Into<String>, lat: f64, lng: f64) -> Option<Self> {
        Self::new(uuid::Uuid::new_v4().to_string(), name, lat, lng)
    }

    /// Node identifier.
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to another node in kilometers.
    pub fn distance_to(&self, other: &GeoNode) -> f64 {
        haversine_km((self.lat, self.lng), (other.lat, other.lng))
    }
}

#[derive(Deserialize)]
struct RawGeoNode {
    id: NodeId,
    name: String,
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoNode> for GeoNode {
    type Error = Error;

    fn try_from(raw: RawGeoNode) -> Result<Self, Self::Error> {
        let RawGeoNode { id, name, lat, lng } = raw;
        GeoNode::new(id, name, lat, lng).ok_or(Error::InvalidCoordinates { lat, lng })
    }
}
