//! Algorithm selection and per-call route results.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{NodeId, Path};
use crate::Error;

/// Route selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Deterministic shortest path.
    Dijkstra,
    /// Inverse-cost weighted sampling over all simple paths.
    ///
    /// The name is kept for wire compatibility; no quantum computation runs.
    Qaoa,
}

impl Algorithm {
    /// Lowercase mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::Qaoa => "qaoa",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parses a mode name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("dijkstra") {
            Ok(Self::Dijkstra)
        } else if s.eq_ignore_ascii_case("qaoa") {
            Ok(Self::Qaoa)
        } else {
            Err(Error::InvalidMode(s.to_string()))
        }
    }
}

/// Outcome of a single optimize call.
///
/// Owned by the caller; persisting it is left to the surrounding layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    algorithm: Algorithm,
    start_node_id: NodeId,
    end_node_id: NodeId,
    path: Vec<NodeId>,
    distance: f64,
    #[serde(with = "duration_secs")]
    execution_time: Duration,
}

impl RouteResult {
    /// Bundles a computed path with the request that produced it.
    pub fn new(
        algorithm: Algorithm,
        start: NodeId,
        end: NodeId,
        path: Path,
        execution_time: Duration,
    ) -> Self {
        let (path, distance) = path.into_parts();
        Self {
            algorithm,
            start_node_id: start,
            end_node_id: end,
            path,
            distance,
            execution_time,
        }
    }

    /// Mode the caller requested.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Requested start node.
    pub fn start_node_id(&self) -> &NodeId {
        &self.start_node_id
    }

    /// Requested end node.
    pub fn end_node_id(&self) -> &NodeId {
        &self.end_node_id
    }

    /// Node ids in travel order.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    /// Total distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Wall-clock time spent building the graph and solving.
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }
}

/// Serializes a [`Duration`] as fractional seconds.
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(d)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
