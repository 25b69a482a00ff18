//! Vertex and Edge Identifiers
//!
//! Vertices are identified by a dense index into the weight matrix. Their
//! external label is `N<index>`; edges are labelled `E<low>-<high>`.
//!
//! Identities are not stable across removals: removing vertex `k` shifts
//! every vertex above `k` down by one, so any label held outside the model
//! must be re-derived after a removal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Dense index of a vertex in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VertexId(usize);

impl VertexId {
    /// Wrap a raw index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    pub const fn index(&self) -> usize {
        self.0
    }

    /// The external label, e.g. `N3`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// Parse a non-empty run of ASCII digits. Signs and whitespace are rejected.
fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for VertexId {
    type Err = GraphError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        label
            .strip_prefix('N')
            .and_then(parse_index)
            .map(Self)
            .ok_or_else(|| GraphError::InvalidLabel(label.to_string()))
    }
}

impl From<VertexId> for String {
    fn from(id: VertexId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for VertexId {
    type Error = GraphError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

/// An undirected edge, stored with its endpoints in ascending order.
///
/// `EdgeId::new(a, b) == EdgeId::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EdgeId {
    low: VertexId,
    high: VertexId,
}

impl EdgeId {
    /// Create the edge between `a` and `b`, in either order.
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The lower-indexed endpoint.
    pub fn low(&self) -> VertexId {
        self.low
    }

    /// The higher-indexed endpoint.
    pub fn high(&self) -> VertexId {
        self.high
    }

    /// The endpoint opposite `vertex`, if `vertex` is one of the endpoints.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.low {
            Some(self.high)
        } else if vertex == self.high {
            Some(self.low)
        } else {
            None
        }
    }

    /// The external label, e.g. `E1-4`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}-{}", self.low.0, self.high.0)
    }
}

impl FromStr for EdgeId {
    type Err = GraphError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let (a, b) = label
            .strip_prefix('E')
            .and_then(|rest| rest.split_once('-'))
            .and_then(|(a, b)| Some((parse_index(a)?, parse_index(b)?)))
            // Self-loops are never valid edges.
            .filter(|(a, b)| a != b)
            .ok_or_else(|| GraphError::InvalidLabel(label.to_string()))?;
        Ok(Self::new(VertexId(a), VertexId(b)))
    }
}

impl From<EdgeId> for String {
    fn from(id: EdgeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for EdgeId {
    type Error = GraphError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_labels_round_trip() {
        let id = VertexId::new(12);
        assert_eq!(id.label(), "N12");
        assert_eq!("N12".parse::<VertexId>().unwrap(), id);
    }

    #[test]
    fn malformed_vertex_labels_are_rejected() {
        for label in ["", "N", "12", "n3", "N-1", "N+1", "N1x", "E0-1"] {
            assert_eq!(
                label.parse::<VertexId>(),
                Err(GraphError::InvalidLabel(label.to_string())),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn edge_is_unordered() {
        let a = VertexId::new(4);
        let b = VertexId::new(1);
        let edge = EdgeId::new(a, b);

        assert_eq!(edge, EdgeId::new(b, a));
        assert_eq!(edge.low(), b);
        assert_eq!(edge.high(), a);
        assert_eq!(edge.label(), "E1-4");
        assert_eq!(edge.other(a), Some(b));
        assert_eq!(edge.other(VertexId::new(9)), None);
    }

    #[test]
    fn edge_labels_parse_in_either_order() {
        let edge: EdgeId = "E5-2".parse().unwrap();
        assert_eq!(edge.label(), "E2-5");
        assert!("E5".parse::<EdgeId>().is_err());
        assert!("N2-5".parse::<EdgeId>().is_err());
    }

    #[test]
    fn malformed_edge_labels_are_rejected() {
        for label in ["E+1-2", "E1-+2", "E3-3", "E-1", "E1-", "E1-2-3", "E 1-2", "E1-2x"] {
            assert_eq!(
                label.parse::<EdgeId>(),
                Err(GraphError::InvalidLabel(label.to_string())),
                "label {label:?}"
            );
        }
    }
}
