//! Shortest-path result type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeId, VertexId};

/// Outcome of a shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum PathResult {
    /// A minimum-weight path, source first, and its total weight.
    Found { path: Vec<VertexId>, distance: u64 },
    /// No path connects source and destination.
    Unreachable,
}

impl PathResult {
    /// True if a path was found.
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    /// The path vertices, empty when unreachable.
    pub fn path(&self) -> &[VertexId] {
        match self {
            PathResult::Found { path, .. } => path,
            PathResult::Unreachable => &[],
        }
    }

    /// Total weight of the path, `None` when unreachable.
    pub fn total_distance(&self) -> Option<u64> {
        match self {
            PathResult::Found { distance, .. } => Some(*distance),
            PathResult::Unreachable => None,
        }
    }

    /// The path as vertex labels.
    pub fn labels(&self) -> Vec<String> {
        self.path().iter().map(VertexId::label).collect()
    }

    /// Edges along the path, in order.
    pub fn edges(&self) -> Vec<EdgeId> {
        self.path()
            .windows(2)
            .map(|pair| EdgeId::new(pair[0], pair[1]))
            .collect()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Found { .. } => f.write_str(&self.labels().join(" -> ")),
            PathResult::Unreachable => f.write_str("unreachable"),
        }
    }
}
