//! Replays
//!
//! A replay is one completed run: the traversal steps followed by the
//! shortest-path result. It is computed in full before playback starts, and
//! a playback driver only ever reads it.
//!
//! Replays can be encoded as MessagePack (compact, for an out-of-process
//! driver) or JSON (for inspection). Vertices and edges are encoded by
//! their labels.

use serde::{Deserialize, Serialize};

use crate::error::GraphResult;
use crate::graph::{GraphModel, VertexId};
use crate::path::{PathResult, ShortestPathFinder};
use crate::traversal::{StepKind, TraversalLog, TraversalRecorder};

/// A traversal followed by the shortest path between the same endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub source: VertexId,
    pub destination: VertexId,
    /// Depth-first traversal, played first.
    pub steps: TraversalLog,
    /// Shortest path, highlighted after the traversal.
    pub path: PathResult,
}

impl Replay {
    /// Run the traversal and then the shortest-path search.
    pub fn record(graph: &GraphModel, source: VertexId, destination: VertexId) -> GraphResult<Self> {
        let steps = TraversalRecorder::new(graph).run(source, destination)?;
        let path = ShortestPathFinder::new(graph).find(source, destination)?;
        Ok(Self {
            source,
            destination,
            steps,
            path,
        })
    }

    /// Encode as MessagePack with named fields.
    pub fn to_msgpack(&self) -> GraphResult<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    /// Decode bytes produced by [`to_msgpack`](Self::to_msgpack).
    pub fn from_msgpack(bytes: &[u8]) -> GraphResult<Self> {
        Ok(rmp_serde::from_slice(bytes)?)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable log of the run, one line per event.
    pub fn narrate(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "[Algorithm] Starting DFS traversal from {} to {}",
            self.source, self.destination
        )];

        for (i, step) in self.steps.iter().enumerate() {
            let n = i + 1;
            match (step.kind, step.terminal, step.edge) {
                (StepKind::Visit, true, _) => {
                    lines.push("[Algorithm] All nodes visited - proceeding to find shortest path".to_string());
                }
                (StepKind::Visit, false, _) => {
                    lines.push(format!("[Step {n}] Visiting node: {}", step.vertex));
                }
                (StepKind::Consider, _, Some(edge)) => {
                    lines.push(format!("[Step {n}] Considering edge {edge} from {}", step.vertex));
                }
                (StepKind::Backtrack, _, Some(edge)) => {
                    lines.push(format!(
                        "[Step {n}] Backtracking: {} already visited via {edge}",
                        step.vertex
                    ));
                }
                _ => {}
            }
        }
        if !self.steps.is_complete() {
            lines.push("[Algorithm] DFS traversal completed".to_string());
        }

        lines.push("[Pathfinding] Starting Dijkstra's algorithm to find shortest path".to_string());
        match &self.path {
            PathResult::Found { distance, .. } => {
                lines.push(format!("[Pathfinding] Path found! Total distance: {distance}"));
                lines.push(format!("[Pathfinding] Path: {}", self.path));
            }
            PathResult::Unreachable => {
                lines.push("[Pathfinding] Destination node is unreachable from source".to_string());
            }
        }
        lines
    }
}
