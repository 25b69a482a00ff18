//! Shortest-path search (Dijkstra).
//!
//! Tentative distances start unknown except `source = 0`. The frontier is a
//! min-heap keyed by tentative distance. Each pop settles one vertex and
//! relaxes its edges; a vertex is pushed again whenever a strictly shorter
//! distance is found, and stale entries are skipped on pop. The search stops
//! as soon as the destination is settled.

use std::collections::BinaryHeap;

use tracing::{debug, info};

use super::frontier::FrontierEntry;
use super::result::PathResult;
use crate::error::{GraphError, GraphResult};
use crate::graph::{GraphModel, VertexId};

/// Computes minimum-weight paths over a graph.
pub struct ShortestPathFinder<'g> {
    graph: &'g GraphModel,
}

impl<'g> ShortestPathFinder<'g> {
    /// Search over `graph`, borrowed for the finder's lifetime.
    pub fn new(graph: &'g GraphModel) -> Self {
        Self { graph }
    }

    /// Find the minimum-weight path from `source` to `destination`.
    ///
    /// Returns [`PathResult::Unreachable`] when no path exists; that is an
    /// outcome, not an error.
    ///
    /// When `source == destination` the result is `Found` with the path
    /// `[source]` and distance 0, even for an isolated vertex. Callers that
    /// present "no path" for identical endpoints must check for that case
    /// themselves.
    pub fn find(&self, source: VertexId, destination: VertexId) -> GraphResult<PathResult> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(destination)?;

        info!(%source, %destination, "starting Dijkstra's algorithm");

        let n = self.graph.vertex_count();
        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut previous: Vec<Option<VertexId>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;

        distances[source.index()] = Some(0);
        frontier.push(FrontierEntry {
            distance: 0,
            seq,
            vertex: source,
        });

        while let Some(FrontierEntry {
            distance, vertex, ..
        }) = frontier.pop()
        {
            let u = vertex.index();
            if settled[u] {
                continue;
            }
            settled[u] = true;
            debug!(vertex = %vertex, distance, "settled");

            if vertex == destination {
                break;
            }

            for (v, &weight) in self.graph.row(vertex).iter().enumerate() {
                if weight == 0 || settled[v] {
                    continue;
                }
                let alt = distance + u64::from(weight);
                if distances[v].map_or(true, |d| alt < d) {
                    distances[v] = Some(alt);
                    previous[v] = Some(vertex);
                    seq += 1;
                    frontier.push(FrontierEntry {
                        distance: alt,
                        seq,
                        vertex: VertexId::new(v),
                    });
                }
            }
        }

        if source != destination && previous[destination.index()].is_none() {
            info!(%destination, "destination node is unreachable from source");
            return Ok(PathResult::Unreachable);
        }

        let mut path = vec![destination];
        let mut node = destination;
        while let Some(parent) = previous[node.index()] {
            path.push(parent);
            node = parent;
        }
        path.reverse();

        let distance = distances[destination.index()].unwrap_or_default();
        let result = PathResult::Found { path, distance };
        info!(distance, path = %result, "path found");
        Ok(result)
    }

    /// Same as [`find`](Self::find), with endpoints given as `N<index>` labels.
    pub fn find_labels(&self, source: &str, destination: &str) -> GraphResult<PathResult> {
        self.find(source.parse()?, destination.parse()?)
    }
}
