//! Step-recording depth-first traversal.
//!
//! # Algorithm
//!
//! Depth-first from the source, neighbors in ascending index order:
//!
//! 1. On first reaching a vertex, record `Visit`. If every vertex of the
//!    graph is now visited, record the terminal step and stop.
//! 2. For each incident edge of the vertex, record `Consider`, then either
//!    descend into the unvisited neighbor or record `Backtrack` for the edge
//!    when the neighbor was already visited.
//!
//! Reaching the destination does not prune anything: the traversal keeps
//! going until the reachable component is exhausted or every vertex has
//! been visited. The "found destination" flag is only reported.
//!
//! The walk uses an explicit stack of frames instead of recursion. Each
//! frame holds the vertex being expanded and a cursor into its neighbor
//! list, which reproduces the recursive step order exactly.

use indexmap::IndexSet;
use tracing::{debug, info};

use super::step::{DfsStep, TraversalLog};
use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeId, GraphModel, Neighbors, VertexId};

/// A vertex being expanded and how far through its neighbors we are.
struct Frame {
    vertex: VertexId,
    neighbors: Neighbors,
    cursor: usize,
}

/// Mutable state shared by the whole walk.
struct Walk {
    destination: VertexId,
    vertex_count: usize,
    visited: IndexSet<VertexId>,
    steps: Vec<DfsStep>,
    found_destination: bool,
}

impl Walk {
    /// Record the first visit of `vertex`.
    ///
    /// Returns the frame to expand next, or `None` once every vertex has
    /// been visited and the terminal step was recorded.
    fn enter(
        &mut self,
        graph: &GraphModel,
        vertex: VertexId,
        incoming: Option<EdgeId>,
    ) -> GraphResult<Option<Frame>> {
        self.visited.insert(vertex);
        self.steps.push(DfsStep::visit(vertex, incoming));
        debug!(step = self.steps.len(), vertex = %vertex, "visiting node");

        if vertex == self.destination {
            self.found_destination = true;
        }

        if self.visited.len() == self.vertex_count {
            self.steps.push(DfsStep::terminal(vertex));
            debug!("all nodes have been visited");
            return Ok(None);
        }

        Ok(Some(Frame {
            vertex,
            neighbors: graph.neighbors(vertex)?,
            cursor: 0,
        }))
    }
}

/// Runs a depth-first traversal over a graph and records every step.
///
/// The recorder borrows the graph for the whole run, so the graph cannot be
/// mutated while a traversal is being computed.
pub struct TraversalRecorder<'g> {
    graph: &'g GraphModel,
}

impl<'g> TraversalRecorder<'g> {
    /// Record traversals of `graph`.
    pub fn new(graph: &'g GraphModel) -> Self {
        Self { graph }
    }

    /// Traverse from `source`, guided toward `destination`.
    pub fn run(&self, source: VertexId, destination: VertexId) -> GraphResult<TraversalLog> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(destination)?;

        info!(%source, %destination, "starting DFS traversal");

        let vertex_count = self.graph.vertex_count();
        let mut walk = Walk {
            destination,
            vertex_count,
            visited: IndexSet::with_capacity(vertex_count),
            steps: Vec::new(),
            found_destination: false,
        };
        let mut stack: Vec<Frame> = Vec::new();

        if let Some(frame) = walk.enter(self.graph, source, None)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let current = frame.vertex;
            let next = frame.neighbors.get(frame.cursor).map(|&(v, _)| v);
            frame.cursor += 1;

            let Some(next) = next else {
                stack.pop();
                continue;
            };

            let edge = EdgeId::new(current, next);
            walk.steps.push(DfsStep::consider(current, edge));

            if walk.visited.contains(&next) {
                walk.steps.push(DfsStep::backtrack(next, edge));
                continue;
            }

            match walk.enter(self.graph, next, Some(edge))? {
                Some(frame) => stack.push(frame),
                None => break,
            }
        }

        info!(
            steps = walk.steps.len(),
            visited = walk.visited.len(),
            found_destination = walk.found_destination,
            "DFS traversal completed"
        );
        Ok(TraversalLog::new(walk.steps, walk.found_destination))
    }

    /// Same as [`run`](Self::run), with endpoints given as `N<index>` labels.
    pub fn run_labels(&self, source: &str, destination: &str) -> GraphResult<TraversalLog> {
        self.run(source.parse()?, destination.parse()?)
    }
}
