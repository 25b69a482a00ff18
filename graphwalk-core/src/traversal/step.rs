//! Traversal steps and the recorded step log.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeId, VertexId};

/// What happened at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// A vertex was reached for the first time.
    Visit,
    /// An incident edge of the current vertex is being examined.
    Consider,
    /// An edge led to a vertex that was already visited.
    Backtrack,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepKind::Visit => "visit",
            StepKind::Consider => "consider",
            StepKind::Backtrack => "backtrack",
        })
    }
}

/// One recorded event of a depth-first traversal.
///
/// - `Visit`: `vertex` is the newly reached vertex and `edge` the edge it
///   was reached through (`None` for the source).
/// - `Consider`: `vertex` is the vertex being expanded and `edge` the edge
///   under examination.
/// - `Backtrack`: `vertex` is the already-visited endpoint and `edge` the
///   edge that led to it.
///
/// The terminal step is a `Visit` with `terminal == true` and no edge,
/// repeating the vertex whose visit completed the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsStep {
    /// The vertex the step is about.
    pub vertex: VertexId,
    /// The edge involved, if any.
    pub edge: Option<EdgeId>,
    pub kind: StepKind,
    /// Set only on the single step that marks the whole graph visited.
    pub terminal: bool,
}

impl DfsStep {
    pub(crate) fn visit(vertex: VertexId, edge: Option<EdgeId>) -> Self {
        Self {
            vertex,
            edge,
            kind: StepKind::Visit,
            terminal: false,
        }
    }

    pub(crate) fn terminal(vertex: VertexId) -> Self {
        Self {
            vertex,
            edge: None,
            kind: StepKind::Visit,
            terminal: true,
        }
    }

    pub(crate) fn consider(vertex: VertexId, edge: EdgeId) -> Self {
        Self {
            vertex,
            edge: Some(edge),
            kind: StepKind::Consider,
            terminal: false,
        }
    }

    pub(crate) fn backtrack(vertex: VertexId, edge: EdgeId) -> Self {
        Self {
            vertex,
            edge: Some(edge),
            kind: StepKind::Backtrack,
            terminal: false,
        }
    }

    /// Label of the step's vertex.
    pub fn vertex_label(&self) -> String {
        self.vertex.label()
    }

    /// Label of the step's edge, if any.
    pub fn edge_label(&self) -> Option<String> {
        self.edge.map(|e| e.label())
    }

    /// True for a first-time visit (terminal steps excluded).
    pub fn is_visit(&self) -> bool {
        self.kind == StepKind::Visit && !self.terminal
    }
}

/// The ordered, replayable output of one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalLog {
    steps: Vec<DfsStep>,
    reached_destination: bool,
}

impl TraversalLog {
    pub(crate) fn new(steps: Vec<DfsStep>, reached_destination: bool) -> Self {
        Self {
            steps,
            reached_destination,
        }
    }

    /// All steps in replay order.
    pub fn steps(&self) -> &[DfsStep] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps in replay order.
    pub fn iter(&self) -> std::slice::Iter<'_, DfsStep> {
        self.steps.iter()
    }

    /// Vertices in the order they were first visited.
    pub fn visit_order(&self) -> Vec<VertexId> {
        self.steps
            .iter()
            .filter(|s| s.is_visit())
            .map(|s| s.vertex)
            .collect()
    }

    /// True if the traversal visited every vertex of the graph.
    pub fn is_complete(&self) -> bool {
        self.steps.last().is_some_and(|s| s.terminal)
    }

    /// True if the destination was visited during the traversal.
    pub fn reached_destination(&self) -> bool {
        self.reached_destination
    }

    /// Take ownership of the steps.
    pub fn into_steps(self) -> Vec<DfsStep> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a TraversalLog {
    type Item = &'a DfsStep;
    type IntoIter = std::slice::Iter<'a, DfsStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for TraversalLog {
    type Item = DfsStep;
    type IntoIter = std::vec::IntoIter<DfsStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
