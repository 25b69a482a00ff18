//! Error types for the graph engine.
//!
//! Every failure here is a deterministic logic error reported to the
//! immediate caller. Nothing is retried.

use thiserror::Error;

use crate::graph::VertexId;

/// Result alias used throughout the crate.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for graph mutation, queries and algorithm runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex index outside the current range `[0, n)`.
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Edge from a vertex to itself.
    #[error("cannot create edge from {0} to itself")]
    SelfLoop(VertexId),

    /// Negative edge weights are not supported.
    #[error("negative edge weight {0} is not supported")]
    NegativeWeight(i64),

    /// Weight `0` encodes "no edge" in the matrix and cannot be stored.
    #[error("edge weight 0 is reserved for 'no edge'")]
    ZeroWeight,

    /// Weights must fit in the matrix cell type.
    #[error("edge weight {0} exceeds the maximum of {max}", max = u32::MAX)]
    WeightTooLarge(i64),

    /// An edge already connects the two vertices.
    #[error("edge already exists between {0} and {1}")]
    DuplicateEdge(VertexId, VertexId),

    /// No edge connects the two vertices.
    #[error("no edge exists between {0} and {1}")]
    NoSuchEdge(VertexId, VertexId),

    /// Traversal or path search requested on a graph with no vertices.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A vertex label that is not of the form `N<index>`.
    #[error("invalid vertex label: {0:?}")]
    InvalidLabel(String),

    /// Generator parameters or configuration out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mutation attempted while a playback holds the graph.
    #[error("graph is locked while a playback is active")]
    PlaybackActive,

    /// A run was requested before source and destination were selected.
    #[error("source and destination must be selected first")]
    NoSelection,

    /// Encoding or decoding a replay failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}

impl From<rmp_serde::encode::Error> for GraphError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}

impl From<rmp_serde::decode::Error> for GraphError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}
