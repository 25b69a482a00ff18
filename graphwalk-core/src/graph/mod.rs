//! Graph Model
//!
//! This module implements the mutable weighted undirected graph that the
//! traversal and path-finding algorithms run over.
//!
//! # Overview
//!
//! - Vertices are dense indices `0..n`, shown externally as `N<index>`
//! - Edges are unordered pairs with a positive integer weight
//! - The graph is stored as a symmetric `n × n` weight matrix where `0`
//!   means "no edge"
//!
//! # Design Decisions
//!
//! 1. A dense matrix rather than adjacency lists, because the graphs are
//!    small (tens of vertices) and neighbor iteration must be in ascending
//!    index order for reproducible traversals.
//!
//! 2. Removing a vertex compacts the indices above it. Vertex identities are
//!    therefore not stable across removals.

mod generate;
mod model;
mod vertex;

pub use generate::{generate_random, Scenario};
pub use model::{GraphModel, Neighbors, Weight};
pub use vertex::{EdgeId, VertexId};
