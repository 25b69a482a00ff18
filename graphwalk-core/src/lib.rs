//! Graphwalk Core
//!
//! This crate provides the algorithm engine behind the Graphwalk traversal
//! visualizer. It implements:
//!
//! - A mutable weighted undirected graph backed by a weight matrix
//! - A depth-first traversal that records a replayable log of steps
//! - A shortest-path search (Dijkstra) with path reconstruction
//! - A session that serializes graph mutation against playback
//!
//! The crate is designed to be used both as a native Rust library and, with
//! the `python` feature, as a Python extension module via PyO3.
//!
//! # Architecture
//!
//! - `graph`: The graph model, identifiers and random generation
//! - `traversal`: Step-recording depth-first traversal
//! - `path`: Shortest-path search
//! - `session`: Single owner of the graph for an interactive run
//! - `replay`: A finished run packaged for a playback driver
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::{GraphModel, VertexId};
//! use graphwalk_core::path::ShortestPathFinder;
//! use graphwalk_core::traversal::TraversalRecorder;
//!
//! let mut graph = GraphModel::with_vertices(3);
//! graph.add_edge(VertexId::new(0), VertexId::new(1), 1).unwrap();
//! graph.add_edge(VertexId::new(1), VertexId::new(2), 1).unwrap();
//! graph.add_edge(VertexId::new(0), VertexId::new(2), 5).unwrap();
//!
//! let steps = TraversalRecorder::new(&graph)
//!     .run_labels("N0", "N2")
//!     .unwrap();
//! assert!(steps.is_complete());
//!
//! let path = ShortestPathFinder::new(&graph).find_labels("N0", "N2").unwrap();
//! assert_eq!(path.labels(), vec!["N0", "N1", "N2"]);
//! assert_eq!(path.total_distance(), Some(2));
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod path;
pub mod replay;
pub mod session;
pub mod traversal;

#[cfg(feature = "python")]
mod python;

pub use error::{GraphError, GraphResult};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition.
///
/// This function is called by Python when importing the module.
/// It registers all Python-exposed types and functions.
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyGraph>()?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
