//! Shortest Paths
//!
//! Minimum-weight path search over the non-negative weighted graph, run
//! after the traversal playback finishes.

mod dijkstra;
mod frontier;
mod result;

pub use dijkstra::ShortestPathFinder;
pub use result::PathResult;
