//! Frontier entries for the shortest-path priority queue.
//!
//! Implements ordering for BinaryHeap min-heap behavior.

use std::cmp::Ordering;

use crate::graph::VertexId;

/// A discovered vertex with its tentative distance.
///
/// `seq` is the insertion counter. Equal distances pop in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub distance: u64,
    pub seq: u64,
    pub vertex: VertexId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
