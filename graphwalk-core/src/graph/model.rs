//! Graph Model
//!
//! The model owns a weighted undirected graph as an `n × n` symmetric weight
//! matrix. A weight of `0` means "no edge", so the diagonal is always `0`
//! and zero-weight edges cannot be represented.
//!
//! # Invariants
//!
//! - `matrix.len() == n` and every row has length `n`
//! - `matrix[i][i] == 0`
//! - `matrix[i][j] == matrix[j][i]`
//! - vertex indices are always the contiguous range `[0, n)`

use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::debug;

use super::vertex::{EdgeId, VertexId};
use crate::error::{GraphError, GraphResult};

/// Positive edge weight. `0` is reserved for "no edge".
pub type Weight = u32;

/// Neighbors of a vertex with the connecting edge weight, ascending by index.
pub type Neighbors = SmallVec<[(VertexId, Weight); 8]>;

/// A weighted undirected graph backed by a dense weight matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphModel {
    matrix: Vec<Vec<Weight>>,
}

impl GraphModel {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self { matrix: Vec::new() }
    }

    /// Create a graph with `n` vertices and no edges.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            matrix: vec![vec![0; n]; n],
        }
    }

    /// Build a graph from an edge list. Fails on the first invalid edge.
    pub fn from_edges<I>(n: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut graph = Self::with_vertices(n);
        for (u, v, weight) in edges {
            graph.add_edge(VertexId::new(u), VertexId::new(v), weight)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertex_count()).map(VertexId::new)
    }

    /// All edges with their weights, each reported once, ordered by
    /// `(low, high)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Weight)> + '_ {
        self.matrix.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .skip(i + 1)
                .filter(|(_, &w)| w > 0)
                .map(move |(j, &w)| (EdgeId::new(VertexId::new(i), VertexId::new(j)), w))
        })
    }

    /// Check that `vertex` is in range.
    pub fn check_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        if vertex.index() < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Append a new vertex with no edges and return its index.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.vertex_count());
        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; id.index() + 1]);
        debug!(vertex = %id, "added vertex");
        id
    }

    /// Remove a vertex and all of its edges.
    ///
    /// Every vertex above `vertex` shifts down by one index.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        let k = vertex.index();
        self.matrix.remove(k);
        for row in &mut self.matrix {
            row.remove(k);
        }
        debug!(vertex = %vertex, remaining = self.vertex_count(), "removed vertex");
        Ok(())
    }

    /// Add an undirected edge of the given weight.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: i64) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if weight < 0 {
            return Err(GraphError::NegativeWeight(weight));
        }
        if weight == 0 {
            return Err(GraphError::ZeroWeight);
        }
        if self.matrix[u.index()][v.index()] > 0 {
            return Err(GraphError::DuplicateEdge(u, v));
        }
        let weight = Weight::try_from(weight).map_err(|_| GraphError::WeightTooLarge(weight))?;

        self.matrix[u.index()][v.index()] = weight;
        self.matrix[v.index()][u.index()] = weight;
        debug!(edge = %EdgeId::new(u, v), weight, "added edge");
        Ok(())
    }

    /// Remove the edge between `u` and `v`.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if self.matrix[u.index()][v.index()] == 0 {
            return Err(GraphError::NoSuchEdge(u, v));
        }
        self.matrix[u.index()][v.index()] = 0;
        self.matrix[v.index()][u.index()] = 0;
        debug!(edge = %EdgeId::new(u, v), "removed edge");
        Ok(())
    }

    /// Weight of the edge between `u` and `v`, or `None` if there is none.
    pub fn weight(&self, u: VertexId, v: VertexId) -> GraphResult<Option<Weight>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let w = self.matrix[u.index()][v.index()];
        Ok((w > 0).then_some(w))
    }

    /// All neighbors of `u` in ascending index order.
    pub fn neighbors(&self, u: VertexId) -> GraphResult<Neighbors> {
        self.check_vertex(u)?;
        Ok(self.matrix[u.index()]
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0)
            .map(|(v, &w)| (VertexId::new(v), w))
            .collect())
    }

    /// Number of edges incident to `u`.
    pub fn degree(&self, u: VertexId) -> GraphResult<usize> {
        self.check_vertex(u)?;
        Ok(self.matrix[u.index()].iter().filter(|&&w| w > 0).count())
    }

    /// Whether a breadth-first scan from vertex `0` reaches every vertex.
    ///
    /// An empty graph is reported as not connected.
    pub fn is_connected(&self) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return false;
        }
        self.reachable_from(VertexId::new(0)).iter().all(|&seen| seen)
    }

    /// Reachability flags for every vertex, from a BFS rooted at `start`.
    ///
    /// `start` must be in range.
    pub(crate) fn reachable_from(&self, start: VertexId) -> Vec<bool> {
        let n = self.vertex_count();
        let mut seen = vec![false; n];
        let mut queue = VecDeque::new();
        seen[start.index()] = true;
        queue.push_back(start.index());

        while let Some(current) = queue.pop_front() {
            for (next, &w) in self.matrix[current].iter().enumerate() {
                if w > 0 && !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    /// Raw matrix row access, used by the algorithms.
    pub(crate) fn row(&self, u: VertexId) -> &[Weight] {
        &self.matrix[u.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    fn assert_symmetric(graph: &GraphModel) {
        let n = graph.vertex_count();
        for i in 0..n {
            assert_eq!(graph.row(v(i)).len(), n);
            assert_eq!(graph.row(v(i))[i], 0);
            for j in 0..n {
                assert_eq!(graph.row(v(i))[j], graph.row(v(j))[i]);
            }
        }
    }

    #[test]
    fn add_vertex_returns_next_index() {
        let mut graph = GraphModel::new();
        assert_eq!(graph.add_vertex(), v(0));
        assert_eq!(graph.add_vertex(), v(1));
        assert_eq!(graph.add_vertex(), v(2));
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_symmetric(&graph);
    }

    #[test]
    fn add_and_remove_edges() {
        let mut graph = GraphModel::with_vertices(3);
        graph.add_edge(v(0), v(2), 7).unwrap();

        assert_eq!(graph.weight(v(0), v(2)).unwrap(), Some(7));
        assert_eq!(graph.weight(v(2), v(0)).unwrap(), Some(7));
        assert_symmetric(&graph);

        graph.remove_edge(v(2), v(0)).unwrap();
        assert_eq!(graph.weight(v(0), v(2)).unwrap(), None);
        assert_eq!(graph, GraphModel::with_vertices(3));
    }

    #[test]
    fn add_edge_rejects_bad_input() {
        let mut graph = GraphModel::with_vertices(2);
        graph.add_edge(v(0), v(1), 3).unwrap();

        assert_eq!(
            graph.add_edge(v(0), v(5), 1),
            Err(GraphError::InvalidVertex {
                vertex: v(5),
                vertex_count: 2
            })
        );
        assert_eq!(graph.add_edge(v(1), v(1), 1), Err(GraphError::SelfLoop(v(1))));
        assert_eq!(graph.add_edge(v(0), v(1), -4), Err(GraphError::NegativeWeight(-4)));
        assert_eq!(graph.add_edge(v(1), v(0), 9), Err(GraphError::DuplicateEdge(v(1), v(0))));
        assert_eq!(graph.weight(v(0), v(1)).unwrap(), Some(3));
    }

    #[test]
    fn zero_weight_edges_are_rejected() {
        let mut graph = GraphModel::with_vertices(2);
        assert_eq!(graph.add_edge(v(0), v(1), 0), Err(GraphError::ZeroWeight));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn oversized_weights_are_rejected() {
        let mut graph = GraphModel::with_vertices(3);
        let too_big = i64::from(Weight::MAX) + 1;
        assert_eq!(
            graph.add_edge(v(0), v(1), too_big),
            Err(GraphError::WeightTooLarge(too_big))
        );
        assert_eq!(graph.edge_count(), 0);

        graph.add_edge(v(1), v(2), i64::from(Weight::MAX)).unwrap();
        assert_eq!(graph.weight(v(1), v(2)).unwrap(), Some(Weight::MAX));
    }

    #[test]
    fn remove_missing_edge_fails() {
        let mut graph = GraphModel::with_vertices(2);
        assert_eq!(graph.remove_edge(v(0), v(1)), Err(GraphError::NoSuchEdge(v(0), v(1))));
    }

    #[test]
    fn remove_vertex_compacts_indices() {
        // 0-1 (1), 1-2 (2), 2-3 (3), 0-3 (4)
        let mut graph =
            GraphModel::from_edges(4, [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4)]).unwrap();

        graph.remove_vertex(v(1)).unwrap();

        // Old 2 is now 1, old 3 is now 2.
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.weight(v(1), v(2)).unwrap(), Some(3));
        assert_eq!(graph.weight(v(0), v(2)).unwrap(), Some(4));
        assert_eq!(graph.weight(v(0), v(1)).unwrap(), None);
        assert_symmetric(&graph);
    }

    #[test]
    fn remove_vertex_out_of_range() {
        let mut graph = GraphModel::with_vertices(1);
        assert!(matches!(
            graph.remove_vertex(v(1)),
            Err(GraphError::InvalidVertex { .. })
        ));
    }

    #[test]
    fn neighbors_are_ascending() {
        let graph = GraphModel::from_edges(5, [(2, 4, 1), (2, 0, 5), (2, 3, 2)]).unwrap();
        let neighbors: Vec<_> = graph.neighbors(v(2)).unwrap().into_iter().collect();
        assert_eq!(neighbors, vec![(v(0), 5), (v(3), 2), (v(4), 1)]);
        assert_eq!(graph.degree(v(2)).unwrap(), 3);
        assert!(graph.neighbors(v(1)).unwrap().is_empty());
    }

    #[test]
    fn edges_are_listed_once() {
        let graph = GraphModel::from_edges(3, [(2, 0, 5), (1, 0, 2)]).unwrap();
        let edges: Vec<_> = graph.edges().map(|(e, w)| (e.label(), w)).collect();
        assert_eq!(edges, vec![("E0-1".to_string(), 2), ("E0-2".to_string(), 5)]);
    }

    #[test]
    fn connectivity() {
        assert!(!GraphModel::new().is_connected());
        assert!(GraphModel::with_vertices(1).is_connected());
        assert!(!GraphModel::with_vertices(2).is_connected());

        let mut graph = GraphModel::from_edges(3, [(0, 1, 1), (1, 2, 1)]).unwrap();
        assert!(graph.is_connected());

        graph.add_vertex();
        assert!(!graph.is_connected());
    }
}
