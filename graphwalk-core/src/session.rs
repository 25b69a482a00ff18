//! Session
//!
//! The session is the single owner of the graph for an interactive run. It
//! serializes mutation against playback: while a playback holds the graph,
//! every mutation is refused.
//!
//! # How It Works
//!
//! 1. The UI mutates the graph through the session. After each mutation the
//!    session checks connectivity and logs a warning when the graph is
//!    disconnected. The check never blocks the mutation.
//!
//! 2. The UI selects a source and a destination, then calls [`Session::run`]
//!    to get a complete [`Replay`].
//!
//! 3. While the replay is being played back, the UI holds a
//!    [`PlaybackGuard`]. Dropping the guard re-enables mutation.
//!
//! # Thread Safety
//!
//! The graph lives behind a `RwLock`: runs take the read side, mutations the
//! write side. The playback flag is only set while holding the read lock and
//! only checked while holding the write lock, so a mutation can never
//! interleave with the start of a playback.
//!
//! The selection is only written or read while a graph lock is held (graph
//! first, then selection), so a stored selection always names vertices of
//! the current graph.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::{Mutex, RwLock};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::{GeneratorConfig, RandomGraphParams};
use crate::error::{GraphError, GraphResult};
use crate::graph::{generate_random, GraphModel, Neighbors, Scenario, VertexId};
use crate::replay::Replay;

/// The selected source and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub source: VertexId,
    pub destination: VertexId,
}

/// Owns the graph and coordinates mutation, runs and playback.
#[derive(Debug, Default)]
pub struct Session {
    graph: RwLock<GraphModel>,
    selection: Mutex<Option<Selection>>,
    playback_active: AtomicBool,
}

impl Session {
    /// Create a session with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session around an existing graph.
    pub fn with_graph(graph: GraphModel) -> Self {
        Self {
            graph: RwLock::new(graph),
            ..Self::default()
        }
    }

    /// Run `f` with shared access to the graph.
    pub fn read<T>(&self, f: impl FnOnce(&GraphModel) -> T) -> T {
        f(&self.graph.read())
    }

    /// Clone the current graph.
    pub fn snapshot(&self) -> GraphModel {
        self.graph.read().clone()
    }

    /// Number of vertices in the current graph.
    pub fn vertex_count(&self) -> usize {
        self.graph.read().vertex_count()
    }

    /// Neighbors of `vertex`, ascending by index.
    pub fn neighbors(&self, vertex: VertexId) -> GraphResult<Neighbors> {
        self.graph.read().neighbors(vertex)
    }

    /// Connectivity advisory; see [`GraphModel::is_connected`].
    pub fn is_connected(&self) -> bool {
        self.graph.read().is_connected()
    }

    /// True while a playback holds the graph.
    pub fn is_playback_active(&self) -> bool {
        self.playback_active.load(Ordering::Acquire)
    }

    /// Apply a mutation under the write lock, then poll connectivity.
    fn mutate<T>(&self, f: impl FnOnce(&mut GraphModel) -> GraphResult<T>) -> GraphResult<T> {
        let mut graph = self.graph.write();
        if self.is_playback_active() {
            return Err(GraphError::PlaybackActive);
        }
        let out = f(&mut graph)?;
        if !graph.is_connected() {
            warn!("graph is disconnected - some nodes may not be reachable");
        }
        Ok(out)
    }

    /// Add an isolated vertex and return its id.
    pub fn add_vertex(&self) -> GraphResult<VertexId> {
        let id = self.mutate(|graph| Ok(graph.add_vertex()))?;
        info!(vertex = %id, "added new node");
        Ok(id)
    }

    /// Remove a vertex. Clears the selection, because labels above the
    /// removed index now refer to different vertices.
    pub fn remove_vertex(&self, vertex: VertexId) -> GraphResult<()> {
        self.mutate(|graph| {
            graph.remove_vertex(vertex)?;
            *self.selection.lock() = None;
            Ok(())
        })?;
        info!(vertex = %vertex, "removed node and all its connections");
        Ok(())
    }

    /// Connect `u` and `v` with a positive weight.
    pub fn add_edge(&self, u: VertexId, v: VertexId, weight: i64) -> GraphResult<()> {
        self.mutate(|graph| graph.add_edge(u, v, weight))?;
        info!(%u, %v, weight, "added edge");
        Ok(())
    }

    /// Remove the edge between `u` and `v`.
    pub fn remove_edge(&self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.mutate(|graph| graph.remove_edge(u, v))?;
        info!(%u, %v, "removed edge");
        Ok(())
    }

    /// Replace the whole graph and clear the selection.
    pub fn replace_graph(&self, new_graph: GraphModel) -> GraphResult<()> {
        self.install(new_graph, None)
    }

    fn install(&self, new_graph: GraphModel, selection: Option<Selection>) -> GraphResult<()> {
        self.mutate(|graph| {
            *graph = new_graph;
            *self.selection.lock() = selection;
            Ok(())
        })
    }

    /// Replace the graph with a randomly generated one.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, params: RandomGraphParams) -> GraphResult<()> {
        let graph = generate_random(rng, params)?;
        self.replace_graph(graph)
    }

    /// Replace the graph with a random scenario and select its endpoints.
    pub fn load_scenario<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &GeneratorConfig,
    ) -> GraphResult<Selection> {
        let scenario = Scenario::random(rng, config)?;
        let selection = Selection {
            source: scenario.source,
            destination: scenario.destination,
        };
        self.install(scenario.graph, Some(selection))?;
        Ok(selection)
    }

    /// Select source and destination. Both must exist.
    pub fn select(&self, source: VertexId, destination: VertexId) -> GraphResult<()> {
        let graph = self.graph.read();
        graph.check_vertex(source)?;
        graph.check_vertex(destination)?;
        *self.selection.lock() = Some(Selection {
            source,
            destination,
        });
        drop(graph);
        debug!(%source, %destination, "selected endpoints");
        Ok(())
    }

    /// The current selection, if any.
    pub fn selection(&self) -> Option<Selection> {
        let _graph = self.graph.read();
        *self.selection.lock()
    }

    /// Forget the current selection.
    pub fn clear_selection(&self) {
        let _graph = self.graph.read();
        *self.selection.lock() = None;
    }

    /// Compute the traversal and shortest path for the current selection.
    pub fn run(&self) -> GraphResult<Replay> {
        let graph = self.graph.read();
        let Selection {
            source,
            destination,
        } = (*self.selection.lock()).ok_or(GraphError::NoSelection)?;

        if !graph.is_connected() {
            warn!("graph is disconnected - some nodes may not be reachable");
        }
        Replay::record(&graph, source, destination)
    }

    /// Lock the graph against mutation until [`end_playback`](Self::end_playback).
    ///
    /// Prefer [`begin_playback`](Self::begin_playback), which unlocks on drop.
    pub fn start_playback(&self) -> GraphResult<()> {
        let _graph = self.graph.read();
        self.playback_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GraphError::PlaybackActive)?;
        debug!("playback started");
        Ok(())
    }

    /// Re-enable mutation after a playback.
    pub fn end_playback(&self) {
        if self.playback_active.swap(false, Ordering::AcqRel) {
            debug!("playback finished");
        }
    }

    /// Lock the graph against mutation for the lifetime of the guard.
    pub fn begin_playback(&self) -> GraphResult<PlaybackGuard<'_>> {
        self.start_playback()?;
        Ok(PlaybackGuard { session: self })
    }
}

/// Guard that ends the playback when dropped.
#[must_use = "dropping the guard immediately ends the playback"]
pub struct PlaybackGuard<'s> {
    session: &'s Session,
}

impl Drop for PlaybackGuard<'_> {
    fn drop(&mut self) {
        self.session.end_playback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    fn line_session() -> Session {
        Session::with_graph(GraphModel::from_edges(3, [(0, 1, 2), (1, 2, 3)]).unwrap())
    }

    #[test]
    fn mutations_go_through() {
        let session = Session::new();
        assert_eq!(session.add_vertex().unwrap(), v(0));
        assert_eq!(session.add_vertex().unwrap(), v(1));
        session.add_edge(v(0), v(1), 4).unwrap();
        assert!(session.is_connected());

        session.remove_edge(v(0), v(1)).unwrap();
        assert!(!session.is_connected());
        assert_eq!(session.vertex_count(), 2);
    }

    #[test]
    fn run_requires_selection() {
        let session = line_session();
        assert_eq!(session.run(), Err(GraphError::NoSelection));

        session.select(v(0), v(2)).unwrap();
        let replay = session.run().unwrap();
        assert_eq!(replay.path.total_distance(), Some(5));
        assert!(replay.steps.is_complete());
    }

    #[test]
    fn select_validates_vertices() {
        let session = line_session();
        assert!(matches!(
            session.select(v(0), v(3)),
            Err(GraphError::InvalidVertex { .. })
        ));
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn remove_vertex_clears_selection() {
        let session = line_session();
        session.select(v(0), v(2)).unwrap();
        session.remove_vertex(v(1)).unwrap();
        assert_eq!(session.selection(), None);
        assert_eq!(session.vertex_count(), 2);
    }

    #[test]
    fn clear_selection_forgets_endpoints() {
        let session = line_session();
        session.select(v(0), v(2)).unwrap();
        session.clear_selection();
        assert_eq!(session.selection(), None);
        assert_eq!(session.run(), Err(GraphError::NoSelection));
    }

    #[test]
    fn snapshot_is_detached_from_session() {
        let session = line_session();
        let before = session.snapshot();
        session.add_edge(v(0), v(2), 7).unwrap();

        assert_eq!(before.edge_count(), 2);
        assert_eq!(session.snapshot().edge_count(), 3);
        assert_eq!(session.snapshot().weight(v(0), v(2)).unwrap(), Some(7));
    }

    /// A stored selection never outlives the vertices it names, even when
    /// removals race with selection.
    #[test]
    fn selection_survives_concurrent_removal() {
        let session = Session::with_graph(GraphModel::with_vertices(64));
        std::thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..60 {
                    session.remove_vertex(v(0)).unwrap();
                }
            });
            scope.spawn(|| {
                for _ in 0..200 {
                    let last = v(session.vertex_count() - 1);
                    // The vertex may be gone by the time we select it.
                    let _ = session.select(v(0), last);
                    match session.run() {
                        Ok(_) | Err(GraphError::NoSelection) => {}
                        Err(other) => panic!("stale selection: {other}"),
                    }
                }
            });
        });
        assert_eq!(session.vertex_count(), 4);
    }

    #[test]
    fn playback_blocks_mutation() {
        let session = line_session();
        {
            let _guard = session.begin_playback().unwrap();
            assert!(session.is_playback_active());
            assert_eq!(session.add_vertex(), Err(GraphError::PlaybackActive));
            assert_eq!(
                session.add_edge(v(0), v(2), 1),
                Err(GraphError::PlaybackActive)
            );
            assert!(matches!(
                session.begin_playback(),
                Err(GraphError::PlaybackActive)
            ));
            // Reads are still allowed.
            assert_eq!(session.neighbors(v(1)).unwrap().len(), 2);
        }
        assert!(!session.is_playback_active());
        assert_eq!(session.add_vertex().unwrap(), v(3));
    }

    #[test]
    fn scenario_selects_endpoints() {
        let session = Session::new();
        let mut rng = StdRng::seed_from_u64(11);
        let selection = session
            .load_scenario(&mut rng, &GeneratorConfig::default())
            .unwrap();
        assert_eq!(session.selection(), Some(selection));
        assert_ne!(selection.source, selection.destination);
        assert!(session.run().is_ok());
    }

    #[test]
    fn generate_replaces_graph() {
        let session = line_session();
        session.select(v(0), v(1)).unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        session
            .generate(&mut rng, RandomGraphParams::new(4, 100, 1))
            .unwrap();
        assert_eq!(session.read(|g| g.edge_count()), 6);
        assert_eq!(session.selection(), None);
    }
}
