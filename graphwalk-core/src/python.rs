//! Python Bindings
//!
//! Exposes a [`Session`] to a Python UI as the `Graph` class. Vertices and
//! edges cross the boundary as their labels (`N3`, `E1-4`).

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::config::{check_node_count, GeneratorConfig, RandomGraphParams};
use crate::error::GraphError;
use crate::graph::{GraphModel, VertexId};
use crate::path::{PathResult, ShortestPathFinder};
use crate::session::Session;
use crate::traversal::{DfsStep, TraversalRecorder};

/// `(vertex, edge, kind, terminal)` as seen from Python.
type PyStep = (String, Option<String>, String, bool);

fn to_py_err(err: GraphError) -> PyErr {
    match err {
        GraphError::PlaybackActive => PyRuntimeError::new_err(err.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn parse(label: &str) -> PyResult<VertexId> {
    label.parse().map_err(to_py_err)
}

fn step_tuple(step: &DfsStep) -> PyStep {
    (
        step.vertex_label(),
        step.edge_label(),
        step.kind.to_string(),
        step.terminal,
    )
}

fn path_tuple(result: &PathResult) -> Option<(Vec<String>, u64)> {
    result
        .total_distance()
        .map(|distance| (result.labels(), distance))
}

/// Python-exposed graph session.
#[pyclass(name = "Graph")]
pub struct PyGraph {
    session: Session,
}

#[pymethods]
impl PyGraph {
    /// Create a graph with `vertex_count` isolated vertices.
    #[new]
    #[pyo3(signature = (vertex_count = 0))]
    fn new(vertex_count: usize) -> PyResult<Self> {
        check_node_count(vertex_count).map_err(to_py_err)?;
        Ok(Self {
            session: Session::with_graph(GraphModel::with_vertices(vertex_count)),
        })
    }

    #[getter]
    fn vertex_count(&self) -> usize {
        self.session.vertex_count()
    }

    /// Current vertex labels, ascending.
    fn vertices(&self) -> Vec<String> {
        self.session
            .read(|graph| graph.vertices().map(|v| v.label()).collect())
    }

    /// `(edge, weight)` for every edge.
    fn edges(&self) -> Vec<(String, u32)> {
        self.session
            .read(|graph| graph.edges().map(|(e, w)| (e.label(), w)).collect())
    }

    fn add_vertex(&self) -> PyResult<String> {
        self.session
            .add_vertex()
            .map(|v| v.label())
            .map_err(to_py_err)
    }

    fn remove_vertex(&self, vertex: &str) -> PyResult<()> {
        self.session.remove_vertex(parse(vertex)?).map_err(to_py_err)
    }

    fn add_edge(&self, u: &str, v: &str, weight: i64) -> PyResult<()> {
        self.session
            .add_edge(parse(u)?, parse(v)?, weight)
            .map_err(to_py_err)
    }

    fn remove_edge(&self, u: &str, v: &str) -> PyResult<()> {
        self.session
            .remove_edge(parse(u)?, parse(v)?)
            .map_err(to_py_err)
    }

    fn neighbors(&self, vertex: &str) -> PyResult<Vec<(String, u32)>> {
        let neighbors = self.session.neighbors(parse(vertex)?).map_err(to_py_err)?;
        Ok(neighbors.iter().map(|(v, w)| (v.label(), *w)).collect())
    }

    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }

    fn generate_random(
        &self,
        node_count: usize,
        edge_probability_percent: u32,
        max_weight: u32,
    ) -> PyResult<()> {
        let params = RandomGraphParams::new(node_count, edge_probability_percent, max_weight);
        self.session
            .generate(&mut rand::thread_rng(), params)
            .map_err(to_py_err)
    }

    /// Load a random scenario. `config_json` overrides the default ranges.
    #[pyo3(signature = (config_json = None))]
    fn random_scenario(&self, config_json: Option<&str>) -> PyResult<(String, String)> {
        let config = match config_json {
            Some(json) => GeneratorConfig::from_json(json).map_err(to_py_err)?,
            None => GeneratorConfig::default(),
        };
        let selection = self
            .session
            .load_scenario(&mut rand::thread_rng(), &config)
            .map_err(to_py_err)?;
        Ok((selection.source.label(), selection.destination.label()))
    }

    fn select(&self, source: &str, destination: &str) -> PyResult<()> {
        self.session
            .select(parse(source)?, parse(destination)?)
            .map_err(to_py_err)
    }

    /// Record a depth-first traversal.
    fn traverse(&self, source: &str, destination: &str) -> PyResult<Vec<PyStep>> {
        let (source, destination) = (parse(source)?, parse(destination)?);
        let log = self
            .session
            .read(|graph| TraversalRecorder::new(graph).run(source, destination))
            .map_err(to_py_err)?;
        Ok(log.iter().map(step_tuple).collect())
    }

    /// `(path, distance)`, or `None` when the destination is unreachable.
    fn shortest_path(
        &self,
        source: &str,
        destination: &str,
    ) -> PyResult<Option<(Vec<String>, u64)>> {
        let (source, destination) = (parse(source)?, parse(destination)?);
        let result = self
            .session
            .read(|graph| ShortestPathFinder::new(graph).find(source, destination))
            .map_err(to_py_err)?;
        Ok(path_tuple(&result))
    }

    /// Run both phases for the current selection and return the replay as
    /// MessagePack bytes.
    fn run(&self) -> PyResult<Vec<u8>> {
        let replay = self.session.run().map_err(to_py_err)?;
        replay.to_msgpack().map_err(to_py_err)
    }

    /// Same as `run`, as a list of log lines.
    fn narrate(&self) -> PyResult<Vec<String>> {
        Ok(self.session.run().map_err(to_py_err)?.narrate())
    }

    fn begin_playback(&self) -> PyResult<()> {
        self.session.start_playback().map_err(to_py_err)
    }

    fn end_playback(&self) {
        self.session.end_playback();
    }

    fn __repr__(&self) -> String {
        self.session.read(|graph| {
            format!(
                "Graph(vertices={}, edges={}, connected={})",
                graph.vertex_count(),
                graph.edge_count(),
                graph.is_connected()
            )
        })
    }
}
