//! Random Graph Generation
//!
//! Every unordered pair `(i, j)` with `i < j` is connected independently
//! with the configured probability; connected pairs get a uniform weight
//! in `1..=max_weight`. Randomness always comes from the caller so runs can
//! be reproduced with a seeded generator.

use rand::Rng;
use tracing::{info, warn};

use super::model::GraphModel;
use super::vertex::VertexId;
use crate::config::{GeneratorConfig, RandomGraphParams};
use crate::error::GraphResult;

/// Generate a random graph.
///
/// Probabilities of 100% and above connect every pair.
pub fn generate_random<R: Rng + ?Sized>(
    rng: &mut R,
    params: RandomGraphParams,
) -> GraphResult<GraphModel> {
    params.validate()?;
    let n = params.node_count;
    let mut graph = GraphModel::with_vertices(n);

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_range(0..100) < params.edge_probability_percent {
                let weight = rng.gen_range(1..=params.max_weight);
                graph.add_edge(VertexId::new(i), VertexId::new(j), i64::from(weight))?;
            }
        }
    }

    info!(
        nodes = n,
        edges = graph.edge_count(),
        probability = params.edge_probability_percent,
        max_weight = params.max_weight,
        "generated random graph"
    );
    Ok(graph)
}

/// A randomly drawn graph together with a source and a distinct destination.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub graph: GraphModel,
    /// The parameters drawn from the configuration.
    pub params: RandomGraphParams,
    pub source: VertexId,
    pub destination: VertexId,
    /// Whether `graph` was connected when generated.
    pub connected: bool,
}

impl Scenario {
    /// Draw parameters from `config`, generate a graph and pick endpoints.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> GraphResult<Self> {
        config.validate()?;
        let params = RandomGraphParams::new(
            rng.gen_range(config.node_count.range()),
            rng.gen_range(config.edge_probability_percent.range()),
            rng.gen_range(config.max_weight.range()),
        );
        let graph = generate_random(rng, params)?;

        let n = params.node_count;
        let source = rng.gen_range(0..n);
        // Draw from the n - 1 other vertices and skip over the source.
        let mut destination = rng.gen_range(0..n - 1);
        if destination >= source {
            destination += 1;
        }

        let connected = graph.is_connected();
        if !connected {
            warn!("generated graph is disconnected - some nodes may not be reachable");
        }
        let scenario = Self {
            graph,
            params,
            source: VertexId::new(source),
            destination: VertexId::new(destination),
            connected,
        };
        info!(
            source = %scenario.source,
            destination = %scenario.destination,
            "selected random endpoints"
        );
        Ok(scenario)
    }

    /// Same as [`Scenario::random`] using the thread-local generator.
    pub fn random_default(config: &GeneratorConfig) -> GraphResult<Self> {
        Self::random(&mut rand::thread_rng(), config)
    }
}
