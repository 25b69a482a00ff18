//! Generator Configuration
//!
//! Ranges used when drawing a random scenario. The defaults match the
//! "random graph" option of the visualizer: 5 to 50 vertices, 30% to 100%
//! edge probability and weights up to 1 to 20.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Largest vertex count accepted from generator parameters or bindings.
///
/// The weight matrix is `n × n`, so this bounds memory at a few hundred MB.
pub const MAX_NODE_COUNT: usize = 10_000;

/// Reject vertex counts above [`MAX_NODE_COUNT`].
pub fn check_node_count(node_count: usize) -> GraphResult<()> {
    if node_count > MAX_NODE_COUNT {
        return Err(GraphError::InvalidConfig(format!(
            "node_count {node_count} exceeds the limit of {MAX_NODE_COUNT}"
        )));
    }
    Ok(())
}

/// Parameters for one call to [`generate_random`](crate::graph::generate_random).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomGraphParams {
    /// Number of vertices to create.
    pub node_count: usize,
    /// Probability in percent that any given pair is connected.
    /// Values of 100 or more always connect.
    pub edge_probability_percent: u32,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
}

impl RandomGraphParams {
    /// Create a parameter set.
    pub fn new(node_count: usize, edge_probability_percent: u32, max_weight: u32) -> Self {
        Self {
            node_count,
            edge_probability_percent,
            max_weight,
        }
    }

    /// Reject parameters the generator cannot honor.
    pub fn validate(&self) -> GraphResult<()> {
        check_node_count(self.node_count)?;
        if self.max_weight == 0 {
            return Err(GraphError::InvalidConfig(
                "max_weight must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// An inclusive `[min, max]` range in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialOrd> Bounds<T> {
    /// Create the range `[min, max]`.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// True if `min > max`.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// The equivalent `RangeInclusive`.
    pub fn range(&self) -> RangeInclusive<T> {
        self.min..=self.max
    }
}

/// Ranges from which random scenarios are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Vertex count range. `min` must be at least 2.
    pub node_count: Bounds<usize>,
    /// Edge probability range, in percent.
    pub edge_probability_percent: Bounds<u32>,
    /// Range for the largest edge weight. `min` must be at least 1.
    pub max_weight: Bounds<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: Bounds::new(5, 50),
            edge_probability_percent: Bounds::new(30, 100),
            max_weight: Bounds::new(1, 20),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a configuration from JSON. Missing fields take
    /// their default values.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every range is non-empty and usable.
    pub fn validate(&self) -> GraphResult<()> {
        if self.node_count.is_empty()
            || self.edge_probability_percent.is_empty()
            || self.max_weight.is_empty()
        {
            return Err(GraphError::InvalidConfig("empty range".to_string()));
        }
        check_node_count(self.node_count.max)?;
        // A scenario needs a source and a distinct destination.
        if self.node_count.min < 2 {
            return Err(GraphError::InvalidConfig(
                "node_count.min must be at least 2".to_string(),
            ));
        }
        if self.max_weight.min == 0 {
            return Err(GraphError::InvalidConfig(
                "max_weight.min must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
