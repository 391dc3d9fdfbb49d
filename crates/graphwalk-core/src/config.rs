//! Graph configuration for graphwalk
//!
//! Configuration is a TOML file naming the edge list, the start vertex,
//! and traversal knobs. Every field is optional; an empty file describes
//! the built-in sample graph.

pub mod types;

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{GraphwalkError, Result};
use crate::graph::{CapacityPolicy, Graph};
use crate::traversal::{TraversalOptions, DEFAULT_MAX_RECURSION_DEPTH};

pub use types::{sample_edges, GraphConfig, DEFAULT_START};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "GRAPHWALK_CONFIG";

/// A graph built from configuration plus the insertions that were refused
#[derive(Debug)]
pub struct GraphBuild {
    pub graph: Graph,
    pub rejected: Vec<GraphwalkError>,
}

impl GraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphwalkError::io_operation("read config", path.display(), e))?;
        let config: GraphConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), edges = config.edges.len(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphwalkError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| GraphwalkError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Resolve configuration: explicit path, then `GRAPHWALK_CONFIG`,
    /// then the built-in sample
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match std::env::var(CONFIG_ENV_VAR) {
            Ok(env_path) if !env_path.is_empty() => Self::load(Path::new(&env_path)),
            _ => Ok(Self::default()),
        }
    }

    /// Reject vertex names that cannot be displayed or looked up, and
    /// recursion bounds the call stack cannot hold
    pub fn validate(&self) -> Result<()> {
        if self.max_recursion_depth > DEFAULT_MAX_RECURSION_DEPTH {
            crate::bail_invalid!(
                "max_recursion_depth",
                format!(
                    "{} (at most {})",
                    self.max_recursion_depth, DEFAULT_MAX_RECURSION_DEPTH
                )
            );
        }

        let names = self
            .edges
            .iter()
            .flat_map(|(u, v)| [u, v])
            .chain(self.vertices.iter())
            .chain(std::iter::once(&self.start));

        for name in names {
            if name.trim().is_empty() {
                crate::bail_invalid!("vertex name", format!("{:?}", name));
            }
        }
        Ok(())
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        CapacityPolicy::from_limit(self.max_vertices)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            max_recursion_depth: self.max_recursion_depth,
        }
    }

    /// Build the configured graph.
    ///
    /// Insertions refused by a bounded capacity are logged and skipped;
    /// the graph keeps its previous valid state and building continues.
    pub fn build_graph(&self) -> Result<GraphBuild> {
        let mut graph = Graph::with_policy(self.capacity_policy());
        let mut rejected = Vec::new();

        for (u, v) in &self.edges {
            record(graph.add_edge(u, v), &mut rejected)?;
        }

        for name in &self.vertices {
            let outcome = graph.add_vertex(name).map(|_| ());
            record(outcome, &mut rejected)?;
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            rejected = rejected.len(),
            "graph_built"
        );
        Ok(GraphBuild { graph, rejected })
    }
}

/// Keep recoverable insertion failures, propagate anything else
fn record(outcome: Result<()>, rejected: &mut Vec<GraphwalkError>) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(e @ GraphwalkError::CapacityExceeded { .. }) => {
            tracing::warn!(error = %e, "ignoring insertion");
            rejected.push(e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
