//! Command trait and context for dispatching commands

use std::time::Instant;

use graphwalk_core::config::GraphConfig;
use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::Graph;

use crate::cli::Cli;

/// A graph ready for traversal, with the configuration it came from
pub struct LoadedGraph {
    pub config: GraphConfig,
    pub graph: Graph,
    /// Insertions refused because the graph was full
    pub rejected: Vec<GraphwalkError>,
}

/// Apply command-line overrides on top of file or default configuration
fn resolve_config(cli: &Cli) -> Result<GraphConfig> {
    let mut config = GraphConfig::discover(cli.config.as_deref())?;

    if !cli.edges.is_empty() {
        config.edges = cli.edges.clone();
    }
    if let Some(start) = &cli.start {
        config.start = start.clone();
    }
    if let Some(delay) = cli.delay_ms {
        config.step_delay_ms = delay;
    }
    if let Some(max) = cli.max_vertices {
        config.max_vertices = Some(max);
    }
    if let Some(depth) = cli.max_depth {
        config.max_recursion_depth = depth;
    }

    config.validate()?;
    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolve configuration and build the graph.
    ///
    /// Insertions refused for capacity are reported on stderr (unless
    /// quiet) and otherwise ignored.
    pub fn load_graph(&self) -> Result<LoadedGraph> {
        let config = resolve_config(self.cli)?;
        let build = config.build_graph()?;

        if !self.quiet() {
            for rejected in &build.rejected {
                eprintln!("warning: {}", rejected);
            }
        }

        graphwalk_core::trace_time!(self.start, "load_graph");
        Ok(LoadedGraph {
            config,
            graph: build.graph,
            rejected: build.rejected,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
