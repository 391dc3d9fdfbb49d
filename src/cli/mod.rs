//! CLI argument parsing for graphwalk
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --format, --quiet, --verbose, graph overrides

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use graphwalk_core::config::CONFIG_ENV_VAR;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::traversal::Algorithm;
use parse::{parse_algorithm, parse_edge, parse_format};

/// Graphwalk - step-by-step BFS and DFS over a small undirected graph
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph configuration file (TOML)
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress the step trace; print results only
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, graphwalk_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Edge as FROM,TO (repeatable; replaces the configured edge list)
    #[arg(long = "edge", global = true, value_parser = parse_edge, action = clap::ArgAction::Append)]
    pub edges: Vec<(String, String)>,

    /// Start vertex for traversals
    #[arg(long, global = true)]
    pub start: Option<String>,

    /// Pause after each traversal step, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Refuse vertices beyond this count
    #[arg(long, global = true)]
    pub max_vertices: Option<usize>,

    /// Nested-call bound for recursive DFS (at most 1000)
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the graph, then run BFS, recursive DFS, and iterative DFS (default)
    Demo,

    /// Print the adjacency structure
    Show,

    /// List a vertex's neighbors in ascending name order
    Neighbors {
        /// Vertex name
        vertex: String,
    },

    /// Run a single traversal
    Traverse {
        /// Algorithm: bfs, dfs-recursive, or dfs-iterative
        #[arg(value_parser = parse_algorithm)]
        algorithm: Algorithm,
    },

    /// Breadth-first traversal
    Bfs,

    /// Depth-first traversal (iterative unless --recursive)
    Dfs {
        /// Use the recursive form
        #[arg(long)]
        recursive: bool,
    },
}

impl Commands {
    /// Algorithm for single-traversal commands
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Commands::Traverse { algorithm } => Some(*algorithm),
            Commands::Bfs => Some(Algorithm::Bfs),
            Commands::Dfs { recursive: true } => Some(Algorithm::DfsRecursive),
            Commands::Dfs { recursive: false } => Some(Algorithm::DfsIterative),
            Commands::Demo | Commands::Show | Commands::Neighbors { .. } => None,
        }
    }
}
