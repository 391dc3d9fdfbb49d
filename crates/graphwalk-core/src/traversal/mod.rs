//! Graph traversal algorithms
//!
//! Three read-only walks over a [`Graph`]:
//! - `bfs`: breadth-first, queue frontier, mark on enqueue
//! - `dfs_recursive`: depth-first pre-order via recursion
//! - `dfs_iterative`: depth-first via an explicit stack, mark on pop
//!
//! Each run owns its visited set, frontier, and result, so any number of
//! traversals may share one graph.

pub mod bfs;
pub mod dfs;
pub mod observer;
mod shared;
pub mod types;


use crate::error::Result;
use crate::graph::Graph;

pub use bfs::bfs;
pub use dfs::{dfs_iterative, dfs_recursive};
pub use observer::{NoopObserver, Paced, StepObserver, StepRecorder};
pub use types::{
    Algorithm, FrontierKind, TraversalOptions, TraversalResult, TraversalStep,
    DEFAULT_MAX_RECURSION_DEPTH,
};

/// Run `algorithm` from `start`
pub fn traverse<O: StepObserver>(
    graph: &Graph,
    algorithm: Algorithm,
    start: &str,
    opts: &TraversalOptions,
    observer: &mut O,
) -> Result<TraversalResult> {
    match algorithm {
        Algorithm::Bfs => bfs(graph, start, observer),
        Algorithm::DfsRecursive => dfs_recursive(graph, start, opts, observer),
        Algorithm::DfsIterative => dfs_iterative(graph, start, observer),
    }
}
