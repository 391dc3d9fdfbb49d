use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphwalkError;

/// Default cap on nested calls for recursive DFS.
///
/// Sized to fit the 2 MiB stack of a spawned thread in unoptimized builds.
/// Configuration may lower it but not raise it.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1_000;

/// Traversal algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first, mark on enqueue
    Bfs,
    /// Depth-first, pre-order recursion
    DfsRecursive,
    /// Depth-first, explicit stack with mark on pop
    DfsIterative,
}

impl Algorithm {
    /// Every algorithm, in the order the demo runs them
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Bfs,
        Algorithm::DfsRecursive,
        Algorithm::DfsIterative,
    ];

    /// Short title used in headers and result lines ("DFS Recursive")
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::DfsRecursive => "DFS Recursive",
            Algorithm::DfsIterative => "DFS Iterative",
        }
    }

    /// Phrase used when announcing a run ("recursive DFS")
    pub fn phrase(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::DfsRecursive => "recursive DFS",
            Algorithm::DfsIterative => "iterative DFS",
        }
    }

    /// The pending-vertex container this algorithm exposes, if any
    pub fn frontier_kind(&self) -> Option<FrontierKind> {
        match self {
            Algorithm::Bfs => Some(FrontierKind::Queue),
            Algorithm::DfsRecursive => None,
            Algorithm::DfsIterative => Some(FrontierKind::Stack),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::DfsRecursive => write!(f, "dfs-recursive"),
            Algorithm::DfsIterative => write!(f, "dfs-iterative"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphwalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs-recursive" | "dfs_recursive" => Ok(Algorithm::DfsRecursive),
            "dfs-iterative" | "dfs_iterative" | "dfs" => Ok(Algorithm::DfsIterative),
            other => Err(GraphwalkError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Kind of frontier container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierKind {
    /// FIFO, listed front to back
    Queue,
    /// LIFO, listed bottom to top
    Stack,
}

impl FrontierKind {
    pub fn label(&self) -> &'static str {
        match self {
            FrontierKind::Queue => "Queue",
            FrontierKind::Stack => "Stack",
        }
    }
}

/// Snapshot taken right after a vertex is visited
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalStep {
    /// 1-based visit number
    pub step: usize,
    pub vertex: String,
    /// Pending vertices in container order; `None` for recursive DFS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontier: Option<Vec<String>>,
    pub visited_so_far: Vec<String>,
}

/// Knobs that affect how a traversal runs, not what it returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Nested-call bound for recursive DFS (frames on the recursion path)
    pub max_recursion_depth: usize,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

/// Visitation order of one completed traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub algorithm: Algorithm,
    pub start: String,
    pub order: Vec<String>,
}

impl TraversalResult {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
