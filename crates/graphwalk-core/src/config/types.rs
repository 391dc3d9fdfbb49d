//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::traversal::DEFAULT_MAX_RECURSION_DEPTH;

/// Vertex every traversal starts from unless overridden
pub const DEFAULT_START: &str = "A";

/// The six-edge demonstration graph:
///
/// ```text
///     A
///    / \
///   B   C
///  / \   \
/// D   E---F
/// ```
pub fn sample_edges() -> Vec<(String, String)> {
    [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("B", "E"),
        ("C", "F"),
        ("E", "F"),
    ]
    .iter()
    .map(|(u, v)| (u.to_string(), v.to_string()))
    .collect()
}

/// Graph and traversal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Start vertex for traversals
    #[serde(default = "default_start")]
    pub start: String,

    /// Maximum number of vertices (optional; absent = unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vertices: Option<usize>,

    /// Pause after each traversal step, in milliseconds
    #[serde(default)]
    pub step_delay_ms: u64,

    /// Nested-call bound for recursive DFS, at most
    /// [`DEFAULT_MAX_RECURSION_DEPTH`]
    #[serde(default = "default_max_recursion_depth")]
    pub max_recursion_depth: usize,

    /// Undirected edges as `[from, to]` pairs
    #[serde(default = "sample_edges")]
    pub edges: Vec<(String, String)>,

    /// Extra vertices with no edges
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            max_vertices: None,
            step_delay_ms: 0,
            max_recursion_depth: default_max_recursion_depth(),
            edges: sample_edges(),
            vertices: Vec::new(),
        }
    }
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_max_recursion_depth() -> usize {
    DEFAULT_MAX_RECURSION_DEPTH
}
