use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense vertex handle, valid for the graph that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        VertexId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub name: String,
}

/// Limit on how many distinct vertices a graph accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "limit")]
pub enum CapacityPolicy {
    /// Grow without limit (default)
    #[default]
    Unbounded,
    /// Refuse new vertices once this many exist
    Bounded(usize),
}

impl CapacityPolicy {
    /// Build a policy from an optional maximum
    pub fn from_limit(limit: Option<usize>) -> Self {
        match limit {
            Some(n) => CapacityPolicy::Bounded(n),
            None => CapacityPolicy::Unbounded,
        }
    }
}

/// One line of the adjacency view: a vertex and its sorted neighbor names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyRow {
    pub vertex: String,
    pub neighbors: Vec<String>,
}
