//! Undirected graph of named vertices
//!
//! Vertices are interned to dense [`VertexId`]s in insertion order. Each
//! `add_edge(u, v)` call appends `v` to `u`'s adjacency list and `u` to
//! `v`'s, so the neighbor relation stays symmetric including multiplicity:
//! repeated edges are kept as duplicate entries and a self-loop shows up
//! twice in its own list.

pub mod types;

use std::collections::HashMap;

use crate::error::{GraphwalkError, Result};

pub use types::{AdjacencyRow, CapacityPolicy, Vertex, VertexId};

/// In-memory undirected graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
    policy: CapacityPolicy,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given capacity policy
    pub fn with_policy(policy: CapacityPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Build a graph from an edge list, stopping at the first rejected edge
    pub fn from_edges<I, S>(edges: I, policy: CapacityPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::with_policy(policy);
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref())?;
        }
        Ok(graph)
    }

    /// Insert `name` if absent and return its id either way
    pub fn add_vertex(&mut self, name: &str) -> Result<VertexId> {
        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }
        self.ensure_room(&[name])?;

        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex {
            name: name.to_string(),
        });
        self.adjacency.push(Vec::new());
        self.index.insert(name.to_string(), id);
        tracing::trace!(vertex = name, id = id.index(), "add_vertex");
        Ok(id)
    }

    /// Connect `u` and `v`, creating either endpoint as needed.
    ///
    /// Capacity is checked for both endpoints before anything is inserted,
    /// so a rejected edge leaves the graph exactly as it was.
    pub fn add_edge(&mut self, u: &str, v: &str) -> Result<()> {
        self.ensure_room(&[u, v])?;

        let a = self.add_vertex(u)?;
        let b = self.add_vertex(v)?;
        self.adjacency[a.index()].push(b);
        self.adjacency[b.index()].push(a);
        self.edge_count += 1;
        tracing::trace!(from = u, to = v, "add_edge");
        Ok(())
    }

    /// Fail with `CapacityExceeded` if inserting the unknown names in
    /// `names` would exceed a bounded policy.
    fn ensure_room(&self, names: &[&str]) -> Result<()> {
        let CapacityPolicy::Bounded(capacity) = self.policy else {
            return Ok(());
        };

        let mut pending: Vec<&str> = Vec::new();
        for &name in names {
            if self.index.contains_key(name) || pending.contains(&name) {
                continue;
            }
            if self.vertices.len() + pending.len() >= capacity {
                return Err(GraphwalkError::CapacityExceeded {
                    name: name.to_string(),
                    capacity,
                });
            }
            pending.push(name);
        }
        Ok(())
    }

    pub fn vertex_exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn find_by_name(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Like [`Graph::find_by_name`], but absent names are an error
    pub fn require(&self, name: &str) -> Result<VertexId> {
        self.find_by_name(name)
            .ok_or_else(|| GraphwalkError::VertexNotFound {
                name: name.to_string(),
            })
    }

    /// Name of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different graph.
    pub fn vertex_name(&self, id: VertexId) -> &str {
        &self.vertices[id.index()].name
    }

    /// Neighbors in edge-insertion order, duplicates included
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency
            .get(id.index())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Neighbors ordered ascending by name.
    ///
    /// This ordering is the only tie-break the traversals use, which is
    /// what makes their output reproducible.
    pub fn neighbors_sorted(&self, id: VertexId) -> Vec<VertexId> {
        let mut neighbors = self.neighbors(id).to_vec();
        neighbors.sort_by(|a, b| self.vertex_name(*a).cmp(self.vertex_name(*b)));
        neighbors
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of `add_edge` calls recorded, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertex ids ordered by name
    pub fn vertices_sorted(&self) -> Vec<VertexId> {
        let mut ids: Vec<VertexId> = (0..self.vertices.len()).map(VertexId::new).collect();
        ids.sort_by(|a, b| self.vertex_name(*a).cmp(self.vertex_name(*b)));
        ids
    }

    /// Adjacency structure, one row per vertex, everything sorted by name
    pub fn adjacency(&self) -> Vec<AdjacencyRow> {
        self.vertices_sorted()
            .into_iter()
            .map(|id| AdjacencyRow {
                vertex: self.vertex_name(id).to_string(),
                neighbors: self.names(&self.neighbors_sorted(id)),
            })
            .collect()
    }

    /// Resolve a sequence of ids to owned names
    pub fn names(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter()
            .map(|id| self.vertex_name(*id).to_string())
            .collect()
    }
}
