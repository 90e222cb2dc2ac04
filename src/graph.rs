//! Graph container and mutation operations

use crate::vertex::{Vertex, VertexId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weight assigned by [`Graph::add_edge`] when none is given
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Creation and mutation timestamps for a graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphMetadata {
    /// When the graph was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the graph was last mutated
    pub updated_at: Option<DateTime<Utc>>,
}

/// An in-memory graph of uniquely identified, weighted vertices
///
/// Vertices are keyed by [`VertexId`]; each vertex owns its adjacency map.
/// Whether edges are one-way is fixed when the graph is constructed. All
/// mutation methods report success as a plain `bool` and leave the graph
/// untouched when they return `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// All vertices keyed by id
    vertices: HashMap<VertexId, Vertex>,
    /// Whether edges are one-way; fixed at construction
    directed: bool,
    /// Creation and mutation timestamps
    #[serde(default)]
    metadata: GraphMetadata,
}

impl Graph {
    /// Create an empty undirected graph
    pub fn new() -> Self {
        Self::with_mode(false)
    }

    /// Create an empty directed graph, where edges are one-way
    pub fn directed() -> Self {
        Self::with_mode(true)
    }

    fn with_mode(directed: bool) -> Self {
        Self {
            vertices: HashMap::new(),
            directed,
            metadata: GraphMetadata {
                created_at: Some(Utc::now()),
                ..Default::default()
            },
        }
    }

    /// Insert a vertex
    ///
    /// Returns `false` without mutating anything when the id is already
    /// taken; the existing vertex and its payload are preserved.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.vertices.contains_key(&vertex.id) {
            return false;
        }
        self.vertices.insert(vertex.id.clone(), vertex);
        self.touch();
        true
    }

    /// Add an edge with the default weight of 1.0
    ///
    /// Equivalent to [`Graph::add_weighted_edge`] with
    /// [`DEFAULT_EDGE_WEIGHT`].
    pub fn add_edge(&mut self, from: &VertexId, to: &VertexId) -> bool {
        self.add_weighted_edge(from, to, DEFAULT_EDGE_WEIGHT)
    }

    /// Add an edge with an explicit weight
    ///
    /// Both endpoints must already exist, otherwise `false` is returned and
    /// nothing changes. Re-adding an existing edge overwrites its weight
    /// (last write wins). In an undirected graph the entry is recorded on
    /// both endpoints.
    pub fn add_weighted_edge(&mut self, from: &VertexId, to: &VertexId, weight: f64) -> bool {
        if !self.vertices.contains_key(from) || !self.vertices.contains_key(to) {
            return false;
        }
        if let Some(vertex) = self.vertices.get_mut(from) {
            vertex.neighbors.insert(to.clone(), weight);
        }
        if !self.directed {
            if let Some(vertex) = self.vertices.get_mut(to) {
                vertex.neighbors.insert(from.clone(), weight);
            }
        }
        self.touch();
        true
    }

    /// Remove a vertex and every adjacency entry that points at it
    ///
    /// The sweep over the remaining vertices keeps the graph free of
    /// dangling neighbor references. Returns `false` when the id is absent.
    pub fn remove_vertex(&mut self, id: &VertexId) -> bool {
        if self.vertices.remove(id).is_none() {
            return false;
        }
        let mut swept = 0usize;
        for vertex in self.vertices.values_mut() {
            if vertex.neighbors.remove(id).is_some() {
                swept += 1;
            }
        }
        tracing::debug!(vertex = %id, swept, "removed vertex");
        self.touch();
        true
    }

    /// Get a vertex by id
    pub fn get_vertex(&self, id: &VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Get a mutable reference to a vertex
    ///
    /// Only the payload is publicly mutable; adjacency entries stay under
    /// graph control so edge bookkeeping cannot be bypassed.
    pub fn get_vertex_mut(&mut self, id: &VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id)
    }

    /// Whether a vertex with this id exists
    pub fn has_vertex(&self, id: &VertexId) -> bool {
        self.vertices.contains_key(id)
    }

    /// Iterate all vertices, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Iterate all vertex ids, in no particular order
    pub fn vertex_ids(&self) -> impl Iterator<Item = &VertexId> {
        self.vertices.keys()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    ///
    /// In an undirected graph each edge counts once, including self-loops.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.vertices.values().map(Vertex::neighbor_count).sum();
        if self.directed {
            entries
        } else {
            // A self-loop occupies a single adjacency entry, so it is
            // counted twice here to survive the halving below.
            let loops = self
                .vertices
                .iter()
                .filter(|(id, vertex)| vertex.has_neighbor(id))
                .count();
            (entries + loops) / 2
        }
    }

    /// Iterate the neighbors of `id` with edge weights, in ascending id order
    ///
    /// Yields nothing when the vertex does not exist.
    pub fn neighbors<'a>(
        &'a self,
        id: &VertexId,
    ) -> impl Iterator<Item = (&'a VertexId, f64)> {
        self.vertices
            .get(id)
            .into_iter()
            .flat_map(|vertex| vertex.neighbors())
    }

    /// Weight of the edge from `from` to `to`, if one exists
    pub fn edge_weight(&self, from: &VertexId, to: &VertexId) -> Option<f64> {
        self.vertices.get(from).and_then(|vertex| vertex.weight_to(to))
    }

    /// Whether an edge from `from` to `to` exists
    pub fn has_edge(&self, from: &VertexId, to: &VertexId) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Whether edges are one-way
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Creation and mutation timestamps
    pub fn metadata(&self) -> &GraphMetadata {
        &self.metadata
    }

    /// Update the last modified timestamp
    fn touch(&mut self) {
        self.metadata.updated_at = Some(Utc::now());
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
