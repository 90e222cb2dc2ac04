//! Vertex representation and identifiers

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Unique identifier for a vertex
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    /// Create a VertexId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Typed payload values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<PropertyValue>),
    Object(HashMap<String, PropertyValue>),
}

/// A vertex in the graph
///
/// Owns its adjacency map (neighbor id -> edge weight). The payload in `data`
/// is opaque: no graph algorithm ever inspects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier
    pub(crate) id: VertexId,
    /// Optional opaque payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PropertyValue>,
    /// Adjacency map; keys iterate in ascending id order
    #[serde(default)]
    pub(crate) neighbors: BTreeMap<VertexId, f64>,
}

impl Vertex {
    /// Create a new vertex with an empty adjacency map
    ///
    /// Every vertex allocates its own map; two vertices never share one.
    pub fn new(id: impl Into<VertexId>) -> Self {
        Self {
            id: id.into(),
            data: None,
            neighbors: BTreeMap::new(),
        }
    }

    /// Attach an opaque payload
    pub fn with_data(mut self, data: PropertyValue) -> Self {
        self.data = Some(data);
        self
    }

    /// The vertex identifier
    pub fn id(&self) -> &VertexId {
        &self.id
    }

    /// Iterate neighbors with edge weights, in natural (ascending id) order
    pub fn neighbors(&self) -> impl DoubleEndedIterator<Item = (&VertexId, f64)> {
        self.neighbors.iter().map(|(id, weight)| (id, *weight))
    }

    /// Iterate neighbor ids in natural (ascending id) order
    pub fn neighbor_ids(&self) -> impl DoubleEndedIterator<Item = &VertexId> {
        self.neighbors.keys()
    }

    /// Weight of the edge to `neighbor`, if one exists
    pub fn weight_to(&self, neighbor: &VertexId) -> Option<f64> {
        self.neighbors.get(neighbor).copied()
    }

    /// Whether an edge to `neighbor` exists
    pub fn has_neighbor(&self, neighbor: &VertexId) -> bool {
        self.neighbors.contains_key(neighbor)
    }

    /// Number of outgoing adjacency entries
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }
}
