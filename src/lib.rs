//! Nexum: In-Memory Weighted Graph Library
//!
//! A small, self-contained graph data structure supporting vertex and edge
//! mutation, single-source shortest paths, deterministic traversal, and
//! connected component enumeration.
//!
//! # Core Concepts
//!
//! - **Vertices**: Uniquely identified entities carrying an optional opaque payload
//! - **Edges**: Weighted adjacency entries owned by their source vertex
//! - **Graphs**: Undirected or directed containers, fixed at construction
//!
//! # Example
//!
//! ```
//! use nexum::{Graph, Vertex, VertexId};
//!
//! let mut graph = Graph::new();
//! for name in ["a", "b", "c"] {
//!     graph.add_vertex(Vertex::new(name));
//! }
//!
//! let (a, b, c) = (VertexId::from("a"), VertexId::from("b"), VertexId::from("c"));
//! graph.add_weighted_edge(&a, &b, 4.0);
//! graph.add_weighted_edge(&b, &c, 1.0);
//! graph.add_weighted_edge(&a, &c, 6.0);
//!
//! let distances = graph.dijkstra(&a, None);
//! assert_eq!(distances[&c], 5.0);
//! ```

mod components;
mod dijkstra;
mod graph;
mod traverse;
mod vertex;


pub use dijkstra::ShortestPath;
pub use graph::{Graph, GraphMetadata, DEFAULT_EDGE_WEIGHT};
pub use vertex::{PropertyValue, Vertex, VertexId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
