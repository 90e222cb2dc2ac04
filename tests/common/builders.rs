//! Graph construction helpers for integration tests

use nexum::{Graph, Vertex, VertexId};
use rand::rngs::StdRng;
use rand::Rng;

/// Deterministic ids "v0" through "v{count-1}"
pub fn vertex_ids(count: usize) -> Vec<VertexId> {
    (0..count).map(|i| VertexId::from(format!("v{i}"))).collect()
}

/// Build a graph with `count` vertices and up to `edges` randomly weighted
/// edges between random endpoint pairs
///
/// Weights are strictly positive. Returns the graph together with the ids
/// that were inserted, in order.
pub fn random_graph(
    rng: &mut StdRng,
    count: usize,
    edges: usize,
    directed: bool,
) -> (Graph, Vec<VertexId>) {
    let mut graph = if directed {
        Graph::directed()
    } else {
        Graph::new()
    };

    let ids = vertex_ids(count);
    for id in &ids {
        graph.add_vertex(Vertex::new(id.clone()));
    }

    for _ in 0..edges {
        let from = &ids[rng.gen_range(0..count)];
        let to = &ids[rng.gen_range(0..count)];
        let weight = rng.gen_range(0.1..10.0);
        graph.add_weighted_edge(from, to, weight);
    }

    (graph, ids)
}
