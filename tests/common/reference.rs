//! Naive reference implementations used to cross-check library results

use nexum::{Graph, VertexId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Scan-based Dijkstra in O(V^2), kept deliberately simple
///
/// Every iteration scans the whole tentative frontier for the cheapest
/// vertex instead of using a heap. Slow but easy to audit.
pub fn naive_dijkstra(graph: &Graph, start: &VertexId) -> HashMap<VertexId, f64> {
    let mut finalized: HashMap<VertexId, f64> = HashMap::new();
    if !graph.has_vertex(start) {
        return finalized;
    }

    let mut tentative: HashMap<VertexId, f64> = HashMap::new();
    tentative.insert(start.clone(), 0.0);

    while let Some((vertex, distance)) = cheapest(&tentative) {
        tentative.remove(&vertex);
        finalized.insert(vertex.clone(), distance);

        for (neighbor, weight) in graph.neighbors(&vertex) {
            if finalized.contains_key(neighbor) {
                continue;
            }
            let proposed = distance + weight;
            let entry = tentative.entry(neighbor.clone()).or_insert(f64::INFINITY);
            if proposed < *entry {
                *entry = proposed;
            }
        }
    }

    finalized
}

fn cheapest(tentative: &HashMap<VertexId, f64>) -> Option<(VertexId, f64)> {
    tentative
        .iter()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
        .map(|(vertex, distance)| (vertex.clone(), *distance))
}
