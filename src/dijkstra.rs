//! Single-source shortest paths over non-negative edge weights

use crate::graph::Graph;
use crate::vertex::VertexId;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A reconstructed shortest path between two vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Vertices along the path, from start to end inclusive
    pub vertices: Vec<VertexId>,
    /// Total weight along the path
    pub distance: f64,
}

/// Heap entry ordered so the smallest tentative distance pops first
#[derive(Clone, PartialEq)]
struct MinCost {
    cost: f64,
    vertex: VertexId,
}

impl Eq for MinCost {}

impl Ord for MinCost {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison turns the max-heap into a min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for MinCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Graph {
    /// Shortest distances from `start` to every reachable vertex
    ///
    /// Returns a map holding only vertices whose distance was finalized.
    /// Unreachable vertices are absent rather than infinite, and a missing
    /// `start` yields an empty map. Passing `end` stops the search as soon
    /// as that vertex is finalized, so the map may cover only part of the
    /// reachable set; an `end` that never turns up (absent or unreachable)
    /// leaves the full result intact.
    pub fn dijkstra(&self, start: &VertexId, end: Option<&VertexId>) -> HashMap<VertexId, f64> {
        self.run_dijkstra(start, end).0
    }

    /// Shortest path from `start` to `end`, if one exists
    ///
    /// Returns `None` when either endpoint is missing or `end` is
    /// unreachable. A path from a vertex to itself has distance 0.0.
    pub fn shortest_path(&self, start: &VertexId, end: &VertexId) -> Option<ShortestPath> {
        let (distances, predecessors) = self.run_dijkstra(start, Some(end));
        let distance = *distances.get(end)?;

        // Walk predecessor links back to the start, then flip the order
        let mut vertices: Vec<VertexId> = Vec::new();
        let mut current = end.clone();
        while let Some(previous) = predecessors.get(&current) {
            vertices.push(current.clone());
            current = previous.clone();
        }
        vertices.push(current);
        vertices.reverse();

        Some(ShortestPath { vertices, distance })
    }

    /// Heap-based Dijkstra core returning finalized distances and
    /// predecessor links
    fn run_dijkstra(
        &self,
        start: &VertexId,
        end: Option<&VertexId>,
    ) -> (HashMap<VertexId, f64>, HashMap<VertexId, VertexId>) {
        let mut finalized: HashMap<VertexId, f64> = HashMap::new();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();

        if !self.has_vertex(start) {
            return (finalized, predecessors);
        }

        // Best tentative distance per still-open vertex
        let mut tentative: HashMap<VertexId, f64> = HashMap::new();
        let mut heap: BinaryHeap<MinCost> = BinaryHeap::new();

        tentative.insert(start.clone(), 0.0);
        heap.push(MinCost {
            cost: 0.0,
            vertex: start.clone(),
        });

        while let Some(MinCost { cost, vertex }) = heap.pop() {
            if finalized.contains_key(&vertex) {
                // Stale entry superseded by a cheaper push
                continue;
            }
            finalized.insert(vertex.clone(), cost);

            if end == Some(&vertex) {
                break;
            }

            for (neighbor, weight) in self.neighbors(&vertex) {
                if finalized.contains_key(neighbor) {
                    continue;
                }
                let proposed = cost + weight;
                let improves = tentative
                    .get(neighbor)
                    .map_or(true, |&best| proposed < best);
                if improves {
                    tentative.insert(neighbor.clone(), proposed);
                    predecessors.insert(neighbor.clone(), vertex.clone());
                    heap.push(MinCost {
                        cost: proposed,
                        vertex: neighbor.clone(),
                    });
                }
            }
        }

        tracing::trace!(start = %start, settled = finalized.len(), "dijkstra finished");
        (finalized, predecessors)
    }
}
