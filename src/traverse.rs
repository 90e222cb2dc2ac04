//! Depth-first and breadth-first traversal

use crate::graph::Graph;
use crate::vertex::VertexId;
use std::collections::{HashSet, VecDeque};

impl Graph {
    /// Visit every vertex reachable from `start`, depth-first
    ///
    /// Uses an explicit stack rather than recursion, so deep graphs cannot
    /// overflow the call stack. Neighbors are pushed in reverse of their
    /// ascending id order, which makes the stack pop them forward: the
    /// visit order is deterministic for a given graph. Returns an empty
    /// vector when `start` does not exist.
    pub fn depth_first_search(&self, start: &VertexId) -> Vec<VertexId> {
        let mut order: Vec<VertexId> = Vec::new();
        if !self.has_vertex(start) {
            return order;
        }

        let mut seen: HashSet<&VertexId> = HashSet::new();
        let mut stack: Vec<&VertexId> = vec![start];

        while let Some(current) = stack.pop() {
            if seen.contains(current) {
                continue;
            }
            if let Some(vertex) = self.get_vertex(current) {
                seen.insert(current);
                order.push(current.clone());

                for neighbor in vertex.neighbor_ids().rev() {
                    if !seen.contains(neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }

        order
    }

    /// Visit every vertex reachable from `start`, breadth-first
    ///
    /// Vertices appear in order of increasing hop count from `start`, with
    /// each level expanded in ascending id order. Returns an empty vector
    /// when `start` does not exist.
    pub fn breadth_first_search(&self, start: &VertexId) -> Vec<VertexId> {
        let mut order: Vec<VertexId> = Vec::new();
        if !self.has_vertex(start) {
            return order;
        }

        let mut seen: HashSet<&VertexId> = HashSet::new();
        let mut queue: VecDeque<&VertexId> = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if let Some(vertex) = self.get_vertex(current) {
                order.push(current.clone());

                for neighbor in vertex.neighbor_ids() {
                    if seen.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        order
    }
}
