//! Connected component enumeration

use crate::graph::Graph;
use crate::vertex::VertexId;
use std::collections::HashSet;

impl Graph {
    /// Partition every vertex into its connected component
    ///
    /// Starts a depth-first walk from each not-yet-visited vertex and
    /// collects what it reaches. Every vertex lands in exactly one
    /// component and none is empty; an isolated vertex forms a singleton.
    /// The order of components, and of vertices within one, is
    /// unspecified. An empty graph yields no components.
    pub fn get_connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut components: Vec<Vec<VertexId>> = Vec::new();

        for id in self.vertex_ids() {
            if visited.contains(id) {
                continue;
            }
            // With one-way edges a walk can reach vertices an earlier
            // component already claimed; those stay where they were.
            let mut component: Vec<VertexId> = Vec::new();
            for reached in self.depth_first_search(id) {
                if visited.insert(reached.clone()) {
                    component.push(reached);
                }
            }
            components.push(component);
        }

        tracing::debug!(count = components.len(), "enumerated connected components");
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;

    fn id(s: &str) -> VertexId {
        VertexId::from(s)
    }

    fn component_sets(graph: &Graph) -> Vec<HashSet<VertexId>> {
        graph
            .get_connected_components()
            .into_iter()
            .map(|component| component.into_iter().collect())
            .collect()
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph = Graph::new();
        assert!(graph.get_connected_components().is_empty());
    }

    #[test]
    fn test_isolated_vertices_form_singletons() {
        let mut graph = Graph::new();
        graph.add_vertex(Vertex::new("a"));
        graph.add_vertex(Vertex::new("b"));

        let components = graph.get_connected_components();

        assert_eq!(components.len(), 2);
        assert!(components.iter().all(|component| component.len() == 1));
    }

    #[test]
    fn test_two_clusters_and_an_island() {
        let mut graph = Graph::new();
        for name in ["a", "b", "c", "x", "y", "island"] {
            graph.add_vertex(Vertex::new(name));
        }
        graph.add_edge(&id("a"), &id("b"));
        graph.add_edge(&id("b"), &id("c"));
        graph.add_edge(&id("x"), &id("y"));

        let sets = component_sets(&graph);

        assert_eq!(sets.len(), 3);
        let expected: HashSet<VertexId> = [id("a"), id("b"), id("c")].into_iter().collect();
        assert!(sets.contains(&expected));
        let pair: HashSet<VertexId> = [id("x"), id("y")].into_iter().collect();
        assert!(sets.contains(&pair));
        let singleton: HashSet<VertexId> = [id("island")].into_iter().collect();
        assert!(sets.contains(&singleton));
    }

    #[test]
    fn test_components_cover_every_vertex_exactly_once() {
        let mut graph = Graph::new();
        for name in ["a", "b", "c", "d", "e"] {
            graph.add_vertex(Vertex::new(name));
        }
        graph.add_edge(&id("a"), &id("b"));
        graph.add_edge(&id("c"), &id("d"));

        let mut seen: HashSet<VertexId> = HashSet::new();
        for component in graph.get_connected_components() {
            assert!(!component.is_empty());
            for vertex in component {
                assert!(seen.insert(vertex), "vertex listed twice");
            }
        }
        assert_eq!(seen.len(), graph.vertex_count());
    }

    #[test]
    fn test_one_way_edges_still_yield_a_partition() {
        let mut graph = Graph::directed();
        for name in ["a", "b", "c"] {
            graph.add_vertex(Vertex::new(name));
        }
        graph.add_edge(&id("a"), &id("b"));
        graph.add_edge(&id("c"), &id("b"));

        let mut seen: HashSet<VertexId> = HashSet::new();
        for component in graph.get_connected_components() {
            assert!(!component.is_empty());
            for vertex in component {
                assert!(seen.insert(vertex), "vertex listed twice");
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_removal_splits_a_component() {
        let mut graph = Graph::new();
        for name in ["a", "b", "c"] {
            graph.add_vertex(Vertex::new(name));
        }
        graph.add_edge(&id("a"), &id("b"));
        graph.add_edge(&id("b"), &id("c"));
        assert_eq!(graph.get_connected_components().len(), 1);

        graph.remove_vertex(&id("b"));

        assert_eq!(graph.get_connected_components().len(), 2);
    }
}
