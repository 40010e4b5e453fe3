//! Topological ordering.

use arbor_common::types::Vertex;
use arbor_common::utils::error::Result;
use arbor_core::graph::{DiGraph, Graph};
use tracing::debug;

use crate::traversal::depth_first;

/// Reverse postorder of a depth-first walk over every vertex.
///
/// On an acyclic graph this is a topological order: every edge points from
/// an earlier vertex to a later one. Cycles are not detected; a cyclic graph
/// still yields a permutation of its vertices, which is what strongly
/// connected component search relies on.
#[derive(Debug, Clone)]
pub struct TopologicalSort {
    order: Vec<Vertex>,
}

impl TopologicalSort {
    /// Orders the vertices of `graph`.
    pub fn new(graph: &DiGraph) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        let mut marked = vec![false; vertex_count];
        let mut postorder = Vec::with_capacity(vertex_count);

        for v in 0..vertex_count {
            if !marked[v] {
                depth_first(graph, v, &mut marked, |_, _| {}, |done| postorder.push(done))?;
            }
        }

        postorder.reverse();
        debug!(vertices = vertex_count, "topological sort complete");
        Ok(Self { order: postorder })
    }

    /// Returns the ordered vertices.
    #[must_use]
    pub fn order(&self) -> &[Vertex] {
        &self.order
    }

    /// Consumes the sort, returning the ordered vertices.
    #[must_use]
    pub fn into_order(self) -> Vec<Vertex> {
        self.order
    }
}

/// Shorthand for `TopologicalSort::new(graph)?.into_order()`.
pub fn topological_order(graph: &DiGraph) -> Result<Vec<Vertex>> {
    Ok(TopologicalSort::new(graph)?.into_order())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::samples;
    use proptest::prelude::*;

    fn positions(order: &[Vertex]) -> Vec<usize> {
        let mut position = vec![0; order.len()];
        for (i, &v) in order.iter().enumerate() {
            position[v] = i;
        }
        position
    }

    fn is_permutation(order: &[Vertex], n: usize) -> bool {
        let mut seen = vec![false; n];
        order.len() == n && order.iter().all(|&v| !std::mem::replace(&mut seen[v], true))
    }

    #[test]
    fn test_dag_edges_point_forward() {
        let graph = samples::tiny_dag().unwrap();
        let order = topological_order(&graph).unwrap();
        let position = positions(&order);

        assert!(is_permutation(&order, 13));
        for v in 0..graph.vertex_count() {
            for w in graph.adjacent(v).unwrap() {
                assert!(position[v] < position[w], "{v} -> {w} points backwards");
            }
        }
    }

    #[test]
    fn test_chain() {
        let graph = DiGraph::from_edges(4, [(2, 3), (1, 2), (0, 1)]).unwrap();
        let sort = TopologicalSort::new(&graph).unwrap();

        assert_eq!(sort.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_reverse_postorder() {
        // 0 visits 2 first, so 2 finishes before 1 and 3.
        let graph = DiGraph::from_edges(4, [(0, 2), (0, 1), (1, 3)]).unwrap();

        assert_eq!(topological_order(&graph).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_cycle_still_orders_every_vertex() {
        let graph = samples::tiny_digraph().unwrap();
        let order = topological_order(&graph).unwrap();

        assert!(is_permutation(&order, 13));
    }

    #[test]
    fn test_empty_graph() {
        let graph = DiGraph::new(0);
        assert!(topological_order(&graph).unwrap().is_empty());
    }

    fn dag_strategy() -> impl Strategy<Value = DiGraph> {
        (1usize..16).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n), 0..40).prop_map(move |pairs| {
                // Orient every edge from the smaller to the larger label.
                let edges = pairs
                    .into_iter()
                    .filter(|(v, w)| v != w)
                    .map(|(v, w)| (v.min(w), v.max(w)));
                DiGraph::from_edges(n, edges).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn acyclic_graphs_sort_topologically(graph in dag_strategy()) {
            let order = topological_order(&graph).unwrap();
            let position = positions(&order);

            prop_assert!(is_permutation(&order, graph.vertex_count()));
            for v in 0..graph.vertex_count() {
                for w in graph.adjacent(v).unwrap() {
                    prop_assert!(position[v] < position[w]);
                }
            }
        }
    }
}
