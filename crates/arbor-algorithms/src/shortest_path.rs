//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! Edge weights must be non-negative. This is not checked: with a negative
//! weight the distances reported may simply be wrong.

use std::cmp::Ordering;

use arbor_common::types::{Vertex, check_vertex};
use arbor_common::utils::error::Result;
use arbor_core::graph::{DirectedEdge, EdgeWeightedDiGraph};
use arbor_core::index::heap::IndexedHeap;
use tracing::{debug, trace};

/// A queued vertex and its tentative distance.
///
/// Ordered by distance, identified by vertex, so a shorter distance found
/// later replaces the queued entry in place.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    vertex: Vertex,
    distance: f64,
}

impl Candidate {
    fn vertex(&self) -> Vertex {
        self.vertex
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Shortest paths from one source in an edge-weighted digraph.
#[derive(Debug, Clone)]
pub struct DijkstraSp {
    source: Vertex,
    distance_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl DijkstraSp {
    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfBounds` if `source` is not a vertex of
    /// `graph`.
    pub fn new(graph: &EdgeWeightedDiGraph, source: Vertex) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        check_vertex(source, vertex_count)?;

        let mut distance_to = vec![f64::INFINITY; vertex_count];
        let mut edge_to = vec![None; vertex_count];
        distance_to[source] = 0.0;

        let mut queue = IndexedHeap::min_heap_by_key(Candidate::vertex);
        queue.insert(Candidate {
            vertex: source,
            distance: 0.0,
        });

        let mut relaxations = 0usize;
        while let Some(Candidate { vertex: v, .. }) = queue.remove_top() {
            for edge in graph.adjacent(v)? {
                let w = edge.to();
                let distance = distance_to[v] + edge.weight();
                if distance < distance_to[w] {
                    trace!(from = v, to = w, distance, "relaxed edge");
                    distance_to[w] = distance;
                    edge_to[w] = Some(*edge);
                    relaxations += 1;

                    let candidate = Candidate {
                        vertex: w,
                        distance,
                    };
                    if !queue.update(candidate) {
                        queue.insert(candidate);
                    }
                }
            }
        }

        debug!(source, relaxations, "shortest paths complete");
        Ok(Self {
            source,
            distance_to,
            edge_to,
        })
    }

    /// The vertex distances are measured from.
    #[must_use]
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Returns the length of the shortest path to `v`, or infinity if `v` is
    /// unreachable.
    pub fn distance_to(&self, v: Vertex) -> Result<f64> {
        check_vertex(v, self.distance_to.len())?;
        Ok(self.distance_to[v])
    }

    /// Returns whether `v` is reachable from the source.
    pub fn has_path_to(&self, v: Vertex) -> Result<bool> {
        Ok(self.distance_to(v)?.is_finite())
    }

    /// Returns the edges of a shortest path from the source to `v`, or `None`
    /// if `v` is unreachable. The path to the source itself is empty.
    pub fn path_to(&self, v: Vertex) -> Result<Option<Vec<DirectedEdge>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = v;
        while let Some(edge) = self.edge_to[current] {
            path.push(edge);
            current = edge.from();
        }
        path.reverse();
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::Error;
    use arbor_core::samples;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_tiny_ewd_distances() {
        let graph = samples::tiny_ewd().unwrap();
        let sp = DijkstraSp::new(&graph, 0).unwrap();

        let expected = [0.0, 1.05, 0.26, 0.99, 0.38, 0.73, 1.51, 0.60];
        for (v, &distance) in expected.iter().enumerate() {
            assert!(
                (sp.distance_to(v).unwrap() - distance).abs() < EPSILON,
                "distance to {v}"
            );
        }
    }

    #[test]
    fn test_tiny_ewd_paths() {
        let graph = samples::tiny_ewd().unwrap();
        let sp = DijkstraSp::new(&graph, 0).unwrap();

        let path: Vec<_> = sp
            .path_to(6)
            .unwrap()
            .unwrap()
            .iter()
            .map(|e| (e.from(), e.to()))
            .collect();
        assert_eq!(path, vec![(0, 2), (2, 7), (7, 3), (3, 6)]);

        assert_eq!(sp.path_to(0).unwrap(), Some(Vec::new()));
        assert_eq!(sp.source(), 0);
    }

    #[test]
    fn test_unreachable() {
        let graph =
            EdgeWeightedDiGraph::from_edges(3, [(0, 1, 1.0), (2, 0, 1.0)]).unwrap();
        let sp = DijkstraSp::new(&graph, 0).unwrap();

        assert!(sp.has_path_to(1).unwrap());
        assert!(!sp.has_path_to(2).unwrap());
        assert_eq!(sp.distance_to(2).unwrap(), f64::INFINITY);
        assert_eq!(sp.path_to(2).unwrap(), None);
    }

    #[test]
    fn test_queued_distance_is_lowered() {
        // 2 is queued at 10.0 first, then improved to 2.0 through 1.
        let graph = EdgeWeightedDiGraph::from_edges(
            4,
            [(0, 2, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)],
        )
        .unwrap();
        let sp = DijkstraSp::new(&graph, 0).unwrap();

        assert_eq!(sp.distance_to(2).unwrap(), 2.0);
        assert_eq!(sp.distance_to(3).unwrap(), 3.0);
        assert_eq!(sp.path_to(3).unwrap().unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_vertices() {
        let graph = samples::tiny_ewd().unwrap();

        assert_eq!(
            DijkstraSp::new(&graph, 8).unwrap_err(),
            Error::VertexOutOfBounds {
                vertex: 8,
                vertex_count: 8
            }
        );

        let sp = DijkstraSp::new(&graph, 0).unwrap();
        assert!(sp.distance_to(8).is_err());
        assert!(sp.path_to(8).is_err());
    }

    #[test]
    fn test_parallel_edges_use_the_lightest() {
        for weights in [[5.0, 1.0], [1.0, 5.0]] {
            let mut graph = EdgeWeightedDiGraph::new(3);
            for weight in weights {
                assert!(graph.add_edge(DirectedEdge::new(0, 1, weight)).unwrap());
            }
            graph.add_edge(DirectedEdge::new(1, 2, 1.0)).unwrap();

            let sp = DijkstraSp::new(&graph, 0).unwrap();
            assert_eq!(sp.distance_to(1).unwrap(), 1.0);
            assert_eq!(sp.distance_to(2).unwrap(), 2.0);
            assert_eq!(sp.path_to(1).unwrap(), Some(vec![DirectedEdge::new(0, 1, 1.0)]));
        }
    }

    type WeightedEdges = Vec<(Vertex, Vertex, f64)>;

    /// Random edge lists over few vertices, so repeated pairs are common.
    fn edges_strategy() -> impl Strategy<Value = (usize, WeightedEdges)> {
        (1usize..10).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0u32..100), 0..30).prop_map(|edges| {
                    edges
                        .into_iter()
                        .map(|(v, w, weight)| (v, w, f64::from(weight)))
                        .collect()
                }),
            )
        })
    }

    /// Bellman-Ford over the raw edge list, independent of graph storage.
    fn bellman_ford(n: usize, edges: &[(Vertex, Vertex, f64)]) -> Vec<f64> {
        let mut distance = vec![f64::INFINITY; n];
        distance[0] = 0.0;
        for _ in 0..n {
            for &(v, w, weight) in edges {
                let through = distance[v] + weight;
                if through < distance[w] {
                    distance[w] = through;
                }
            }
        }
        distance
    }

    proptest! {
        #[test]
        fn distances_match_bellman_ford((n, edges) in edges_strategy()) {
            let graph = EdgeWeightedDiGraph::from_edges(n, edges.iter().copied()).unwrap();
            let expected = bellman_ford(n, &edges);

            let sp = DijkstraSp::new(&graph, 0).unwrap();
            for v in 0..n {
                prop_assert_eq!(sp.distance_to(v).unwrap(), expected[v]);

                if let Some(path) = sp.path_to(v).unwrap() {
                    let total: f64 = path.iter().map(DirectedEdge::weight).sum();
                    prop_assert_eq!(total, expected[v]);
                    if let Some(last) = path.last() {
                        prop_assert_eq!(last.to(), v);
                    }
                }
            }
        }
    }
}
