//! Edge-weighted graphs.

use std::fmt;

use arbor_common::types::Vertex;
use arbor_common::utils::error::Result;

use super::GraphConfig;
use super::edge::{DirectedEdge, Edge};
use crate::index::adjacency::{Adjacency, Entries};

/// An undirected graph whose edges carry weights.
///
/// Each edge is indexed from both endpoints. Parallel edges are kept as long
/// as their weights differ; adding an equal edge again is a no-op.
#[derive(Debug, Clone)]
pub struct EdgeWeightedGraph {
    adjacency: Adjacency<Edge>,
    edge_count: usize,
}

impl EdgeWeightedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::with_config(vertex_count, &GraphConfig::default())
    }

    /// Creates an empty graph with custom configuration.
    #[must_use]
    pub fn with_config(vertex_count: usize, config: &GraphConfig) -> Self {
        Self {
            adjacency: Adjacency::with_capacity(vertex_count, config.adjacency_capacity),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(v, w, weight)` triples.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (Vertex, Vertex, f64)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (v, w, weight) in edges {
            graph.add_edge(Edge::new(v, w, weight)?)?;
        }
        Ok(graph)
    }

    /// Adds `edge` at both of its endpoints.
    ///
    /// Returns `false` if an equal edge, same endpoints and same weight, is
    /// already present.
    ///
    /// # Errors
    ///
    /// Fails without modifying the graph if either endpoint is out of bounds.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool> {
        let (v, w) = edge.endpoints();
        self.adjacency.check(v)?;
        self.adjacency.check(w)?;

        let added = self.adjacency.insert_unchecked(v, edge);
        self.adjacency.insert_unchecked(w, edge);
        if added {
            self.edge_count += 1;
        }
        Ok(added)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the edges incident to `v`.
    pub fn adjacent(&self, v: Vertex) -> Result<Entries<'_, Edge>> {
        self.adjacency.entries(v)
    }

    /// Returns the number of edges incident to `v`.
    pub fn degree(&self, v: Vertex) -> Result<usize> {
        self.adjacency.degree(v)
    }

    /// Returns every edge exactly once.
    ///
    /// An edge is reported from its lower endpoint only, so the sequence
    /// needs no deduplication set.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .iter()
            .filter(|(v, edge)| edge.key().low() == *v)
            .map(|(_, edge)| edge)
    }
}

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- EdgeWeightedGraph -----")?;
        for edge in self.edges() {
            writeln!(f, "\t{edge}")?;
        }
        writeln!(f, "-----------------------------")
    }
}

/// A directed graph whose edges carry weights.
///
/// Parallel edges are kept as long as their weights differ; adding an equal
/// edge again is a no-op.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDiGraph {
    adjacency: Adjacency<DirectedEdge>,
}

impl EdgeWeightedDiGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::with_config(vertex_count, &GraphConfig::default())
    }

    /// Creates an empty graph with custom configuration.
    #[must_use]
    pub fn with_config(vertex_count: usize, config: &GraphConfig) -> Self {
        Self {
            adjacency: Adjacency::with_capacity(vertex_count, config.adjacency_capacity),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (Vertex, Vertex, f64)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(DirectedEdge::new(from, to, weight))?;
        }
        Ok(graph)
    }

    /// Adds `edge` to the outgoing list of its tail.
    ///
    /// Returns `false` if an edge with the same tail, head and weight is
    /// already present.
    ///
    /// # Errors
    ///
    /// Fails without modifying the graph if either endpoint is out of bounds.
    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<bool> {
        self.adjacency.check(edge.to())?;
        self.adjacency.insert(edge.from(), edge)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.entry_count()
    }

    /// Returns the edges leaving `v`.
    pub fn adjacent(&self, v: Vertex) -> Result<Entries<'_, DirectedEdge>> {
        self.adjacency.entries(v)
    }

    /// Returns the out-degree of `v`.
    pub fn degree(&self, v: Vertex) -> Result<usize> {
        self.adjacency.degree(v)
    }

    /// Returns every edge, grouped by tail vertex.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> + '_ {
        self.adjacency.iter().map(|(_, edge)| edge)
    }
}

impl fmt::Display for EdgeWeightedDiGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- EdgeWeightedDiGraph -----")?;
        for edge in self.edges() {
            writeln!(f, "\t{edge}")?;
        }
        writeln!(f, "-------------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::Error;

    #[test]
    fn test_weighted_symmetric() {
        let mut g = EdgeWeightedGraph::new(4);
        g.add_edge(Edge::new(0, 1, 0.5).unwrap()).unwrap();
        g.add_edge(Edge::new(1, 2, 0.25).unwrap()).unwrap();

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree(1).unwrap(), 2);
        assert_eq!(g.degree(3).unwrap(), 0);

        let from_zero: Vec<_> = g.adjacent(0).unwrap().collect();
        assert_eq!(from_zero.len(), 1);
        assert_eq!(from_zero[0].other(0).unwrap(), 1);
    }

    #[test]
    fn test_edges_are_deduplicated() {
        let g = EdgeWeightedGraph::from_edges(
            4,
            [(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0), (3, 2, 4.0)],
        )
        .unwrap();

        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(g.edges().count(), g.edge_count());

        let total: f64 = g.edges().map(Edge::weight).sum();
        assert_eq!(total, 10.0);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut g = EdgeWeightedGraph::new(2);

        assert!(g.add_edge(Edge::new(0, 1, 9.0).unwrap()).unwrap());
        assert!(g.add_edge(Edge::new(1, 0, 1.0).unwrap()).unwrap());
        assert!(!g.add_edge(Edge::new(1, 0, 9.0).unwrap()).unwrap());

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree(0).unwrap(), 2);
        assert_eq!(g.degree(1).unwrap(), 2);
        let weights: Vec<_> = g.edges().map(Edge::weight).collect();
        assert_eq!(weights, vec![9.0, 1.0]);
    }

    #[test]
    fn test_weighted_out_of_bounds() {
        let mut g = EdgeWeightedGraph::new(2);

        assert_eq!(
            g.add_edge(Edge::new(0, 5, 1.0).unwrap()),
            Err(Error::VertexOutOfBounds {
                vertex: 5,
                vertex_count: 2
            })
        );
        assert_eq!(g.degree(0).unwrap(), 0);
        assert!(EdgeWeightedGraph::from_edges(2, [(1, 1, 1.0)]).is_err());
    }

    #[test]
    fn test_weighted_digraph() {
        let mut g = EdgeWeightedDiGraph::new(3);
        g.add_edge(DirectedEdge::new(0, 1, 1.5)).unwrap();
        g.add_edge(DirectedEdge::new(1, 0, 2.5)).unwrap();
        g.add_edge(DirectedEdge::new(1, 2, 0.5)).unwrap();

        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree(1).unwrap(), 2);
        assert_eq!(g.degree(2).unwrap(), 0);
        assert!(g.add_edge(DirectedEdge::new(2, 3, 1.0)).is_err());
        assert!(g.add_edge(DirectedEdge::new(3, 2, 1.0)).is_err());
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_parallel_directed_edges_are_kept() {
        for weights in [[5.0, 1.0], [1.0, 5.0]] {
            let mut g = EdgeWeightedDiGraph::new(2);
            for weight in weights {
                assert!(g.add_edge(DirectedEdge::new(0, 1, weight)).unwrap());
            }
            assert!(!g.add_edge(DirectedEdge::new(0, 1, 5.0)).unwrap());

            assert_eq!(g.edge_count(), 2);
            assert_eq!(g.degree(0).unwrap(), 2);
            let stored: Vec<_> = g.adjacent(0).unwrap().map(DirectedEdge::weight).collect();
            assert_eq!(stored, weights);
        }
    }

    #[test]
    fn test_debug_dumps() {
        let g = EdgeWeightedGraph::from_edges(3, [(0, 1, 0.5)]).unwrap();
        assert_eq!(
            g.to_string(),
            "----- EdgeWeightedGraph -----\n\t0 -- 1 (0.5)\n-----------------------------\n"
        );

        let d = EdgeWeightedDiGraph::from_edges(3, [(2, 1, 0.25)]).unwrap();
        assert_eq!(
            d.to_string(),
            "----- EdgeWeightedDiGraph -----\n\t2 -> 1 (0.25)\n-------------------------------\n"
        );
    }
}
