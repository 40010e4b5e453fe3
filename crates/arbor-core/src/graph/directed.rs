//! Unweighted directed graph.

use std::fmt;

use arbor_common::types::Vertex;
use arbor_common::utils::error::Result;

use super::{Graph, GraphConfig};
use crate::index::adjacency::{Adjacency, Neighbors};

/// A directed graph over the vertices `[0, V)`.
#[derive(Debug, Clone)]
pub struct DiGraph {
    adjacency: Adjacency<Vertex>,
}

impl DiGraph {
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

    /// Builds a graph from a list of `(from, to)` pairs.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (Vertex, Vertex)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Adds the edge `v -> w`.
    ///
    /// Returns `false` if the edge was already present.
    ///
    /// # Errors
    ///
    /// Fails without modifying the graph if either vertex is out of bounds.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex) -> Result<bool> {
        self.adjacency.check(w)?;
        self.adjacency.insert(v, w)
    }

    /// Returns whether the edge `v -> w` exists.
    pub fn has_edge(&self, v: Vertex, w: Vertex) -> Result<bool> {
        self.adjacency.check(w)?;
        self.adjacency.contains(v, &w)
    }

    /// Returns a new graph with every edge pointing the other way.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());
        for (v, &w) in self.adjacency.iter() {
            reversed.adjacency.insert_unchecked(w, v);
        }
        reversed
    }
}

impl Graph for DiGraph {
    type Neighbors<'a> = Neighbors<'a>;

    fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.entry_count()
    }

    fn adjacent(&self, v: Vertex) -> Result<Neighbors<'_>> {
        self.adjacency.neighbors(v)
    }

    /// Out-degree of `v`.
    fn degree(&self, v: Vertex) -> Result<usize> {
        self.adjacency.degree(v)
    }
}

impl fmt::Display for DiGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- DiGraph -----")?;
        for (v, w) in self.adjacency.iter() {
            writeln!(f, "\t{v} -> {w}")?;
        }
        writeln!(f, "-------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_insert() {
        let mut g = DiGraph::new(3);
        g.add_edge(0, 1).unwrap();

        assert!(g.has_edge(0, 1).unwrap());
        assert!(!g.has_edge(1, 0).unwrap());
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(1).unwrap(), 0);
    }

    #[test]
    fn test_both_endpoints_validated() {
        let mut g = DiGraph::new(2);

        assert!(g.add_edge(0, 2).is_err());
        assert!(g.add_edge(2, 0).is_err());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_reverse() {
        let g = DiGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (3, 3)]).unwrap();
        let r = g.reverse();

        assert_eq!(r.vertex_count(), 4);
        assert_eq!(r.edge_count(), g.edge_count());
        assert!(r.has_edge(1, 0).unwrap());
        assert!(r.has_edge(2, 1).unwrap());
        assert!(r.has_edge(0, 2).unwrap());
        assert!(r.has_edge(3, 3).unwrap());
        assert!(!r.has_edge(0, 1).unwrap());
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let g = DiGraph::from_edges(5, [(0, 4), (4, 2), (2, 3), (3, 0), (1, 0)]).unwrap();
        let rr = g.reverse().reverse();

        for v in 0..g.vertex_count() {
            let mut a: Vec<_> = g.adjacent(v).unwrap().collect();
            let mut b: Vec<_> = rr.adjacent(v).unwrap().collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_debug_dump() {
        let g = DiGraph::from_edges(3, [(0, 1), (2, 0)]).unwrap();

        assert_eq!(
            g.to_string(),
            "----- DiGraph -----\n\t0 -> 1\n\t2 -> 0\n-------------------\n"
        );
    }
}
