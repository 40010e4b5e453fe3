//! Unweighted undirected graph.

use std::fmt;

use arbor_common::types::Vertex;
use arbor_common::utils::error::Result;

use super::{Graph, GraphConfig};
use crate::index::adjacency::{Adjacency, Neighbors};

/// An undirected graph over the vertices `[0, V)`.
///
/// Every edge is stored at both endpoints, so `w` is adjacent to `v` exactly
/// when `v` is adjacent to `w`. Parallel edges collapse into one.
#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    adjacency: Adjacency<Vertex>,
    edge_count: usize,
}

impl UndirectedGraph {
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

    /// Builds a graph from a list of vertex pairs.
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

    /// Connects `v` and `w`.
    ///
    /// Returns `false` if they were already connected.
    ///
    /// # Errors
    ///
    /// Fails without modifying the graph if either vertex is out of bounds.
    pub fn add_edge(&mut self, v: Vertex, w: Vertex) -> Result<bool> {
        self.adjacency.check(v)?;
        self.adjacency.check(w)?;

        let added = self.adjacency.insert_unchecked(v, w);
        if v != w {
            self.adjacency.insert_unchecked(w, v);
        }
        if added {
            self.edge_count += 1;
        }
        Ok(added)
    }

    /// Returns whether `v` and `w` are directly connected.
    pub fn has_edge(&self, v: Vertex, w: Vertex) -> Result<bool> {
        self.adjacency.check(w)?;
        self.adjacency.contains(v, &w)
    }

    /// Returns the number of self loops.
    #[must_use]
    pub fn self_loops(&self) -> usize {
        self.adjacency.iter().filter(|(v, w)| v == *w).count()
    }
}

impl Graph for UndirectedGraph {
    type Neighbors<'a> = Neighbors<'a>;

    fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn adjacent(&self, v: Vertex) -> Result<Neighbors<'_>> {
        self.adjacency.neighbors(v)
    }

    fn degree(&self, v: Vertex) -> Result<usize> {
        self.adjacency.degree(v)
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Graph -----")?;
        for (v, &w) in self.adjacency.iter() {
            if v <= w {
                writeln!(f, "\t{v} - {w}")?;
            }
        }
        writeln!(f, "-----------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::Error;

    #[test]
    fn test_symmetric_insert() {
        let mut g = UndirectedGraph::new(3);
        g.add_edge(0, 1).unwrap();

        assert!(g.has_edge(0, 1).unwrap());
        assert!(g.has_edge(1, 0).unwrap());
        assert!(!g.has_edge(0, 2).unwrap());
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(0).unwrap(), 1);
        assert_eq!(g.degree(1).unwrap(), 1);
    }

    #[test]
    fn test_reverse_duplicate_collapses() {
        let mut g = UndirectedGraph::new(2);

        assert!(g.add_edge(0, 1).unwrap());
        assert!(!g.add_edge(1, 0).unwrap());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_leaves_graph_untouched() {
        let mut g = UndirectedGraph::new(3);

        assert_eq!(
            g.add_edge(0, 3),
            Err(Error::VertexOutOfBounds {
                vertex: 3,
                vertex_count: 3
            })
        );
        assert_eq!(g.degree(0).unwrap(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.adjacent(3).is_err());
        assert!(g.degree(9).is_err());
    }

    #[test]
    fn test_self_loops() {
        let mut g = UndirectedGraph::new(3);
        g.add_edge(1, 1).unwrap();
        g.add_edge(0, 1).unwrap();

        assert_eq!(g.self_loops(), 1);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree(1).unwrap(), 2);
    }

    #[test]
    fn test_debug_dump() {
        let g = UndirectedGraph::from_edges(3, [(0, 1), (2, 1)]).unwrap();

        let dump = g.to_string();
        assert_eq!(
            dump,
            "----- Graph -----\n\t0 - 1\n\t1 - 2\n-----------------\n"
        );
    }

    #[test]
    fn test_edge_count_matches_degree_sum() {
        let g = UndirectedGraph::from_edges(5, [(0, 1), (0, 2), (1, 2), (3, 4), (2, 0)]).unwrap();

        let degree_sum: usize = (0..g.vertex_count()).map(|v| g.degree(v).unwrap()).sum();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(degree_sum, 2 * g.edge_count());
    }
}
