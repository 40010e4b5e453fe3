//! Graph representations.
//!
//! Four variants share one storage scheme (see
//! [`Adjacency`](crate::index::adjacency::Adjacency)):
//!
//! | Type | Edges | Adjacency yields |
//! |------|-------|------------------|
//! | [`UndirectedGraph`] | unweighted, symmetric | neighbor vertices |
//! | [`DiGraph`] | unweighted, directed | successor vertices |
//! | [`EdgeWeightedGraph`] | [`Edge`], symmetric | incident edges |
//! | [`EdgeWeightedDiGraph`] | [`DirectedEdge`] | outgoing edges |
//!
//! The vertex count is fixed at construction. Edges can only be added, never
//! removed, and adding an edge that is already present is a no-op.

mod directed;
mod edge;
mod undirected;
mod weighted;

pub use directed::DiGraph;
pub use edge::{DirectedEdge, Edge, EdgeKey};
pub use undirected::UndirectedGraph;
pub use weighted::{EdgeWeightedDiGraph, EdgeWeightedGraph};

use arbor_common::types::Vertex;
use arbor_common::utils::error::Result;

use crate::index::adjacency::DEFAULT_ADJACENCY_CAPACITY;

/// Read access shared by the unweighted graphs.
///
/// Traversals are written against this trait so that the same depth-first
/// and breadth-first engines serve both directed and undirected graphs.
pub trait Graph {
    /// Iterator over the neighbors of a vertex.
    type Neighbors<'a>: Iterator<Item = Vertex>
    where
        Self: 'a;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns the vertices adjacent to `v`.
    fn adjacent(&self, v: Vertex) -> Result<Self::Neighbors<'_>>;

    /// Returns the number of vertices adjacent to `v`.
    fn degree(&self, v: Vertex) -> Result<usize>;
}

/// Construction options shared by all graph types.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Number of adjacency slots reserved up front for every vertex.
    pub adjacency_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            adjacency_capacity: DEFAULT_ADJACENCY_CAPACITY,
        }
    }
}

impl GraphConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-vertex adjacency capacity.
    #[must_use]
    pub const fn adjacency_capacity(mut self, capacity: usize) -> Self {
        self.adjacency_capacity = capacity;
        self
    }
}
