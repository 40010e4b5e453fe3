//! Query traits shared by algorithm results.
//!
//! Results are plain values: constructing an algorithm runs it, and these
//! traits are how callers ask questions of what it found.

use arbor_common::types::{Vertex, check_vertex};
use arbor_common::utils::error::Result;
use arbor_core::graph::Edge;

/// Single-source reachability with path reconstruction.
///
/// Implemented by the traversal engines. Paths are vertex sequences that
/// start at [`source`](Paths::source) and end at the queried vertex.
pub trait Paths {
    /// The vertex the search started from.
    fn source(&self) -> Vertex;

    /// Returns whether `v` was reached from the source.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfBounds` if `v` is not a vertex of the
    /// searched graph.
    fn has_path_to(&self, v: Vertex) -> Result<bool>;

    /// Returns the path `source -> ... -> v`, or `None` if `v` was not
    /// reached. The path to the source itself is `[source]`.
    fn path_to(&self, v: Vertex) -> Result<Option<Vec<Vertex>>>;

    /// Renders the path to `v` as `"0 -> 2 -> 4"`, or `"<no path>"`.
    fn display_path_to(&self, v: Vertex) -> Result<String> {
        Ok(match self.path_to(v)? {
            Some(path) => path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> "),
            None => "<no path>".to_string(),
        })
    }
}

/// A partition of the vertices into components.
///
/// Component ids are dense, assigned from 0 in discovery order.
pub trait Components {
    /// Returns the number of components.
    fn count(&self) -> usize;

    /// Returns the component id of every vertex, indexed by vertex.
    fn ids(&self) -> &[usize];

    /// Returns the component id of `v`.
    fn id(&self, v: Vertex) -> Result<usize> {
        let ids = self.ids();
        check_vertex(v, ids.len())?;
        Ok(ids[v])
    }

    /// Returns whether `v` and `w` are in the same component.
    fn is_connected(&self, v: Vertex, w: Vertex) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }

    /// Returns the vertices of component `id` in ascending order.
    ///
    /// An unknown id yields an empty list.
    fn members(&self, id: usize) -> Vec<Vertex> {
        self.ids()
            .iter()
            .enumerate()
            .filter(|&(_, &component)| component == id)
            .map(|(v, _)| v)
            .collect()
    }
}

/// A minimum spanning tree, or forest when the graph is disconnected.
pub trait SpanningTree {
    /// Tree edges in the order they were chosen.
    fn edges(&self) -> &[Edge];

    /// Number of vertices of the graph the tree was built from.
    fn vertex_count(&self) -> usize;

    /// Sum of the tree edge weights.
    fn weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).sum()
    }

    /// Whether the edges span every vertex, i.e. there are `V - 1` of them.
    fn is_spanning(&self) -> bool {
        self.edges().len() + 1 >= self.vertex_count()
    }
}
