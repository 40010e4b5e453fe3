//! Minimum spanning trees with Prim's and Kruskal's algorithms.
//!
//! Both run on an [`EdgeWeightedGraph`] and stop once they hold `V - 1`
//! edges or run out of candidates. On a disconnected graph the result is not
//! spanning:
//!
//! - [`PrimMst`] grows a single tree and covers only the component of its
//!   root.
//! - [`KruskalMst`] returns a minimum spanning forest.
//!
//! [`SpanningTree::is_spanning`] tells the two cases apart.

use arbor_common::types::{Vertex, check_vertex};
use arbor_common::utils::error::Result;
use arbor_core::graph::{Edge, EdgeWeightedGraph};
use arbor_core::index::heap::IndexedHeap;
use arbor_core::index::union_find::UnionFind;
use tracing::{debug, trace};

use crate::traits::SpanningTree;

/// Queued edges are their own identity, so parallel edges queue separately.
type EdgeQueue = IndexedHeap<Edge>;

/// Options for [`PrimMst`].
#[derive(Debug, Clone, Default)]
pub struct PrimConfig {
    /// Vertex the tree is grown from.
    pub root: Vertex,
}

impl PrimConfig {
    /// Creates the default configuration, rooted at vertex 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertex the tree is grown from.
    #[must_use]
    pub const fn root(mut self, root: Vertex) -> Self {
        self.root = root;
        self
    }
}

/// Minimum spanning tree grown outward from one vertex.
#[derive(Debug, Clone)]
pub struct PrimMst {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl PrimMst {
    /// Builds the tree rooted at vertex 0.
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        Self::with_config(graph, &PrimConfig::default())
    }

    /// Builds the tree with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfBounds` if the root is not a vertex of a
    /// non-empty `graph`.
    pub fn with_config(graph: &EdgeWeightedGraph, config: &PrimConfig) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
        if vertex_count == 0 {
            return Ok(Self {
                edges,
                vertex_count,
            });
        }
        check_vertex(config.root, vertex_count)?;

        let mut marked = vec![false; vertex_count];
        let mut queue = EdgeQueue::min_heap();
        visit(graph, config.root, &mut marked, &mut queue)?;

        while edges.len() < vertex_count - 1 {
            let Some(edge) = queue.remove_top() else {
                break;
            };
            let (v, w) = edge.endpoints();
            if marked[v] && marked[w] {
                continue;
            }

            trace!(%edge, "tree edge");
            edges.push(edge);
            if !marked[v] {
                visit(graph, v, &mut marked, &mut queue)?;
            }
            if !marked[w] {
                visit(graph, w, &mut marked, &mut queue)?;
            }
        }

        debug!(
            root = config.root,
            edges = edges.len(),
            "prim spanning tree complete"
        );
        Ok(Self {
            edges,
            vertex_count,
        })
    }
}

/// Marks `v` and queues every edge leading from it to an unmarked vertex.
fn visit(
    graph: &EdgeWeightedGraph,
    v: Vertex,
    marked: &mut [bool],
    queue: &mut EdgeQueue,
) -> Result<()> {
    marked[v] = true;
    for edge in graph.adjacent(v)? {
        if !marked[edge.other(v)?] {
            queue.insert(*edge);
        }
    }
    Ok(())
}

impl SpanningTree for PrimMst {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

/// Minimum spanning forest built by accepting edges in ascending weight.
#[derive(Debug, Clone)]
pub struct KruskalMst {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl KruskalMst {
    /// Builds the minimum spanning forest of `graph`.
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));

        let mut queue = EdgeQueue::min_heap();
        for edge in graph.edges() {
            queue.insert(*edge);
        }

        let mut sets = UnionFind::new(vertex_count);
        while edges.len() < vertex_count.saturating_sub(1) {
            let Some(edge) = queue.remove_top() else {
                break;
            };
            let (v, w) = edge.endpoints();
            if sets.union(v, w)? {
                trace!(%edge, "tree edge");
                edges.push(edge);
            }
        }

        debug!(
            edges = edges.len(),
            trees = sets.count(),
            "kruskal spanning forest complete"
        );
        Ok(Self {
            edges,
            vertex_count,
        })
    }
}

impl SpanningTree for KruskalMst {
    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}
