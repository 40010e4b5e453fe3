//! Depth-first and breadth-first search from a single source.
//!
//! Both engines work on anything implementing [`Graph`], so the same code
//! walks directed and undirected graphs. Each search runs eagerly inside its
//! constructor and records, for every reached vertex, the vertex it was
//! discovered from. Paths are rebuilt by following those links backwards.
//!
//! Depth-first search never recurses. [`depth_first`] keeps an explicit stack
//! of `(vertex, neighbor cursor)` frames, so deep graphs cannot overflow the
//! call stack, while discovery order and finish order stay exactly those of
//! the textbook recursive version.

use std::collections::VecDeque;

use arbor_common::types::{Vertex, check_vertex};
use arbor_common::utils::error::Result;
use arbor_core::graph::Graph;
use tracing::debug;

use crate::traits::Paths;

/// Walks every vertex reachable from `source` that is not yet marked.
///
/// `source` is marked on entry. `on_discover(v, w)` fires when `w` is first
/// reached along the edge `v -> w`, before any of `w`'s neighbors are looked
/// at. `on_finish(v)` fires once all of `v`'s neighbors are exhausted, so the
/// sequence of finished vertices is a postorder.
pub(crate) fn depth_first<G, D, F>(
    graph: &G,
    source: Vertex,
    marked: &mut [bool],
    mut on_discover: D,
    mut on_finish: F,
) -> Result<()>
where
    G: Graph,
    D: FnMut(Vertex, Vertex),
    F: FnMut(Vertex),
{
    marked[source] = true;
    let mut stack = vec![(source, graph.adjacent(source)?)];

    while let Some((v, neighbors)) = stack.last_mut() {
        let v = *v;
        match neighbors.find(|&w| !marked[w]) {
            Some(w) => {
                marked[w] = true;
                on_discover(v, w);
                stack.push((w, graph.adjacent(w)?));
            }
            None => {
                stack.pop();
                on_finish(v);
            }
        }
    }

    Ok(())
}

/// Reachability state shared by both search orders.
#[derive(Debug, Clone)]
struct SearchTree {
    source: Vertex,
    marked: Vec<bool>,
    edge_to: Vec<Option<Vertex>>,
}

impl SearchTree {
    fn new(vertex_count: usize, source: Vertex) -> Result<Self> {
        check_vertex(source, vertex_count)?;
        Ok(Self {
            source,
            marked: vec![false; vertex_count],
            edge_to: vec![None; vertex_count],
        })
    }

    fn reached(&self) -> usize {
        self.marked.iter().filter(|&&m| m).count()
    }

    fn has_path_to(&self, v: Vertex) -> Result<bool> {
        check_vertex(v, self.marked.len())?;
        Ok(self.marked[v])
    }

    fn path_to(&self, v: Vertex) -> Result<Option<Vec<Vertex>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }

        let mut path = vec![v];
        let mut current = v;
        while let Some(previous) = self.edge_to[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Ok(Some(path))
    }
}

/// Depth-first search from a single source.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    tree: SearchTree,
}

impl DepthFirstSearch {
    /// Searches `graph` depth-first starting at `source`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfBounds` if `source` is not a vertex of
    /// `graph`.
    pub fn new<G: Graph>(graph: &G, source: Vertex) -> Result<Self> {
        let mut tree = SearchTree::new(graph.vertex_count(), source)?;

        let SearchTree {
            marked, edge_to, ..
        } = &mut tree;
        depth_first(
            graph,
            source,
            marked,
            |v, w| edge_to[w] = Some(v),
            |_| {},
        )?;

        debug!(source, reached = tree.reached(), "depth-first search complete");
        Ok(Self { tree })
    }

    /// Returns the number of vertices reached, the source included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.tree.reached()
    }
}

impl Paths for DepthFirstSearch {
    fn source(&self) -> Vertex {
        self.tree.source
    }

    fn has_path_to(&self, v: Vertex) -> Result<bool> {
        self.tree.has_path_to(v)
    }

    fn path_to(&self, v: Vertex) -> Result<Option<Vec<Vertex>>> {
        self.tree.path_to(v)
    }
}

/// Breadth-first search from a single source.
///
/// Every path it reports uses the fewest possible edges.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    tree: SearchTree,
}

impl BreadthFirstSearch {
    /// Searches `graph` breadth-first starting at `source`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfBounds` if `source` is not a vertex of
    /// `graph`.
    pub fn new<G: Graph>(graph: &G, source: Vertex) -> Result<Self> {
        let mut tree = SearchTree::new(graph.vertex_count(), source)?;

        let mut queue = VecDeque::new();
        tree.marked[source] = true;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            for w in graph.adjacent(v)? {
                if !tree.marked[w] {
                    tree.marked[w] = true;
                    tree.edge_to[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }

        debug!(source, reached = tree.reached(), "breadth-first search complete");
        Ok(Self { tree })
    }

    /// Returns the number of vertices reached, the source included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.tree.reached()
    }
}

impl Paths for BreadthFirstSearch {
    fn source(&self) -> Vertex {
        self.tree.source
    }

    fn has_path_to(&self, v: Vertex) -> Result<bool> {
        self.tree.has_path_to(v)
    }

    fn path_to(&self, v: Vertex) -> Result<Option<Vec<Vertex>>> {
        self.tree.path_to(v)
    }
}
