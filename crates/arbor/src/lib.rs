//! # Arbor
//!
//! Classic graph algorithms over small in-memory graphs.
//!
//! Build one of the four graph types, then construct an algorithm against
//! it. Every algorithm runs to completion when constructed and answers
//! queries afterwards.
//!
//! | Graph | Algorithms |
//! | ----- | ---------- |
//! | [`UndirectedGraph`] | [`DepthFirstSearch`], [`BreadthFirstSearch`], [`ConnectedComponents`] |
//! | [`DiGraph`] | [`DepthFirstSearch`], [`BreadthFirstSearch`], [`TopologicalSort`], [`StronglyConnectedComponents`] |
//! | [`EdgeWeightedDiGraph`] | [`DijkstraSp`] |
//! | [`EdgeWeightedGraph`] | [`PrimMst`], [`KruskalMst`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor::{BreadthFirstSearch, Components, ConnectedComponents, Paths, UndirectedGraph};
//!
//! let mut graph = UndirectedGraph::new(4);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//!
//! let bfs = BreadthFirstSearch::new(&graph, 0)?;
//! assert_eq!(bfs.display_path_to(2)?, "0 -> 1 -> 2");
//!
//! let cc = ConnectedComponents::new(&graph)?;
//! assert_eq!(cc.count(), 2);
//! # Ok::<(), arbor::Error>(())
//! ```

// Graph representations and their building blocks
pub use arbor_core::graph::{
    DiGraph, DirectedEdge, Edge, EdgeKey, EdgeWeightedDiGraph, EdgeWeightedGraph, Graph,
    GraphConfig, UndirectedGraph,
};
pub use arbor_core::index::heap::{HeapConfig, IndexedHeap, Polarity};
pub use arbor_core::index::union_find::UnionFind;
pub use arbor_core::samples;

// Algorithms and the traits their results answer through
pub use arbor_algorithms::{
    BreadthFirstSearch, Components, ConnectedComponents, DepthFirstSearch, DijkstraSp,
    KruskalMst, Paths, PrimConfig, PrimMst, SpanningTree, StronglyConnectedComponents,
    TopologicalSort, topological_order,
};

// Errors and vertex type
pub use arbor_common::types::Vertex;
pub use arbor_common::utils::error::{Error, Result};
