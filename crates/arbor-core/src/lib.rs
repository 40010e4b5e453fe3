//! # arbor-core
//!
//! Core layer for Arbor: graph representations and the index structures the
//! algorithms are built on.
//!
//! This crate depends only on `arbor-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Undirected, directed, and edge-weighted graphs
//! - [`index`] - Adjacency sets, indexed binary heap, union-find
//! - [`samples`] - Small fixture graphs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod index;
pub mod samples;

// Re-export commonly used types
pub use graph::{
    DiGraph, DirectedEdge, Edge, EdgeKey, EdgeWeightedDiGraph, EdgeWeightedGraph, Graph,
    GraphConfig, UndirectedGraph,
};
pub use index::heap::{HeapConfig, IndexedHeap, Polarity};
pub use index::union_find::UnionFind;
