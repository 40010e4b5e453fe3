//! Index structures backing the graphs and algorithms.
//!
//! - [`adjacency`] - Per-vertex adjacency sets
//! - [`heap`] - Indexed binary heap with in-place priority update
//! - [`union_find`] - Disjoint sets with path compression and union by rank

pub mod adjacency;
pub mod heap;
pub mod union_find;
