//! # arbor-algorithms
//!
//! Algorithms layer for Arbor. Every algorithm runs to completion when it is
//! constructed and the resulting value answers queries afterwards; graphs are
//! only ever borrowed immutably.
//!
//! ## Modules
//!
//! - [`traits`] - Query traits shared by several results
//! - [`traversal`] - Depth-first and breadth-first search
//! - [`topological`] - Reverse postorder of a directed graph
//! - [`components`] - Connected and strongly connected components
//! - [`shortest_path`] - Dijkstra's single-source shortest paths
//! - [`mst`] - Prim's and Kruskal's minimum spanning trees

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod components;
pub mod mst;
pub mod shortest_path;
pub mod topological;
pub mod traits;
pub mod traversal;

pub use components::{ConnectedComponents, StronglyConnectedComponents};
pub use mst::{KruskalMst, PrimConfig, PrimMst};
pub use shortest_path::DijkstraSp;
pub use topological::{TopologicalSort, topological_order};
pub use traits::{Components, Paths, SpanningTree};
pub use traversal::{BreadthFirstSearch, DepthFirstSearch};
