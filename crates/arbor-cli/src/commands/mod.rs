//! CLI command implementations.

pub mod components;
pub mod dump;
pub mod mst;
pub mod samples;
pub mod shortest_path;
pub mod topo;
pub mod traverse;
