//! Error types for Arbor.
//!
//! Every fallible operation in the workspace returns [`Result`]. Errors are
//! local to the call that raised them: nothing is retried and no graph or
//! heap is left partially mutated.

use thiserror::Error;

/// Result type alias used throughout Arbor.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by graph construction and algorithm queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of bounds for {vertex_count} vertices")]
    VertexOutOfBounds {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the structure that rejected it.
        vertex_count: usize,
    },

    /// An undirected weighted edge was built with both ends on the same vertex.
    #[error("self loop on vertex {0} is not allowed")]
    SelfLoop(usize),

    /// A vertex was asked for its opposite end on an edge it does not touch.
    #[error("vertex {vertex} is not an endpoint of edge {v} -- {w}")]
    NotAnEndpoint {
        /// The vertex that was queried.
        vertex: usize,
        /// First endpoint of the edge.
        v: usize,
        /// Second endpoint of the edge.
        w: usize,
    },
}
