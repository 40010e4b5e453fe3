//! Weighted edges.
//!
//! An [`Edge`] is an unordered pair of vertices with a weight. Its endpoints
//! are named by the normalized [`EdgeKey`], so `0 -- 1` and `1 -- 0` join the
//! same pair. A [`DirectedEdge`] is an ordered `(from, to, weight)` triple.
//!
//! A stored edge is identified by its endpoints together with the exact bits
//! of its weight. Parallel edges with different weights are therefore
//! distinct, and only a repeat of the very same edge is dropped.
//!
//! Both types order by weight first (what the heaps in MST and shortest-path
//! code care about) and break ties on their endpoints so that `Ord` agrees
//! with `Eq`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use arbor_common::types::Vertex;
use arbor_common::utils::error::{Error, Result};

use crate::index::adjacency::AdjacencyEntry;

/// Order-independent identity of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    low: Vertex,
    high: Vertex,
}

impl EdgeKey {
    /// Creates the key for the edge between `v` and `w`, in either order.
    #[must_use]
    pub fn new(v: Vertex, w: Vertex) -> Self {
        Self {
            low: v.min(w),
            high: v.max(w),
        }
    }

    /// The smaller endpoint.
    #[must_use]
    pub const fn low(&self) -> Vertex {
        self.low
    }

    /// The larger endpoint.
    #[must_use]
    pub const fn high(&self) -> Vertex {
        self.high
    }
}

/// An undirected weighted edge.
///
/// Weights are expected to be finite; algorithms that also need them to be
/// non-negative say so.
///
/// `==` holds when two edges join the same endpoints, in either order, with
/// the same weight. Compare [`Edge::key`] to ask only whether they join the
/// same endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    v: Vertex,
    w: Vertex,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `v` and `w`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfLoop`] if `v == w`.
    pub fn new(v: Vertex, w: Vertex, weight: f64) -> Result<Self> {
        if v == w {
            return Err(Error::SelfLoop(v));
        }
        Ok(Self { v, w, weight })
    }

    /// Returns one of the endpoints.
    #[must_use]
    pub const fn either(&self) -> Vertex {
        self.v
    }

    /// Returns the endpoint opposite to `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnEndpoint`] if `vertex` is not on this edge.
    pub fn other(&self, vertex: Vertex) -> Result<Vertex> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            Err(Error::NotAnEndpoint {
                vertex,
                v: self.v,
                w: self.w,
            })
        }
    }

    /// Returns both endpoints as `(either, other)`.
    #[must_use]
    pub const fn endpoints(&self) -> (Vertex, Vertex) {
        (self.v, self.w)
    }

    /// Returns the weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the order-independent pair of endpoints.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.v, self.w)
    }
}

impl AdjacencyEntry for Edge {
    type Key = (EdgeKey, u64);

    fn key(&self) -> (EdgeKey, u64) {
        (Edge::key(self), self.weight.to_bits())
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.key().cmp(&other.key()))
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} ({})", self.v, self.w, self.weight)
    }
}

/// A directed weighted edge `from -> to`.
#[derive(Debug, Clone, Copy)]
pub struct DirectedEdge {
    from: Vertex,
    to: Vertex,
    weight: f64,
}

impl DirectedEdge {
    /// Creates an edge pointing from `from` to `to`.
    #[must_use]
    pub const fn new(from: Vertex, to: Vertex, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Tail of the edge.
    #[must_use]
    pub const fn from(&self) -> Vertex {
        self.from
    }

    /// Head of the edge.
    #[must_use]
    pub const fn to(&self) -> Vertex {
        self.to
    }

    /// Returns the weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the same edge pointing the other way.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }
}

impl AdjacencyEntry for DirectedEdge {
    type Key = (Vertex, Vertex, u64);

    fn key(&self) -> (Vertex, Vertex, u64) {
        (self.from, self.to, self.weight.to_bits())
    }
}

impl PartialEq for DirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DirectedEdge {}

impl PartialOrd for DirectedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DirectedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| (self.from, self.to).cmp(&(other.from, other.to)))
    }
}

impl Hash for DirectedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}
