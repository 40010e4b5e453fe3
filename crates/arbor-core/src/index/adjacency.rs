//! Per-vertex adjacency sets.
//!
//! This is the edge storage shared by every graph representation:
//! - O(1) amortized insertion with duplicate suppression
//! - Insertion-ordered iteration, so traversals are reproducible
//! - Append-only: entries are never removed once inserted

use arbor_common::types::{Vertex, check_vertex};
use arbor_common::utils::error::Result;
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// Default per-vertex capacity.
pub const DEFAULT_ADJACENCY_CAPACITY: usize = 4;

/// Something that can be stored in an adjacency list.
///
/// The key decides identity: a second entry with an equal key is ignored.
pub trait AdjacencyEntry: Clone {
    /// Identity of the entry within one vertex's list.
    type Key: Copy + Eq + Hash + fmt::Debug;

    /// Returns the identity key of this entry.
    fn key(&self) -> Self::Key;
}

impl AdjacencyEntry for Vertex {
    type Key = Vertex;

    fn key(&self) -> Vertex {
        *self
    }
}

type AdjacencyList<T> = IndexMap<<T as AdjacencyEntry>::Key, T, ahash::RandomState>;

/// Iterator over the entries adjacent to one vertex.
pub type Entries<'a, T> = indexmap::map::Values<'a, <T as AdjacencyEntry>::Key, T>;

/// Iterator over the neighbors of one vertex in an unweighted graph.
pub type Neighbors<'a> = std::iter::Copied<Entries<'a, Vertex>>;

/// Fixed-size table of adjacency sets, one per vertex.
#[derive(Debug, Clone)]
pub struct Adjacency<T: AdjacencyEntry> {
    /// Adjacency lists indexed by vertex.
    lists: Vec<AdjacencyList<T>>,
    /// Total number of stored entries across all lists.
    entry_count: usize,
}

impl<T: AdjacencyEntry> Adjacency<T> {
    /// Creates empty adjacency sets for `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, DEFAULT_ADJACENCY_CAPACITY)
    }

    /// Creates empty adjacency sets, reserving `capacity` entries per vertex.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, capacity: usize) -> Self {
        let lists = (0..vertex_count)
            .map(|_| IndexMap::with_capacity_and_hasher(capacity, ahash::RandomState::new()))
            .collect();
        Self {
            lists,
            entry_count: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Validates a vertex index against this table.
    pub fn check(&self, v: Vertex) -> Result<()> {
        check_vertex(v, self.lists.len())
    }

    /// Adds `entry` to the list of `v`.
    ///
    /// Returns `false` if an entry with the same key was already present, in
    /// which case the existing entry is kept.
    pub fn insert(&mut self, v: Vertex, entry: T) -> Result<bool> {
        self.check(v)?;
        Ok(self.insert_unchecked(v, entry))
    }

    /// Adds `entry` to the list of a vertex already known to be in range.
    pub(crate) fn insert_unchecked(&mut self, v: Vertex, entry: T) -> bool {
        let list = &mut self.lists[v];
        let key = entry.key();
        if list.contains_key(&key) {
            return false;
        }
        list.insert(key, entry);
        self.entry_count += 1;
        true
    }

    /// Returns whether the list of `v` holds an entry with `key`.
    pub fn contains(&self, v: Vertex, key: &T::Key) -> Result<bool> {
        self.check(v)?;
        Ok(self.lists[v].contains_key(key))
    }

    /// Returns the entries adjacent to `v` in insertion order.
    pub fn entries(&self, v: Vertex) -> Result<Entries<'_, T>> {
        self.check(v)?;
        Ok(self.lists[v].values())
    }

    /// Returns the number of entries adjacent to `v`.
    pub fn degree(&self, v: Vertex) -> Result<usize> {
        self.check(v)?;
        Ok(self.lists[v].len())
    }

    /// Returns the total number of entries over all vertices.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Iterates over every `(vertex, entry)` pair, vertex by vertex.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, &T)> + '_ {
        self.lists
            .iter()
            .enumerate()
            .flat_map(|(v, list)| list.values().map(move |entry| (v, entry)))
    }
}

impl Adjacency<Vertex> {
    /// Returns the neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: Vertex) -> Result<Neighbors<'_>> {
        Ok(self.entries(v)?.copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::Error;

    #[test]
    fn test_basic_adjacency() {
        let mut adj = Adjacency::<Vertex>::new(4);

        adj.insert(0, 1).unwrap();
        adj.insert(0, 2).unwrap();
        adj.insert(0, 3).unwrap();

        let neighbors: Vec<_> = adj.neighbors(0).unwrap().collect();
        assert_eq!(neighbors, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let mut adj = Adjacency::<Vertex>::new(3);

        assert!(adj.insert(0, 1).unwrap());
        assert!(!adj.insert(0, 1).unwrap());

        assert_eq!(adj.degree(0).unwrap(), 1);
        assert_eq!(adj.entry_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut adj = Adjacency::<Vertex>::new(2);

        assert_eq!(
            adj.insert(2, 0),
            Err(Error::VertexOutOfBounds {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert!(adj.entries(5).is_err());
        assert!(adj.degree(2).is_err());
        assert_eq!(adj.entry_count(), 0);
    }

    #[test]
    fn test_iter_all() {
        let mut adj = Adjacency::<Vertex>::new(3);

        adj.insert(2, 0).unwrap();
        adj.insert(0, 1).unwrap();
        adj.insert(0, 2).unwrap();

        let pairs: Vec<_> = adj.iter().map(|(v, w)| (v, *w)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (2, 0)]);
    }

    #[test]
    fn test_contains() {
        let mut adj = Adjacency::<Vertex>::new(3);
        adj.insert(1, 2).unwrap();

        assert!(adj.contains(1, &2).unwrap());
        assert!(!adj.contains(1, &0).unwrap());
        assert!(adj.contains(3, &0).is_err());
    }

    #[test]
    fn test_debug_output_for_edge_lists() {
        use crate::graph::{DirectedEdge, Edge};

        let mut directed = Adjacency::<DirectedEdge>::new(2);
        directed.insert(0, DirectedEdge::new(0, 1, 0.5)).unwrap();
        assert!(format!("{directed:?}").contains("entry_count: 1"));

        let mut undirected = Adjacency::<Edge>::new(2);
        undirected.insert(1, Edge::new(1, 0, 0.5).unwrap()).unwrap();
        assert!(format!("{undirected:?}").contains("entry_count: 1"));
    }
}
