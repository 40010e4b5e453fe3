//! Union-Find (disjoint set) structure.
//!
//! Tracks a partition of `[0, n)` under `union` operations:
//! - `find(p)`: representative of the set holding `p`
//! - `union(p, q)`: merge the sets holding `p` and `q`
//!
//! Uses path halving and union by rank for near O(1) amortized operations.

use arbor_common::types::{Vertex, check_vertex};
use arbor_common::utils::error::Result;

/// Disjoint sets over the elements `[0, n)`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointers (`parent[i] == i` for roots).
    parent: Vec<Vertex>,
    /// Upper bound on tree height, only meaningful at roots.
    rank: Vec<u32>,
    /// Number of disjoint sets.
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no elements at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the set holding `p`.
    ///
    /// Every node on the walk is re-pointed at its grandparent, so repeated
    /// lookups flatten the tree.
    pub fn find(&mut self, p: Vertex) -> Result<Vertex> {
        check_vertex(p, self.parent.len())?;

        let mut p = p;
        while p != self.parent[p] {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        Ok(p)
    }

    /// Merges the sets holding `p` and `q`.
    ///
    /// Returns `true` if a merge happened, `false` if they already shared a
    /// set. On equal ranks `q`'s root goes under `p`'s root.
    pub fn union(&mut self, p: Vertex, q: Vertex) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q {
            return Ok(false);
        }

        match self.rank[root_p].cmp(&self.rank[root_q]) {
            std::cmp::Ordering::Less => self.parent[root_p] = root_q,
            std::cmp::Ordering::Greater => self.parent[root_q] = root_p,
            std::cmp::Ordering::Equal => {
                self.parent[root_q] = root_p;
                self.rank[root_p] += 1;
            }
        }

        self.count -= 1;
        Ok(true)
    }

    /// Whether `p` and `q` are in the same set.
    pub fn connected(&mut self, p: Vertex, q: Vertex) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }
}
