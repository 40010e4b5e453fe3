//! Indexed binary heap.
//!
//! A growable binary heap with a fixed polarity (min or max) and a position
//! index mapping each element's identity key to its slot. The index is what
//! lets shortest-path and spanning-tree code ask "is this vertex queued?" and
//! lower its priority in place:
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `insert` | O(log n) |
//! | `remove_top` | O(log n) |
//! | `contains` | O(1) |
//! | `update` | O(log n) |
//!
//! Ordering and identity are separate relations. Elements are positioned by
//! their `Ord` implementation and recognised by their key, so a queue entry
//! like "vertex 3 at distance 0.7" can be ordered by distance while being the
//! same entry as "vertex 3 at distance 0.4".
//!
//! Every structural operation re-checks the heap invariant in debug builds.

use std::fmt;
use std::hash::Hash;

use arbor_common::utils::hash::{FastHashMap, map_with_capacity};

/// Default number of slots reserved by a new heap.
pub const DEFAULT_HEAP_CAPACITY: usize = 16;

/// Which end of the ordering sits at the top of the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Every parent is no greater than its children.
    Min,
    /// Every parent is no smaller than its children.
    Max,
}

/// Construction options for [`IndexedHeap`].
#[derive(Debug, Clone)]
pub struct HeapConfig {
    /// Slots reserved up front.
    pub initial_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_HEAP_CAPACITY,
        }
    }
}

impl HeapConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of slots reserved up front.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

/// A binary heap with identity-based lookup and update.
///
/// `K` is the identity key extracted from each element. Use
/// [`IndexedHeap::min_heap`] / [`IndexedHeap::max_heap`] when an element is
/// its own identity, and the `_by_key` constructors otherwise.
#[derive(Clone)]
pub struct IndexedHeap<T, K = T> {
    /// Complete binary tree in level order.
    items: Vec<T>,
    /// Identity key to slot in `items`.
    positions: FastHashMap<K, usize>,
    /// Fixed at construction.
    polarity: Polarity,
    /// Extracts the identity key of an element.
    key_of: fn(&T) -> K,
}

impl<T> IndexedHeap<T, T>
where
    T: Ord + Clone + Eq + Hash,
{
    /// Creates an empty min heap where each element is its own identity.
    #[must_use]
    pub fn min_heap() -> Self {
        Self::min_heap_by_key(T::clone)
    }

    /// Creates an empty max heap where each element is its own identity.
    #[must_use]
    pub fn max_heap() -> Self {
        Self::max_heap_by_key(T::clone)
    }
}

impl<T, K> IndexedHeap<T, K>
where
    T: Ord,
    K: Eq + Hash,
{
    /// Creates an empty min heap identifying elements with `key_of`.
    #[must_use]
    pub fn min_heap_by_key(key_of: fn(&T) -> K) -> Self {
        Self::with_config(Polarity::Min, key_of, &HeapConfig::default())
    }

    /// Creates an empty max heap identifying elements with `key_of`.
    #[must_use]
    pub fn max_heap_by_key(key_of: fn(&T) -> K) -> Self {
        Self::with_config(Polarity::Max, key_of, &HeapConfig::default())
    }

    /// Creates an empty heap with custom configuration.
    #[must_use]
    pub fn with_config(polarity: Polarity, key_of: fn(&T) -> K, config: &HeapConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.initial_capacity),
            positions: map_with_capacity(config.initial_capacity),
            polarity,
            key_of,
        }
    }

    /// Returns the polarity chosen at construction.
    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the top element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Adds `item` to the heap.
    ///
    /// If an element with the same identity is already queued, it is replaced
    /// as by [`update`](Self::update).
    pub fn insert(&mut self, item: T) {
        let key = (self.key_of)(&item);
        if let Some(&slot) = self.positions.get(&key) {
            self.replace_at(slot, item);
            return;
        }

        let slot = self.items.len();
        self.items.push(item);
        self.positions.insert(key, slot);
        self.promote(slot);

        debug_assert!(self.is_valid());
    }

    /// Removes and returns the top element, or `None` when empty.
    pub fn remove_top(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.swap(0, last);
        let top = self.items.pop()?;
        self.positions.remove(&(self.key_of)(&top));

        if !self.items.is_empty() {
            self.demote(0);
        }

        debug_assert!(self.is_valid());
        Some(top)
    }

    /// Returns whether an element with the same identity as `item` is queued.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.contains_key(&(self.key_of)(item))
    }

    /// Returns whether an element with identity `key` is queued.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Replaces the queued element sharing `item`'s identity and restores
    /// heap order.
    ///
    /// Returns `false`, leaving the heap untouched, if no such element exists.
    pub fn update(&mut self, item: T) -> bool {
        match self.positions.get(&(self.key_of)(&item)) {
            Some(&slot) => {
                self.replace_at(slot, item);
                true
            }
            None => false,
        }
    }

    /// Checks that every parent is ordered correctly relative to its children.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|child| !self.precedes(child, parent_of(child)))
    }

    /// Consumes the heap, returning elements in top-first order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.remove_top() {
            sorted.push(item);
        }
        sorted
    }

    fn replace_at(&mut self, slot: usize, item: T) {
        self.items[slot] = item;
        if self.promote(slot) == slot {
            self.demote(slot);
        }

        debug_assert!(self.is_valid());
    }

    /// Whether the element at `i` belongs above the element at `j`.
    fn precedes(&self, i: usize, j: usize) -> bool {
        match self.polarity {
            Polarity::Min => self.items[i] < self.items[j],
            Polarity::Max => self.items[i] > self.items[j],
        }
    }

    fn promote(&mut self, mut slot: usize) -> usize {
        while slot > 0 && self.precedes(slot, parent_of(slot)) {
            let parent = parent_of(slot);
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn demote(&mut self, mut slot: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };

            if !self.precedes(child, slot) {
                break;
            }

            self.swap(slot, child);
            slot = child;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.items.swap(i, j);
        self.positions.insert((self.key_of)(&self.items[i]), i);
        self.positions.insert((self.key_of)(&self.items[j]), j);
    }
}

impl<T: fmt::Debug, K> fmt::Debug for IndexedHeap<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedHeap")
            .field("polarity", &self.polarity)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

const fn parent_of(slot: usize) -> usize {
    (slot - 1) / 2
}
