//! Hash map alias.
//!
//! Vertex indices and edge keys are small integers, so the default SipHash
//! is needlessly slow. This alias pairs `hashbrown` tables with `ahash`.

/// Hash map keyed with `ahash`.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Creates an empty [`FastHashMap`] with room for `capacity` entries.
#[must_use]
pub fn map_with_capacity<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, ahash::RandomState::new())
}

