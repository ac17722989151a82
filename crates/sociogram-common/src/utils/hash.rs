//! Hashing aliases used across the Sociogram crates.
//!
//! Algorithm working maps and the adjacency index sit on hot paths, so
//! maps default to `ahash`-keyed hashbrown tables.

/// Hash map keyed with an `ahash` random state.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set keyed with an `ahash` random state.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
