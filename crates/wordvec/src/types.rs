//! # Common Types

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WVHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WVHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WVHashMap<K, V> {
            WVHashMap::with_capacity(capacity)
        }
    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WVHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WVHashSet<V> = foldhash::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WVHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type WVHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WVHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WVHashMap<K, V> {
            WVHashMap::with_capacity(capacity)
        }
    }
}
