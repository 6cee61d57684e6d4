use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for fast insertion-ordered lookups and rustc_hash for fast hashing
/// Insertion order matters for the id mapping and for deterministic expansion
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;