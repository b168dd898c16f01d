//! Key/value accumulation over element sequences.

use indexmap::IndexMap;
use std::hash::Hash;

/// Folds an iterator into an ordered map through a closure.
pub trait EachWithHash: Iterator + Sized {
    /// Drives the iterator to completion, handing each item together with the
    /// accumulator map to `f`, and returns the accumulated map. Insertion
    /// order of the map is whatever order `f` first created each key in.
    fn each_with_hash<K, V, F>(self, mut f: F) -> IndexMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(Self::Item, &mut IndexMap<K, V>),
    {
        let mut map = IndexMap::new();
        for item in self {
            f(item, &mut map);
        }
        map
    }
}

impl<I: Iterator> EachWithHash for I {}
