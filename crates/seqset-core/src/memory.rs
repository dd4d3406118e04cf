//! In-memory name stores.
//!
//! `HashMap` is the default backing store. `BTreeMap` is provided for callers
//! that want entries to come back sorted by sequence, e.g. for stable output.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::Hash;

use crate::traits::NameStore;

impl<S: Eq + Hash, N> NameStore<S, N> for HashMap<S, N> {
    type Iter<'a> = hash_map::Iter<'a, S, N>
    where
        S: 'a,
        N: 'a;

    fn get(&self, sequence: &S) -> Option<&N> {
        HashMap::get(self, sequence)
    }

    fn bind(&mut self, sequence: S, name: N) {
        debug_assert!(!HashMap::contains_key(self, &sequence));
        HashMap::insert(self, sequence, name);
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn contains_key(&self, sequence: &S) -> bool {
        HashMap::contains_key(self, sequence)
    }
}

impl<S: Ord, N> NameStore<S, N> for BTreeMap<S, N> {
    type Iter<'a> = btree_map::Iter<'a, S, N>
    where
        S: 'a,
        N: 'a;

    fn get(&self, sequence: &S) -> Option<&N> {
        BTreeMap::get(self, sequence)
    }

    fn bind(&mut self, sequence: S, name: N) {
        debug_assert!(!BTreeMap::contains_key(self, &sequence));
        BTreeMap::insert(self, sequence, name);
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }

    fn contains_key(&self, sequence: &S) -> bool {
        BTreeMap::contains_key(self, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<M: NameStore<&'static str, u32>>() {
        let mut store = M::default();
        assert!(store.is_empty());

        store.bind("b", 2);
        store.bind("a", 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&"a"), Some(&1));
        assert!(store.contains_key(&"b"));
        assert!(!store.contains_key(&"c"));

        let mut entries: Vec<_> = store.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort();
        assert_eq!(entries, vec![("a", 1), ("b", 2)]);
    }

    #[test]
    fn hash_map_store() {
        exercise::<HashMap<&'static str, u32>>();
    }

    #[test]
    fn btree_map_store() {
        exercise::<BTreeMap<&'static str, u32>>();
    }

    #[test]
    fn btree_map_iterates_sorted() {
        let mut store: BTreeMap<&str, u32> = BTreeMap::new();
        NameStore::bind(&mut store, "zz", 1);
        NameStore::bind(&mut store, "aa", 2);
        let keys: Vec<_> = NameStore::iter(&store).map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["aa", "zz"]);
    }
}
