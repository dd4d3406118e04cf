//! The [`KeyedCollection`]: an injective sequence → name mapping.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{CollectionError, Result};
use crate::traits::NameStore;
use crate::types::{InsertOutcome, KeyedPair};

/// A set of sequences, each bound to exactly one name.
///
/// The first binding of a sequence wins: inserting the same sequence again
/// with another name leaves the collection untouched and reports the
/// disagreement through [`InsertOutcome::Rejected`]. Names need not be unique
/// across sequences.
///
/// Two collections are equal when they hold the same set of sequences; the
/// bound names take no part in the comparison.
///
/// The backing map is pluggable through `M`. It defaults to a `HashMap`;
/// use `BTreeMap<S, N>` for sorted iteration.
pub struct KeyedCollection<S, N, M = HashMap<S, N>> {
    store: M,
    _marker: PhantomData<fn() -> (S, N)>,
}

impl<S, N, M: NameStore<S, N>> KeyedCollection<S, N, M> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            store: M::default(),
            _marker: PhantomData,
        }
    }

    /// Build a collection by inserting every pair in order.
    ///
    /// Later pairs that disagree with an earlier binding are dropped. Use
    /// [`insert`](Self::insert) directly to observe those rejections.
    pub fn from_pairs<I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<KeyedPair<S, N>>,
        N: PartialEq + Clone,
    {
        let mut collection = Self::new();
        collection.extend(pairs);
        collection
    }

    /// A new, empty collection with the same sequence, name, and store types.
    pub fn empty_like(&self) -> Self {
        Self::new()
    }

    /// Insert a binding.
    ///
    /// Never fails. An already-bound sequence keeps its name.
    pub fn insert(&mut self, pair: impl Into<KeyedPair<S, N>>) -> InsertOutcome<N>
    where
        N: PartialEq + Clone,
    {
        let (sequence, name) = pair.into().into_parts();
        match self.store.get(&sequence) {
            None => {
                self.store.bind(sequence, name);
                InsertOutcome::Inserted
            }
            Some(existing) if *existing == name => InsertOutcome::Duplicate,
            Some(existing) => InsertOutcome::Rejected {
                existing: existing.clone(),
                rejected: name,
            },
        }
    }

    /// Look up the name bound to `sequence`.
    pub fn lookup(&self, sequence: &S) -> Result<&N>
    where
        S: fmt::Debug,
    {
        self.store
            .get(sequence)
            .ok_or_else(|| CollectionError::KeyNotFound {
                key: format!("{sequence:?}"),
            })
    }

    /// Look up the name bound to `sequence`, if any.
    pub fn get(&self, sequence: &S) -> Option<&N> {
        self.store.get(sequence)
    }

    /// Returns `true` if `sequence` is bound.
    pub fn contains(&self, sequence: &S) -> bool {
        self.store.contains_key(sequence)
    }

    /// Number of bound sequences.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the collection holds no sequences.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterate over `(sequence, name)` bindings in unspecified order.
    pub fn iter(&self) -> M::Iter<'_> {
        self.store.iter()
    }

    /// Iterate over the bound sequences.
    pub fn keys(&self) -> impl Iterator<Item = &S> + '_ {
        self.store.iter().map(|(sequence, _)| sequence)
    }

    /// Iterate over the bound names. A name appears once per sequence bound
    /// to it.
    pub fn names(&self) -> impl Iterator<Item = &N> + '_ {
        self.store.iter().map(|(_, name)| name)
    }

    /// Iterate over owned copies of the bindings.
    pub fn pairs(&self) -> impl Iterator<Item = KeyedPair<S, N>> + '_
    where
        S: Clone,
        N: Clone,
    {
        self.store
            .iter()
            .map(|(sequence, name)| KeyedPair::new(sequence.clone(), name.clone()))
    }
}

impl<S, N, M: NameStore<S, N>> Default for KeyedCollection<S, N, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, N, M: Clone> Clone for KeyedCollection<S, N, M> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, N, M> fmt::Debug for KeyedCollection<S, N, M>
where
    S: fmt::Debug,
    N: fmt::Debug,
    M: NameStore<S, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One `sequence<TAB>name` line per binding.
impl<S, N, M> fmt::Display for KeyedCollection<S, N, M>
where
    S: fmt::Display,
    N: fmt::Display,
    M: NameStore<S, N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sequence, name) in self.iter() {
            writeln!(f, "{sequence}\t{name}")?;
        }
        Ok(())
    }
}

impl<S, N, M, M2> PartialEq<KeyedCollection<S, N, M2>> for KeyedCollection<S, N, M>
where
    M: NameStore<S, N>,
    M2: NameStore<S, N>,
{
    fn eq(&self, other: &KeyedCollection<S, N, M2>) -> bool {
        self.len() == other.len() && self.keys().all(|sequence| other.contains(sequence))
    }
}

impl<S, N, M: NameStore<S, N>> Eq for KeyedCollection<S, N, M> {}

impl<S, N, M, P> FromIterator<P> for KeyedCollection<S, N, M>
where
    M: NameStore<S, N>,
    N: PartialEq + Clone,
    P: Into<KeyedPair<S, N>>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<S, N, M, P> Extend<P> for KeyedCollection<S, N, M>
where
    M: NameStore<S, N>,
    N: PartialEq + Clone,
    P: Into<KeyedPair<S, N>>,
{
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for pair in iter {
            self.insert(pair);
        }
    }
}

impl<'a, S, N, M: NameStore<S, N>> IntoIterator for &'a KeyedCollection<S, N, M> {
    type Item = (&'a S, &'a N);
    type IntoIter = M::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
