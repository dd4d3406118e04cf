//! The [`NameStore`] trait defining the backing storage of a collection.
//!
//! A store is any unique-key map from sequence to name. The collection layer
//! owns the "first binding wins" policy; a store only has to remember
//! bindings and hand them back.

/// Backing map for a [`KeyedCollection`](crate::KeyedCollection).
///
/// Iteration order is unspecified and callers must not rely on it. `bind` is
/// only ever called for keys the collection has checked to be absent.
pub trait NameStore<S, N>: Default {
    /// Iterator over `(sequence, name)` entries.
    type Iter<'a>: Iterator<Item = (&'a S, &'a N)>
    where
        Self: 'a,
        S: 'a,
        N: 'a;

    /// Look up the name bound to `sequence`.
    fn get(&self, sequence: &S) -> Option<&N>;

    /// Bind a sequence that is not yet present.
    fn bind(&mut self, sequence: S, name: N);

    /// Number of bound sequences.
    fn len(&self) -> usize;

    /// Iterate over all bindings.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if `sequence` is bound.
    fn contains_key(&self, sequence: &S) -> bool {
        self.get(sequence).is_some()
    }

    /// Returns `true` if nothing is bound.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
