//! Name → sequences inverse index used for collision detection.
//!
//! The index borrows from the collection it was built from and lives only
//! for the duration of one merge call.
//!
//! # Cost
//!
//! Collision detection pairs every left sequence with every right sequence
//! that share a name, so a single name costs `O(k₁ × k₂)`. This is cheap for
//! ordinary inputs where a name labels a handful of sequences, but degrades
//! quadratically when one name labels thousands. Such groups are logged at
//! debug level so they show up when profiling.

use std::collections::HashMap;
use std::hash::Hash;

use seqset_core::{KeyedCollection, NameStore};
use tracing::debug;

use crate::conflict::ConflictSummary;

/// Pair products above this are logged as a collision-scan hot spot.
const HOT_GROUP_PAIRS: usize = 4096;

/// Maps each name of a collection to the sequences bound to it.
#[derive(Debug)]
pub struct InverseIndex<'a, S, N> {
    by_name: HashMap<&'a N, Vec<&'a S>>,
}

impl<'a, S, N: Eq + Hash> InverseIndex<'a, S, N> {
    /// Index every binding of `collection`.
    pub fn build<M: NameStore<S, N>>(collection: &'a KeyedCollection<S, N, M>) -> Self {
        let mut by_name: HashMap<&'a N, Vec<&'a S>> = HashMap::new();
        for (sequence, name) in collection {
            by_name.entry(name).or_default().push(sequence);
        }
        Self { by_name }
    }

    /// Sequences bound to `name`; empty if the name is unused.
    pub fn sequences_named(&self, name: &N) -> &[&'a S] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if the indexed collection was empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over `(name, sequences)` groups.
    pub fn groups(&self) -> impl Iterator<Item = (&'a N, &[&'a S])> + '_ {
        self.by_name
            .iter()
            .map(|(name, sequences)| (*name, sequences.as_slice()))
    }
}

/// Record every name bound to different sequences in `left` and `right`.
///
/// Scans the full indices; callers decide which inputs to index.
pub(crate) fn record_name_collisions<S, N>(
    left: &InverseIndex<'_, S, N>,
    right: &InverseIndex<'_, S, N>,
    summary: &mut ConflictSummary<S, N>,
) where
    S: Clone + PartialEq,
    N: Clone + Eq + Hash,
{
    for (name, left_sequences) in left.groups() {
        let right_sequences = right.sequences_named(name);
        if right_sequences.is_empty() {
            continue;
        }

        let pairs = left_sequences.len() * right_sequences.len();
        if pairs > HOT_GROUP_PAIRS {
            debug!(
                left = left_sequences.len(),
                right = right_sequences.len(),
                pairs,
                "large shared-name group in collision scan"
            );
        }

        for &left_sequence in left_sequences {
            for &right_sequence in right_sequences {
                if left_sequence != right_sequence {
                    summary.record_collision(
                        name.clone(),
                        left_sequence.clone(),
                        right_sequence.clone(),
                    );
                }
            }
        }
    }
}
