//! Value types shared by collections and the merge engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable `(sequence, name)` binding.
///
/// Pairs have no identity of their own; two pairs are equal when both fields
/// are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyedPair<S, N> {
    sequence: S,
    name: N,
}

impl<S, N> KeyedPair<S, N> {
    /// Create a pair binding `sequence` to `name`.
    pub fn new(sequence: S, name: N) -> Self {
        Self { sequence, name }
    }

    /// The key half of the pair.
    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    /// The label half of the pair.
    pub fn name(&self) -> &N {
        &self.name
    }

    /// Split the pair into its sequence and name.
    pub fn into_parts(self) -> (S, N) {
        (self.sequence, self.name)
    }
}

impl<S, N> From<(S, N)> for KeyedPair<S, N> {
    fn from((sequence, name): (S, N)) -> Self {
        Self::new(sequence, name)
    }
}

impl<S: fmt::Display, N: fmt::Display> fmt::Display for KeyedPair<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.sequence, self.name)
    }
}

/// What happened to a pair handed to [`KeyedCollection::insert`].
///
/// [`KeyedCollection::insert`]: crate::KeyedCollection::insert
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome<N> {
    /// The sequence was new and is now bound to the name.
    Inserted,
    /// The sequence was already bound to the same name. Nothing changed.
    Duplicate,
    /// The sequence was already bound to a different name. The existing
    /// binding was kept and the incoming name discarded.
    Rejected { existing: N, rejected: N },
}

impl<N> InsertOutcome<N> {
    /// Returns `true` if the collection grew.
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted)
    }

    /// Returns `true` if the incoming name disagreed with the existing one.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_from_tuple() {
        let pair: KeyedPair<&str, &str> = ("ACGT", "seq1").into();
        assert_eq!(pair.sequence(), &"ACGT");
        assert_eq!(pair.name(), &"seq1");
        assert_eq!(pair.into_parts(), ("ACGT", "seq1"));
    }

    #[test]
    fn pair_display_is_tab_separated() {
        let pair = KeyedPair::new("ACGT", "seq1");
        assert_eq!(pair.to_string(), "ACGT\tseq1");
    }

    #[test]
    fn pair_serde_roundtrip() {
        let pair = KeyedPair::new("AAA".to_string(), "x".to_string());
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"sequence":"AAA","name":"x"}"#);
        let back: KeyedPair<String, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }

    #[test]
    fn outcome_predicates() {
        assert!(InsertOutcome::<u8>::Inserted.is_inserted());
        assert!(!InsertOutcome::<u8>::Duplicate.is_inserted());
        let rejected = InsertOutcome::Rejected { existing: 1, rejected: 2 };
        assert!(rejected.is_rejected());
        assert!(!rejected.is_inserted());
    }
}
