//! The conflict taxonomy produced by merge operations.
//!
//! A [`ConflictSummary`] holds three independent lists. None of them is an
//! error: each entry records a disagreement (or agreement, for duplicates)
//! between the left and right inputs of a single merge call.

use std::fmt;

use serde::Serialize;

/// Which merge operation produced a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeKind {
    Union,
    Intersect,
    Difference,
}

impl fmt::Display for MergeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Union => write!(f, "union"),
            Self::Intersect => write!(f, "intersect"),
            Self::Difference => write!(f, "difference"),
        }
    }
}

/// A sequence bound to the same name on both sides.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Duplicate<S, N> {
    pub sequence: S,
    pub name: N,
}

/// A sequence bound to different names on the two sides.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SequenceNameMismatch<S, N> {
    pub sequence: S,
    pub left_name: N,
    pub right_name: N,
}

/// One name bound to two different sequences, one from each side.
///
/// `left_sequence` and `right_sequence` are never equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NameCollision<S, N> {
    pub name: N,
    pub left_sequence: S,
    pub right_sequence: S,
}

impl<S: fmt::Display, N: fmt::Display> fmt::Display for Duplicate<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate {} ({})", self.sequence, self.name)
    }
}

impl<S: fmt::Display, N: fmt::Display> fmt::Display for SequenceNameMismatch<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sequence {} named {} on the left, {} on the right",
            self.sequence, self.left_name, self.right_name
        )
    }
}

impl<S: fmt::Display, N: fmt::Display> fmt::Display for NameCollision<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name {} bound to {} on the left, {} on the right",
            self.name, self.left_sequence, self.right_sequence
        )
    }
}

/// Every conflict found by one merge call.
///
/// Entry order within each list is unspecified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConflictSummary<S, N> {
    /// Identical bindings present on both sides.
    pub duplicates: Vec<Duplicate<S, N>>,
    /// Shared sequences whose names differ.
    pub sequence_name_mismatches: Vec<SequenceNameMismatch<S, N>>,
    /// Names bound to different sequences across the two sides.
    pub name_collisions: Vec<NameCollision<S, N>>,
}

impl<S, N> Default for ConflictSummary<S, N> {
    fn default() -> Self {
        Self {
            duplicates: Vec::new(),
            sequence_name_mismatches: Vec::new(),
            name_collisions: Vec::new(),
        }
    }
}

impl<S, N> ConflictSummary<S, N> {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no entry was recorded in any category.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Number of entries across all categories.
    pub fn total(&self) -> usize {
        self.duplicates.len() + self.sequence_name_mismatches.len() + self.name_collisions.len()
    }

    /// Returns `true` if the inputs disagreed somewhere. Duplicates alone do
    /// not count as disagreement.
    pub fn has_disagreements(&self) -> bool {
        !self.sequence_name_mismatches.is_empty() || !self.name_collisions.is_empty()
    }

    pub(crate) fn record_duplicate(&mut self, sequence: S, name: N) {
        self.duplicates.push(Duplicate { sequence, name });
    }

    pub(crate) fn record_mismatch(&mut self, sequence: S, left_name: N, right_name: N) {
        self.sequence_name_mismatches.push(SequenceNameMismatch {
            sequence,
            left_name,
            right_name,
        });
    }

    pub(crate) fn record_collision(&mut self, name: N, left_sequence: S, right_sequence: S) {
        self.name_collisions.push(NameCollision {
            name,
            left_sequence,
            right_sequence,
        });
    }
}
