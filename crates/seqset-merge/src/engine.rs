//! Set algebra over keyed collections with conflict auditing.
//!
//! Every operation borrows both inputs, leaves them untouched, and returns a
//! fresh result collection. Whenever the inputs bind a shared sequence to
//! different names, the left name is the one carried into the result.
//!
//! The `*_with_conflicts` functions hand back the [`ConflictSummary`] they
//! built. [`union`], [`intersect`], and [`difference`] forward that summary
//! to a caller-supplied [`ConflictSink`] and return only the result.

use std::hash::Hash;

use seqset_core::{KeyedCollection, NameStore};
use tracing::{debug, warn};

use crate::conflict::{ConflictSummary, MergeKind};
use crate::index::{record_name_collisions, InverseIndex};
use crate::report::ConflictSink;

/// A merged collection together with the conflicts found while building it.
pub type MergeOutput<S, N, M> = (KeyedCollection<S, N, M>, ConflictSummary<S, N>);

/// All sequences of `left` and `right`.
///
/// Shared sequences are recorded as duplicates when both sides agree on the
/// name, and as mismatches (keeping the left name) when they do not. Name
/// collisions are collected over the complete inputs, including sequences
/// that are shared by both sides.
pub fn union_with_conflicts<S, N, M>(
    left: &KeyedCollection<S, N, M>,
    right: &KeyedCollection<S, N, M>,
) -> MergeOutput<S, N, M>
where
    S: Clone + PartialEq,
    N: Clone + Eq + Hash,
    M: NameStore<S, N>,
{
    let mut result = left.empty_like();
    let mut summary = ConflictSummary::new();

    result.extend(left.pairs());
    for (sequence, right_name) in right {
        match left.get(sequence) {
            None => {
                result.insert((sequence.clone(), right_name.clone()));
            }
            Some(left_name) if left_name == right_name => {
                summary.record_duplicate(sequence.clone(), left_name.clone());
            }
            Some(left_name) => {
                summary.record_mismatch(sequence.clone(), left_name.clone(), right_name.clone());
            }
        }
    }

    record_name_collisions(
        &InverseIndex::build(left),
        &InverseIndex::build(right),
        &mut summary,
    );

    trace_merge(MergeKind::Union, left.len(), right.len(), result.len(), &summary);
    (result, summary)
}

/// Sequences present in both `left` and `right`, named as in `left`.
///
/// Name collisions are collected over the complete inputs exactly as for
/// [`union_with_conflicts`], so a collision may involve sequences that did
/// not make it into the intersection.
pub fn intersect_with_conflicts<S, N, M>(
    left: &KeyedCollection<S, N, M>,
    right: &KeyedCollection<S, N, M>,
) -> MergeOutput<S, N, M>
where
    S: Clone + PartialEq,
    N: Clone + Eq + Hash,
    M: NameStore<S, N>,
{
    let mut result = left.empty_like();
    let mut summary = ConflictSummary::new();

    for (sequence, left_name) in left {
        let Some(right_name) = right.get(sequence) else {
            continue;
        };
        if left_name == right_name {
            summary.record_duplicate(sequence.clone(), left_name.clone());
        } else {
            summary.record_mismatch(sequence.clone(), left_name.clone(), right_name.clone());
        }
        result.insert((sequence.clone(), left_name.clone()));
    }

    // Same scope as union: both inputs in full, not just the shared keys.
    record_name_collisions(
        &InverseIndex::build(left),
        &InverseIndex::build(right),
        &mut summary,
    );

    trace_merge(MergeKind::Intersect, left.len(), right.len(), result.len(), &summary);
    (result, summary)
}

/// Sequences of `left` that `right` does not contain.
///
/// Sequences the two sides share are dropped from the result and recorded as
/// duplicates or mismatches. A name collision is recorded for every kept
/// sequence whose name is bound to some sequence of `right`.
pub fn difference_with_conflicts<S, N, M>(
    left: &KeyedCollection<S, N, M>,
    right: &KeyedCollection<S, N, M>,
) -> MergeOutput<S, N, M>
where
    S: Clone + PartialEq,
    N: Clone + Eq + Hash,
    M: NameStore<S, N>,
{
    let mut result = left.empty_like();
    let mut summary = ConflictSummary::new();

    for (sequence, left_name) in left {
        match right.get(sequence) {
            None => {
                result.insert((sequence.clone(), left_name.clone()));
            }
            Some(right_name) if right_name == left_name => {
                summary.record_duplicate(sequence.clone(), left_name.clone());
            }
            Some(right_name) => {
                summary.record_mismatch(sequence.clone(), left_name.clone(), right_name.clone());
            }
        }
    }

    let right_index = InverseIndex::build(right);
    for (sequence, name) in &result {
        for &right_sequence in right_index.sequences_named(name) {
            if right_sequence != sequence {
                summary.record_collision(name.clone(), sequence.clone(), right_sequence.clone());
            }
        }
    }

    trace_merge(MergeKind::Difference, left.len(), right.len(), result.len(), &summary);
    (result, summary)
}

/// [`union_with_conflicts`], reporting the conflicts to `sink`.
pub fn union<S, N, M, K>(
    left: &KeyedCollection<S, N, M>,
    right: &KeyedCollection<S, N, M>,
    sink: &mut K,
) -> KeyedCollection<S, N, M>
where
    S: Clone + PartialEq,
    N: Clone + Eq + Hash,
    M: NameStore<S, N>,
    K: ConflictSink<S, N> + ?Sized,
{
    let (result, summary) = union_with_conflicts(left, right);
    forward(MergeKind::Union, &summary, sink);
    result
}

/// [`intersect_with_conflicts`], reporting the conflicts to `sink`.
pub fn intersect<S, N, M, K>(
    left: &KeyedCollection<S, N, M>,
    right: &KeyedCollection<S, N, M>,
    sink: &mut K,
) -> KeyedCollection<S, N, M>
where
    S: Clone + PartialEq,
    N: Clone + Eq + Hash,
    M: NameStore<S, N>,
    K: ConflictSink<S, N> + ?Sized,
{
    let (result, summary) = intersect_with_conflicts(left, right);
    forward(MergeKind::Intersect, &summary, sink);
    result
}

/// [`difference_with_conflicts`], reporting the conflicts to `sink`.
pub fn difference<S, N, M, K>(
    left: &KeyedCollection<S, N, M>,
    right: &KeyedCollection<S, N, M>,
    sink: &mut K,
) -> KeyedCollection<S, N, M>
where
    S: Clone + PartialEq,
    N: Clone + Eq + Hash,
    M: NameStore<S, N>,
    K: ConflictSink<S, N> + ?Sized,
{
    let (result, summary) = difference_with_conflicts(left, right);
    forward(MergeKind::Difference, &summary, sink);
    result
}

/// Hand a summary to its sink. A failing sink never affects the result.
fn forward<S, N, K>(kind: MergeKind, summary: &ConflictSummary<S, N>, sink: &mut K)
where
    K: ConflictSink<S, N> + ?Sized,
{
    if let Err(e) = sink.report(kind, summary) {
        warn!(%kind, error = %e, "failed to report merge conflicts");
    }
}

fn trace_merge<S, N>(
    kind: MergeKind,
    left: usize,
    right: usize,
    result: usize,
    summary: &ConflictSummary<S, N>,
) {
    debug!(
        %kind,
        left,
        right,
        result,
        duplicates = summary.duplicates.len(),
        mismatches = summary.sequence_name_mismatches.len(),
        collisions = summary.name_collisions.len(),
        "merge complete"
    );
}
