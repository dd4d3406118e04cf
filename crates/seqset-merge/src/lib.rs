//! Conflict-aware set algebra over keyed sequence collections.
//!
//! Combines two [`KeyedCollection`](seqset_core::KeyedCollection)s by union,
//! intersection, or difference and audits every disagreement between them
//! in a [`ConflictSummary`]. Conflicts are data, not errors: every operation
//! is total and always produces a result.
//!
//! # Key Types
//!
//! - [`ConflictSummary`] -- Duplicates, sequence/name mismatches, and name collisions
//! - [`ConflictSink`] -- Destination for summaries produced by the wrapper operations
//! - [`InverseIndex`] -- Name → sequences lookup used for collision detection
//! - [`ReportConfig`] -- How much of a summary the sinks list
//!
//! When both inputs bind a sequence to different names, the left input's
//! name always wins.

pub mod config;
pub mod conflict;
pub mod engine;
pub mod error;
pub mod index;
pub mod report;

pub use config::{ReportConfig, ReportLevel};
pub use conflict::{ConflictSummary, Duplicate, MergeKind, NameCollision, SequenceNameMismatch};
pub use engine::{
    difference, difference_with_conflicts, intersect, intersect_with_conflicts, union,
    union_with_conflicts, MergeOutput,
};
pub use error::{ReportError, ReportResult};
pub use index::InverseIndex;
pub use report::{CollectingSink, ConflictSink, DiscardSink, TracingSink, WriterSink};
