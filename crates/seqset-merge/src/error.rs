//! Error types for conflict reporting.

/// Errors a [`ConflictSink`](crate::ConflictSink) can raise while reporting.
///
/// Merge operations themselves never fail; these errors only describe a
/// sink that could not deliver its report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing the report failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for reporting results.
pub type ReportResult<T> = Result<T, ReportError>;
