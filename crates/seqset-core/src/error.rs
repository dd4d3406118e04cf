//! Error types for collection operations.

use thiserror::Error;

/// Errors that can occur when reading from a keyed collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// The requested sequence has no binding.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
}

/// Convenience type alias for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
