//! Error types for gridkeys core.

/// Errors raised by the fallible [`LiveList`](crate::LiveList) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// An index was outside the collection.
    #[error("index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },
}

/// A specialized Result type for collection operations.
pub type CollectionResult<T> = std::result::Result<T, CollectionError>;
