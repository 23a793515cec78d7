//! Model error types for batch write operations.

use thiserror::Error;

/// Errors raised while constructing or splitting batch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Chunk size outside the accepted range.
    #[error("chunk size {size} is out of range (must be between 1 and {max})")]
    InvalidChunkSize { size: usize, max: usize },
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
