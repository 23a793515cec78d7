//! Batch write error types.

use thiserror::Error;

use fgalink_model::ModelError;

/// Errors surfaced by the batch write engine.
///
/// Validation variants are raised before any network call. Per-chunk
/// transport failures are never raised directly; they are recovered into
/// the batch result, and only [`ChunkFailed`](BatchWriteError::ChunkFailed)
/// / [`ChunksFailed`](BatchWriteError::ChunksFailed) escalate them when the
/// caller asks via `ensure_success()`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BatchWriteError {
    /// Invalid chunk size.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Invalid execution options.
    #[error("invalid execution options: {message}")]
    InvalidOptions { message: String },

    /// Transactional operation exceeds the per-request limit.
    #[error("transactional write of {count} operations exceeds the per-request limit of {max}")]
    TransactionalLimitExceeded { count: usize, max: usize },

    /// First recorded chunk failure, escalated by `ensure_success()`.
    #[error("chunk {chunk_index} failed after {attempts} attempts: {message}")]
    ChunkFailed {
        chunk_index: usize,
        attempts: u32,
        message: String,
    },

    /// Chunks failed without a captured error object.
    #[error("{failed} of {total} chunks failed")]
    ChunksFailed { failed: usize, total: usize },
}
