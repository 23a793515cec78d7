//! Batch result aggregation.

use thiserror::Error;

use fgalink_transport::{TransportError, WriteResponse};

use crate::error::BatchWriteError;

/// Failure record for a single chunk, captured after retries were
/// exhausted.
#[derive(Debug, Error)]
#[error("chunk {chunk_index} failed after {attempts} attempts: {source}")]
pub struct ChunkFailure {
    /// Position of the chunk in generation order.
    pub chunk_index: usize,
    /// Total attempts made, including the first.
    pub attempts: u32,
    /// The error from the final attempt.
    #[source]
    pub source: TransportError,
}

/// Outcome of executing one chunk.
#[derive(Debug)]
pub enum ChunkOutcome {
    /// The chunk was applied.
    Success(WriteResponse),
    /// The chunk failed after all attempts.
    Failure(ChunkFailure),
}

impl ChunkOutcome {
    /// Whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, ChunkOutcome::Failure(_))
    }
}

/// Aggregate result of a batch write call.
///
/// Per-chunk failures are recovered into this result instead of unwinding
/// the caller; [`ensure_success`](BatchWriteResult::ensure_success) is the
/// explicit escalation point. Under concurrent dispatch the `responses`
/// and `errors` lists reflect completion order, not generation order; the
/// counters are order-invariant.
#[derive(Debug, Default)]
pub struct BatchWriteResult {
    total_operations: usize,
    total_chunks: usize,
    successful_chunks: usize,
    failed_chunks: usize,
    responses: Vec<WriteResponse>,
    errors: Vec<ChunkFailure>,
}

impl BatchWriteResult {
    /// Total tuple operations covered by the call, after filtering.
    pub fn total_operations(&self) -> usize {
        self.total_operations
    }

    /// Number of chunks the operation was split into.
    pub fn total_chunks(&self) -> usize {
        self.total_chunks
    }

    /// Number of chunks that were applied.
    pub fn successful_chunks(&self) -> usize {
        self.successful_chunks
    }

    /// Number of chunks that failed after all attempts.
    pub fn failed_chunks(&self) -> usize {
        self.failed_chunks
    }

    /// Responses from successful chunks, in completion order.
    pub fn responses(&self) -> &[WriteResponse] {
        &self.responses
    }

    /// Failures from failed chunks, in the order they were recorded.
    pub fn errors(&self) -> &[ChunkFailure] {
        &self.errors
    }

    /// Fraction of chunks that succeeded; 0.0 when no chunks ran.
    pub fn success_rate(&self) -> f64 {
        if self.total_chunks == 0 {
            return 0.0;
        }
        self.successful_chunks as f64 / self.total_chunks as f64
    }

    /// Every chunk succeeded (and at least one chunk ran).
    pub fn is_complete_success(&self) -> bool {
        self.total_chunks > 0 && self.failed_chunks == 0
    }

    /// No chunk succeeded (and at least one chunk ran).
    pub fn is_complete_failure(&self) -> bool {
        self.total_chunks > 0 && self.successful_chunks == 0
    }

    /// Some chunks succeeded and some failed.
    pub fn is_partial_success(&self) -> bool {
        self.successful_chunks > 0 && self.failed_chunks > 0
    }

    /// The first recorded failure, if any.
    pub fn first_error(&self) -> Option<&ChunkFailure> {
        self.errors.first()
    }

    /// Escalates recorded failures into an error.
    ///
    /// Returns `Ok(())` when no chunk failed. Otherwise surfaces the first
    /// recorded failure, or a synthetic failed/total summary when failures
    /// were counted without a captured error.
    pub fn ensure_success(&self) -> Result<(), BatchWriteError> {
        if self.failed_chunks == 0 {
            return Ok(());
        }
        match self.errors.first() {
            Some(failure) => Err(BatchWriteError::ChunkFailed {
                chunk_index: failure.chunk_index,
                attempts: failure.attempts,
                message: failure.source.to_string(),
            }),
            None => Err(BatchWriteError::ChunksFailed {
                failed: self.failed_chunks,
                total: self.total_chunks,
            }),
        }
    }
}

/// Folds per-chunk outcomes into a [`BatchWriteResult`].
///
/// Outcomes are recorded at the single consumption point of the dispatch
/// stream, so exclusive ownership serializes the appends without a lock.
#[derive(Debug)]
pub(crate) struct ResultAggregator {
    result: BatchWriteResult,
}

impl ResultAggregator {
    pub(crate) fn new(total_operations: usize, total_chunks: usize) -> Self {
        Self {
            result: BatchWriteResult {
                total_operations,
                total_chunks,
                ..Default::default()
            },
        }
    }

    pub(crate) fn record(&mut self, outcome: ChunkOutcome) {
        match outcome {
            ChunkOutcome::Success(response) => {
                self.result.successful_chunks += 1;
                self.result.responses.push(response);
            }
            ChunkOutcome::Failure(failure) => {
                self.result.failed_chunks += 1;
                self.result.errors.push(failure);
            }
        }
    }

    pub(crate) fn finish(self) -> BatchWriteResult {
        self.result
    }
}
