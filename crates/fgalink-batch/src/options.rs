//! Per-call execution options for batch writes.

use std::time::Duration;

use fgalink_model::MAX_TUPLES_PER_WRITE;

use crate::error::BatchWriteError;

/// Options controlling non-transactional dispatch, chunk sizing, and
/// retries. Supplied per call; nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOptions {
    /// Maximum chunk sends in flight at once (must be at least 1).
    pub max_parallel_requests: usize,
    /// Maximum operations per chunk, capped at the per-request limit.
    pub max_tuples_per_chunk: usize,
    /// Retries per chunk after the initial attempt.
    pub max_retries: u32,
    /// Base backoff delay; doubled on every retry. Zero disables backoff
    /// sleeps entirely.
    pub retry_delay: Duration,
    /// Halt dispatch of remaining chunks after the first chunk failure.
    pub stop_on_first_error: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_parallel_requests: 1,
            max_tuples_per_chunk: MAX_TUPLES_PER_WRITE,
            max_retries: 0,
            retry_delay: Duration::from_secs(1),
            stop_on_first_error: false,
        }
    }
}

impl ExecutionOptions {
    /// Sets the concurrency bound for chunk dispatch.
    pub fn with_max_parallel_requests(mut self, max_parallel_requests: usize) -> Self {
        self.max_parallel_requests = max_parallel_requests;
        self
    }

    /// Sets the chunk size.
    pub fn with_max_tuples_per_chunk(mut self, max_tuples_per_chunk: usize) -> Self {
        self.max_tuples_per_chunk = max_tuples_per_chunk;
        self
    }

    /// Sets the number of retries per chunk.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the base backoff delay.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Halts dispatch after the first chunk failure.
    pub fn with_stop_on_first_error(mut self, stop_on_first_error: bool) -> Self {
        self.stop_on_first_error = stop_on_first_error;
        self
    }

    /// Validates the options.
    pub fn validate(&self) -> Result<(), BatchWriteError> {
        if self.max_parallel_requests == 0 {
            return Err(BatchWriteError::InvalidOptions {
                message: "max_parallel_requests must be at least 1".to_string(),
            });
        }
        if self.max_tuples_per_chunk == 0 || self.max_tuples_per_chunk > MAX_TUPLES_PER_WRITE {
            return Err(BatchWriteError::InvalidOptions {
                message: format!(
                    "max_tuples_per_chunk must be between 1 and {}, got {}",
                    MAX_TUPLES_PER_WRITE, self.max_tuples_per_chunk
                ),
            });
        }
        Ok(())
    }
}
