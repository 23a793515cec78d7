//! Batch writer: execution strategy and the public write surface.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, instrument};

use fgalink_model::{dedupe, BatchOperation, TupleKey, MAX_TUPLES_PER_WRITE};
use fgalink_transport::{TupleTransport, WriteRequestBody};

use crate::error::BatchWriteError;
use crate::executor::execute_with_retry;
use crate::options::ExecutionOptions;
use crate::result::{BatchWriteResult, ChunkFailure, ChunkOutcome, ResultAggregator};

/// Executes batch tuple writes and deletes against one store.
///
/// In transactional mode the whole (post-filter) operation is sent as one
/// atomic call; it must fit the per-request limit. In non-transactional
/// mode the operation is split into chunks that are executed
/// independently, optionally with bounded parallelism, and failures are
/// recovered into the returned [`BatchWriteResult`] rather than raised.
#[derive(Debug)]
pub struct BatchWriter<T: TupleTransport> {
    transport: Arc<T>,
    store_id: String,
    authorization_model_id: Option<String>,
}

impl<T: TupleTransport> BatchWriter<T> {
    /// Creates a writer bound to one store.
    pub fn new(transport: Arc<T>, store_id: impl Into<String>) -> Self {
        Self {
            transport,
            store_id: store_id.into(),
            authorization_model_id: None,
        }
    }

    /// Pins every request to a specific authorization model.
    pub fn with_authorization_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.authorization_model_id = Some(model_id.into());
        self
    }

    /// The store this writer targets.
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Writes the given tuples.
    pub async fn write(
        &self,
        tuples: Vec<TupleKey>,
        transactional: bool,
        options: &ExecutionOptions,
    ) -> Result<BatchWriteResult, BatchWriteError> {
        self.execute(Some(tuples), None, transactional, options)
            .await
    }

    /// Deletes the given tuples.
    pub async fn delete(
        &self,
        tuples: Vec<TupleKey>,
        transactional: bool,
        options: &ExecutionOptions,
    ) -> Result<BatchWriteResult, BatchWriteError> {
        self.execute(None, Some(tuples), transactional, options)
            .await
    }

    /// Writes and deletes tuples in one operation.
    pub async fn write_and_delete(
        &self,
        writes: Option<Vec<TupleKey>>,
        deletes: Option<Vec<TupleKey>>,
        transactional: bool,
        options: &ExecutionOptions,
    ) -> Result<BatchWriteResult, BatchWriteError> {
        self.execute(writes, deletes, transactional, options).await
    }

    #[instrument(skip_all, fields(store_id = %self.store_id, transactional))]
    async fn execute(
        &self,
        writes: Option<Vec<TupleKey>>,
        deletes: Option<Vec<TupleKey>>,
        transactional: bool,
        options: &ExecutionOptions,
    ) -> Result<BatchWriteResult, BatchWriteError> {
        options.validate()?;

        // Everything downstream (the transactional limit, chunk count)
        // operates on the filtered collections.
        let (writes, deletes) = dedupe(writes, deletes);
        let operation = BatchOperation::new(writes, deletes);

        if operation.is_empty() {
            debug!("nothing to send after duplicate filtering");
            return Ok(ResultAggregator::new(0, 0).finish());
        }

        if transactional {
            self.execute_transactional(&operation).await
        } else {
            self.execute_chunked(&operation, options).await
        }
    }

    /// Sends the whole operation as one atomic call.
    async fn execute_transactional(
        &self,
        operation: &BatchOperation,
    ) -> Result<BatchWriteResult, BatchWriteError> {
        let count = operation.total_operations();
        if count > MAX_TUPLES_PER_WRITE {
            return Err(BatchWriteError::TransactionalLimitExceeded {
                count,
                max: MAX_TUPLES_PER_WRITE,
            });
        }

        let request = self.request_for(operation);
        let mut aggregator = ResultAggregator::new(count, 1);
        match self.transport.send(&self.store_id, &request).await {
            Ok(response) => aggregator.record(ChunkOutcome::Success(response)),
            Err(error) => aggregator.record(ChunkOutcome::Failure(ChunkFailure {
                chunk_index: 0,
                attempts: 1,
                source: error,
            })),
        }
        Ok(aggregator.finish())
    }

    /// Splits the operation into chunks and dispatches them according to
    /// the options.
    async fn execute_chunked(
        &self,
        operation: &BatchOperation,
        options: &ExecutionOptions,
    ) -> Result<BatchWriteResult, BatchWriteError> {
        let chunks = operation.chunk(options.max_tuples_per_chunk)?;
        let total_chunks = chunks.len();
        debug!(
            total_operations = operation.total_operations(),
            total_chunks, "dispatching chunked write"
        );

        let requests: Vec<WriteRequestBody> =
            chunks.iter().map(|chunk| self.request_for(chunk)).collect();
        let mut aggregator = ResultAggregator::new(operation.total_operations(), total_chunks);

        if options.stop_on_first_error {
            for (chunk_index, request) in requests.iter().enumerate() {
                let outcome = self.run_chunk(chunk_index, request, options).await;
                let failed = outcome.is_failure();
                aggregator.record(outcome);
                if failed {
                    debug!(chunk_index, "halting dispatch after chunk failure");
                    break;
                }
            }
        } else if options.max_parallel_requests > 1 && total_chunks > 1 {
            // Bounded concurrency; outcomes arrive in completion order.
            let mut outcomes = stream::iter(requests.iter().enumerate())
                .map(|(chunk_index, request)| self.run_chunk(chunk_index, request, options))
                .buffer_unordered(options.max_parallel_requests);
            while let Some(outcome) = outcomes.next().await {
                aggregator.record(outcome);
            }
        } else {
            for (chunk_index, request) in requests.iter().enumerate() {
                let outcome = self.run_chunk(chunk_index, request, options).await;
                aggregator.record(outcome);
            }
        }

        Ok(aggregator.finish())
    }

    async fn run_chunk(
        &self,
        chunk_index: usize,
        request: &WriteRequestBody,
        options: &ExecutionOptions,
    ) -> ChunkOutcome {
        execute_with_retry(
            self.transport.as_ref(),
            &self.store_id,
            chunk_index,
            request,
            options.max_retries,
            options.retry_delay,
        )
        .await
    }

    fn request_for(&self, operation: &BatchOperation) -> WriteRequestBody {
        WriteRequestBody::from_operation(operation, self.authorization_model_id.as_deref())
    }
}
