//! TupleTransport trait definition.

use async_trait::async_trait;

use crate::error::TransportResult;
use crate::wire::{WriteRequestBody, WriteResponse};

/// Abstract transport for tuple write calls.
///
/// One `send` corresponds to one call against the store's write endpoint;
/// the engine handles chunking and retries above this seam. Implementations
/// must be thread-safe (Send + Sync) and support async operations.
#[async_trait]
pub trait TupleTransport: Send + Sync + 'static {
    /// Sends one write request against the given store.
    ///
    /// A successful call means the service applied every write and delete
    /// in the request atomically. Any error means none were applied.
    async fn send(
        &self,
        store_id: &str,
        request: &WriteRequestBody,
    ) -> TransportResult<WriteResponse>;
}
