//! fgalink-batch: Batch relationship-tuple write engine
//!
//! This crate turns a caller's intent to write and/or delete many
//! relationship tuples into one or more calls against the store's write
//! endpoint, honoring the per-call size limit. It supports:
//! - Transactional mode: the whole operation as one atomic call
//! - Non-transactional mode: size-bounded chunks executed independently,
//!   with retry/backoff and bounded parallelism
//! - Partial-failure accounting through an aggregate result
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               fgalink-batch                  │
//! ├─────────────────────────────────────────────┤
//! │  writer.rs   - BatchWriter facade & dispatch│
//! │  executor.rs - Per-chunk retry/backoff      │
//! │  result.rs   - Outcome aggregation          │
//! │  options.rs  - Per-call execution options   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fgalink_batch::{BatchWriter, ExecutionOptions};
//! use fgalink_model::TupleKey;
//! use fgalink_transport::{ClientConfig, HttpTupleTransport};
//!
//! let transport = Arc::new(HttpTupleTransport::new(ClientConfig::new("http://localhost:8080"))?);
//! let writer = BatchWriter::new(transport, "store1");
//!
//! let options = ExecutionOptions::default()
//!     .with_max_parallel_requests(4)
//!     .with_max_retries(2);
//! let result = writer.write(tuples, false, &options).await?;
//! if !result.is_complete_success() {
//!     result.ensure_success()?;
//! }
//! ```

pub mod error;
pub mod executor;
pub mod options;
pub mod result;
pub mod writer;

// Re-export commonly used types
pub use error::BatchWriteError;
pub use options::ExecutionOptions;
pub use result::{BatchWriteResult, ChunkFailure, ChunkOutcome};
pub use writer::BatchWriter;
