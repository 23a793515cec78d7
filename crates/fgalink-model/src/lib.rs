//! fgalink-model: Tuple keys and batch write operations
//!
//! This crate contains the value types used by the batch write engine:
//! - Tuple key and condition types
//! - Duplicate filtering for tuple key collections
//! - Batch operations and size-bounded chunking
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               fgalink-model                  │
//! ├─────────────────────────────────────────────┤
//! │  types.rs  - Tuple key & condition types    │
//! │  dedup.rs  - Duplicate filtering            │
//! │  batch.rs  - Batch operations & chunking    │
//! └─────────────────────────────────────────────┘
//! ```

pub mod batch;
pub mod dedup;
pub mod error;
pub mod types;

mod batch_proptest;

// Re-export commonly used types at the crate root
pub use batch::{BatchOperation, MAX_TUPLES_PER_WRITE};
pub use dedup::dedupe;
pub use error::{ModelError, ModelResult};
pub use types::{RelationshipCondition, TupleIdentity, TupleKey};
