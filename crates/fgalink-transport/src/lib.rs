//! fgalink-transport: Transport seam for tuple write calls
//!
//! This crate provides the transport abstraction used by the batch write
//! engine, including:
//! - TupleTransport trait for sending write requests
//! - Wire body types for the write endpoint
//! - HTTP implementation over reqwest
//! - In-memory implementation for tests and local development
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             fgalink-transport                │
//! ├─────────────────────────────────────────────┤
//! │  traits.rs  - TupleTransport trait          │
//! │  wire.rs    - Write request/response bodies │
//! │  http.rs    - HTTP implementation           │
//! │  memory.rs  - In-memory implementation      │
//! │  config.rs  - Client configuration          │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod traits;
pub mod wire;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTupleTransport;
pub use memory::MemoryTupleTransport;
pub use traits::TupleTransport;
pub use wire::{WriteRequestBody, WriteResponse};
