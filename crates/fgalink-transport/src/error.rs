//! Transport error types.

use thiserror::Error;

/// Errors raised while sending a write request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request could not be sent or the connection failed.
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The service rejected the request.
    #[error("service error ({status}): {code}: {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },

    /// The response body could not be decoded.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Duplicate tuple: writing a tuple which already exists.
    #[error("cannot write a tuple which already exists: {key}")]
    DuplicateTuple { key: String },

    /// Deleting a tuple which does not exist.
    #[error("cannot delete a tuple which does not exist: {key}")]
    TupleNotFound { key: String },

    /// Invalid client configuration.
    #[error("invalid client configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
