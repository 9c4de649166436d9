//! Error type definitions for hashing operations

use thiserror::Error;

/// Primary error type for hashing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction was attempted with an algorithm that does not exist
    #[error("unknown hash algorithm: {id}")]
    UnknownVariant {
        /// The identifier (numeric id or name) that failed to resolve
        id: String,
    },

    /// `write` was called after the digest had been produced
    #[error("{algorithm}: cannot write after sum, the engine is finished")]
    WriteAfterFinalize {
        /// Name of the algorithm whose engine was misused
        algorithm: &'static str,
    },

    /// The compression primitive received a block of the wrong size
    #[error("{context}: invalid block length (expected {expected}, got {actual})")]
    InvalidBlockLength {
        /// Where the malformed block was detected
        context: &'static str,
        /// Block size of the algorithm in bytes
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Accepting the write would make the message bit length unrepresentable
    #[error("{algorithm}: message length overflow ({processed} bytes processed, {requested} more requested)")]
    LengthOverflow {
        /// Name of the algorithm whose counter would overflow
        algorithm: &'static str,
        /// Bytes already consumed by the engine
        processed: u64,
        /// Bytes the rejected write tried to add
        requested: u64,
    },

    /// Invalid parameter passed to a helper API
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Which parameter or operation was rejected
        context: &'static str,
        /// Why it was rejected
        message: String,
    },
}

/// Result type for hashing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Whether the error is caller misuse, as opposed to a resource limit
    pub fn is_misuse(&self) -> bool {
        !matches!(self, Error::LengthOverflow { .. })
    }
}
