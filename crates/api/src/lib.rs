//! Public API traits and types for the shastream library
//!
//! This crate provides the public API surface shared by the shastream
//! workspace: the error taxonomy, the injectable fatal-reporting hooks,
//! and the trait describing a hash algorithm's static parameters.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use error::{FatalHook, PanicHook, RecordingHook, TracingHook};

pub use traits::HashAlgorithm;
