//! Error handling for the shastream ecosystem
//!
//! Every error here is a contract violation rather than a data error: no
//! byte pattern is ever invalid input for a hash function. Errors are
//! reported once through a [`FatalHook`] and then returned to the caller.

pub mod hook;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export the reporting hooks
pub use hook::{FatalHook, PanicHook, RecordingHook, TracingHook};
