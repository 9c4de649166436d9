//! Error handling for the SHA-2 engine
//!
//! The engine shares the workspace-wide error taxonomy from
//! `shastream-api`; this module adds the validation helpers the
//! primitives use to build those errors.

pub use shastream_api::error::{Error, Result};
pub use shastream_api::error::{FatalHook, PanicHook, RecordingHook, TracingHook};

// Include the validation submodule
pub mod validate;
