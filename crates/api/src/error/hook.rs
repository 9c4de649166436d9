//! Injectable reporting hooks for fatal conditions
//!
//! An engine calls its hook exactly once for every operation it aborts,
//! then hands the same error back to the caller. The hook decides what
//! "fatal" means for the host: log and continue, record, or panic.

use std::sync::{Mutex, MutexGuard};

use super::types::Error;

/// Receives every fatal condition an engine detects
pub trait FatalHook: Send + Sync {
    /// Report a fatal condition. The aborted operation has not mutated the engine.
    fn report(&self, error: &Error);
}

/// Default hook: logs the error through `tracing` and lets the caller handle the `Err`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHook;

impl FatalHook for TracingHook {
    fn report(&self, error: &Error) {
        tracing::error!(error = %error, misuse = error.is_misuse(), "fatal hash engine condition");
    }
}

/// Hook that terminates the current thread by panicking
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicHook;

impl FatalHook for PanicHook {
    fn report(&self, error: &Error) {
        panic!("fatal hash engine condition: {}", error);
    }
}

/// Hook that keeps every reported error, for tests and embedders
#[derive(Debug, Default)]
pub struct RecordingHook {
    errors: Mutex<Vec<Error>>,
}

impl RecordingHook {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports received so far
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Copy of every report received so far, oldest first
    pub fn errors(&self) -> Vec<Error> {
        self.lock().clone()
    }

    /// Most recent report, if any
    pub fn last(&self) -> Option<Error> {
        self.lock().last().cloned()
    }

    // A poisoned lock still holds valid records.
    fn lock(&self) -> MutexGuard<'_, Vec<Error>> {
        self.errors.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FatalHook for RecordingHook {
    fn report(&self, error: &Error) {
        self.lock().push(error.clone());
    }
}
