//! Known-answer vector suites
//!
//! Vectors live as TOML under `src/vectors/data`. Each group names an
//! algorithm and a test type:
//!
//! - `AFT`: digest of `msg`
//! - `MCT`: Monte Carlo chaining from `seed`
//! - `LDT`: `content` repeated to `length` bytes, fed as streaming writes

pub mod loader;
pub mod runner;

pub use error::{Result, VectorError};
pub use loader::load_suite;
pub use model::{TestCase, TestGroup, TestSuite, TestType};
pub use runner::{run_case, run_suite, SuiteReport};
