//! Streaming SHA-2 engine with constant-time digest handling
//!
//! This crate implements the six SHA-2 hash functions of FIPS PUB 180-4
//! behind one incremental engine. Messages are fed through any number of
//! writes, interim digests come from cheap snapshots, and misuse is
//! reported once through an injectable hook before being returned as an
//! error.
//!
//! # Security Features
//!
//! - Engine state, buffered input and message schedules are zeroized
//! - Digests compare in constant time

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{
    HashFunction, Sha2, Sha2Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
    Variant,
};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest};
