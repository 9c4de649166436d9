//! # shastream
//!
//! Incremental SHA-2 hashing (SHA-224, SHA-256, SHA-384, SHA-512,
//! SHA-512/224 and SHA-512/256) as specified in FIPS PUB 180-4.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! shastream = "0.3"
//! ```
//!
//! ```
//! use shastream::prelude::*;
//!
//! let mut engine = Sha2::new(Variant::Sha512_256);
//! engine.write(b"a message")?;
//!
//! // Interim digest without finishing the engine
//! let interim = engine.snapshot().sum()?;
//! assert_eq!(interim, Sha2::digest(Variant::Sha512_256, b"a message")?);
//!
//! engine.write(b"another optional segment")?;
//! let digest = engine.sum()?;
//! assert_eq!(digest.len(), 32);
//! assert_eq!(hex::encode(&digest), digest.to_hex());
//! # Ok::<(), shastream::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize variant selectors and digests
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`shastream-api`]: error taxonomy, fatal-reporting hooks, algorithm traits
//! - [`shastream-params`]: FIPS 180-4 sizes and limits
//! - [`shastream-algorithms`]: the engine, variants and digest types

#![forbid(unsafe_code)]

pub use shastream_algorithms as algorithms;
pub use shastream_api as api;
pub use shastream_params as params;

/// Common imports for shastream users
pub mod prelude {
    // Re-export error types and hooks
    pub use crate::api::{Error, FatalHook, PanicHook, RecordingHook, Result, TracingHook};

    // Re-export core traits
    pub use crate::algorithms::hash::HashFunction;
    pub use crate::api::HashAlgorithm;

    // Engine, selectors and digests
    pub use crate::algorithms::hash::{
        Sha2, Sha2Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256, Variant,
    };
    pub use crate::algorithms::types::{ConstantTimeEq, Digest};
}
