//! Constant values for shastream hashing operations
//!
//! Sizes and limits of the SHA-2 family as fixed by FIPS PUB 180-4.
//! Round constants and initial hash values live with the engine.

#![no_std]

pub mod utils;
