//! Trait definitions for the shastream API

pub mod hash;

pub use hash::HashAlgorithm;
