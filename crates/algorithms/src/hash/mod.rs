//! Hash function implementations
//!
//! The SHA-2 family is provided by one generic streaming engine,
//! [`sha2::Sha2`], plus thin typed wrappers that implement
//! [`HashFunction`] with exactly-sized digests.

use crate::error::Result;
use shastream_api::HashAlgorithm;

pub mod sha2;

pub use sha2::{
    Sha2, Sha2Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256, Variant,
};

/// Common interface of the typed hash wrappers
pub trait HashFunction: Sized {
    /// Static parameters of the algorithm
    type Algorithm: HashAlgorithm;

    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh hasher
    fn new() -> Self;

    /// Feed more message bytes
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest; later calls return the same value
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest length in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> String {
        Self::Algorithm::name()
    }

    /// Hash `data` in one call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
