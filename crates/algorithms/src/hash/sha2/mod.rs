//! SHA-2 hash function implementations
//!
//! This module implements the SHA-2 family of hash functions as specified
//! in FIPS PUB 180-4: SHA-224, SHA-256, SHA-384, SHA-512, SHA-512/224 and
//! SHA-512/256. A single engine, parameterized by a [`VariantDescriptor`],
//! serves all six; the engine state is zeroized on drop.

use shastream_api::HashAlgorithm;
use shastream_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE, SHA384_OUTPUT_SIZE,
    SHA512_224_OUTPUT_SIZE, SHA512_256_OUTPUT_SIZE, SHA512_BLOCK_SIZE, SHA512_OUTPUT_SIZE,
};

use crate::error::Result;
use crate::hash::HashFunction;
use crate::types::Digest;

mod buffer;
mod compress;
mod constants;
mod engine;
mod finalize;
mod ingest;
mod io;
mod schedule;
mod variant;

pub use engine::{Sha2, Sha2Digest};
pub use variant::{InitialHash, Truncation, Variant, VariantDescriptor, WordWidth};

// Typed wrappers: a marker type carrying the static parameters, and a
// newtype over the generic engine fixed to one variant.
macro_rules! sha2_variant {
    ($(#[$meta:meta])* $name:ident, $marker:ident, $variant:expr, $output:expr, $block:expr, $id:literal) => {
        #[doc = concat!("Marker type for ", $id, " algorithm")]
        pub enum $marker {}

        impl HashAlgorithm for $marker {
            const OUTPUT_SIZE: usize = $output;
            const BLOCK_SIZE: usize = $block;
            const ALGORITHM_ID: &'static str = $id;
        }

        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name(Sha2);

        impl $name {
            /// Independent copy for interim digests
            pub fn snapshot(&self) -> Self {
                Self(self.0.snapshot())
            }

            /// The underlying generic engine
            pub fn engine(&self) -> &Sha2 {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as HashFunction>::new()
            }
        }

        impl HashFunction for $name {
            type Algorithm = $marker;
            type Output = Digest<$output>;

            fn new() -> Self {
                Self(Sha2::new($variant))
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                self.0.write(data)?;
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let digest = self.0.sum()?;
                Digest::from_slice(&digest)
            }
        }
    };
}

sha2_variant!(
    /// SHA-224 hash function
    Sha224, Sha224Algorithm, Variant::Sha224, SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, "SHA-224"
);
sha2_variant!(
    /// SHA-256 hash function
    Sha256, Sha256Algorithm, Variant::Sha256, SHA256_OUTPUT_SIZE, SHA256_BLOCK_SIZE, "SHA-256"
);
sha2_variant!(
    /// SHA-384 hash function
    Sha384, Sha384Algorithm, Variant::Sha384, SHA384_OUTPUT_SIZE, SHA512_BLOCK_SIZE, "SHA-384"
);
sha2_variant!(
    /// SHA-512 hash function
    Sha512, Sha512Algorithm, Variant::Sha512, SHA512_OUTPUT_SIZE, SHA512_BLOCK_SIZE, "SHA-512"
);
sha2_variant!(
    /// SHA-512/224 hash function
    Sha512_224, Sha512_224Algorithm, Variant::Sha512_224, SHA512_224_OUTPUT_SIZE, SHA512_BLOCK_SIZE, "SHA-512/224"
);
sha2_variant!(
    /// SHA-512/256 hash function
    Sha512_256, Sha512_256Algorithm, Variant::Sha512_256, SHA512_256_OUTPUT_SIZE, SHA512_BLOCK_SIZE, "SHA-512/256"
);
