//! Static description of a hash algorithm

/// Compile-time parameters of a hash algorithm
///
/// Implemented by zero-sized marker types so that typed wrappers can
/// carry their output size in the type system.
pub trait HashAlgorithm {
    /// Digest length in bytes
    const OUTPUT_SIZE: usize;

    /// Block size consumed by one compression call, in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm identifier, e.g. `"SHA-512/256"`
    const ALGORITHM_ID: &'static str;

    /// Algorithm name as an owned string
    fn name() -> String {
        Self::ALGORITHM_ID.to_string()
    }
}
