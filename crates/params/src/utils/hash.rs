//! Constants for hash functions

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA-512/224 in bytes
pub const SHA512_224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-512/256 in bytes
pub const SHA512_256_OUTPUT_SIZE: usize = 32;

/// Largest output size in the family
pub const SHA2_MAX_OUTPUT_SIZE: usize = SHA512_OUTPUT_SIZE;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Internal block size of SHA-512 in bytes
pub const SHA512_BLOCK_SIZE: usize = 128;

/// Bytes reserved at the end of the final SHA-256 block for the bit length
pub const SHA256_LENGTH_TRAILER_SIZE: usize = 8;

/// Bytes reserved at the end of the final SHA-512 block for the bit length
pub const SHA512_LENGTH_TRAILER_SIZE: usize = 16;

/// Number of rounds of the SHA-256 compression function
pub const SHA256_ROUNDS: usize = 64;

/// Number of rounds of the SHA-512 compression function
pub const SHA512_ROUNDS: usize = 80;

/// Number of words in the chaining state of every SHA-2 variant
pub const SHA2_STATE_WORDS: usize = 8;

/// Largest message, in bytes, whose bit length fits the 64-bit counter
pub const SHA2_MAX_MESSAGE_BYTES: u64 = u64::MAX >> 3;
