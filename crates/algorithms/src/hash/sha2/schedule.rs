//! Message schedule expansion (FIPS PUB 180-4 §6.2.2 step 1, §6.4.2 step 1)
//!
//! The schedule is a pure function of one block. It lives on the caller's
//! stack and is wiped when dropped, so concurrent engines never share it.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroizing;

use shastream_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_ROUNDS, SHA512_BLOCK_SIZE, SHA512_ROUNDS,
};

/// Expanded SHA-256 schedule W[0..64]
pub(crate) type Schedule256 = Zeroizing<[u32; SHA256_ROUNDS]>;

/// Expanded SHA-512 schedule W[0..80]
pub(crate) type Schedule512 = Zeroizing<[u64; SHA512_ROUNDS]>;

/// σ0 for 32-bit words (4.6)
#[inline(always)]
pub(crate) fn small_sigma0_32(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1 for 32-bit words (4.7)
#[inline(always)]
pub(crate) fn small_sigma1_32(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// σ0 for 64-bit words (4.12)
#[inline(always)]
pub(crate) fn small_sigma0_64(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

/// σ1 for 64-bit words (4.13)
#[inline(always)]
pub(crate) fn small_sigma1_64(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// Expand one 64-byte block into 64 schedule words
pub(crate) fn schedule256(block: &[u8; SHA256_BLOCK_SIZE]) -> Schedule256 {
    let mut w = Zeroizing::new([0u32; SHA256_ROUNDS]);

    BigEndian::read_u32_into(block, &mut w[..16]);

    for i in 16..SHA256_ROUNDS {
        w[i] = small_sigma1_32(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0_32(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    w
}

/// Expand one 128-byte block into 80 schedule words
pub(crate) fn schedule512(block: &[u8; SHA512_BLOCK_SIZE]) -> Schedule512 {
    let mut w = Zeroizing::new([0u64; SHA512_ROUNDS]);

    BigEndian::read_u64_into(block, &mut w[..16]);

    for i in 16..SHA512_ROUNDS {
        w[i] = small_sigma1_64(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0_64(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    w
}
