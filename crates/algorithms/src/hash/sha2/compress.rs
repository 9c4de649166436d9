//! SHA-2 compression functions (FIPS PUB 180-4 §6.2.2 and §6.4.2)
//!
//! Both word widths run eight rounds per loop iteration. Instead of
//! shuffling the eight working variables after every round, each round
//! is invoked with its arguments renamed one position to the right, so
//! after eight rounds every variable is back in its original slot.

use shastream_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_ROUNDS, SHA2_STATE_WORDS, SHA512_BLOCK_SIZE, SHA512_ROUNDS,
};

use super::constants::{K256, K512};
use super::schedule::{schedule256, schedule512};
use crate::error::{validate, Result};

#[inline(always)]
fn ch<T>(x: T, y: T, z: T) -> T
where
    T: Copy + core::ops::BitAnd<Output = T> + core::ops::BitXor<Output = T> + core::ops::Not<Output = T>,
{
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj<T>(x: T, y: T, z: T) -> T
where
    T: Copy + core::ops::BitAnd<Output = T> + core::ops::BitXor<Output = T>,
{
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0 for 32-bit words (4.4)
#[inline(always)]
fn big_sigma0_32(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1 for 32-bit words (4.5)
#[inline(always)]
fn big_sigma1_32(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Σ0 for 64-bit words (4.10)
#[inline(always)]
fn big_sigma0_64(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

/// Σ1 for 64-bit words (4.11)
#[inline(always)]
fn big_sigma1_64(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

// One round in renamed form: `d` receives the new e, `h` the new a.
macro_rules! round {
    ($sigma0:ident, $sigma1:ident, $k:expr, $w:expr,
     $a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident) => {
        let t1 = $h
            .wrapping_add($sigma1($e))
            .wrapping_add(ch($e, $f, $g))
            .wrapping_add($k)
            .wrapping_add($w);
        let t2 = $sigma0($a).wrapping_add(maj($a, $b, $c));
        $d = $d.wrapping_add(t1);
        $h = t1.wrapping_add(t2);
    };
}

macro_rules! eight_rounds {
    ($sigma0:ident, $sigma1:ident, $k:expr, $w:expr, $i:expr,
     $a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident) => {
        round!($sigma0, $sigma1, $k[$i], $w[$i], $a, $b, $c, $d, $e, $f, $g, $h);
        round!($sigma0, $sigma1, $k[$i + 1], $w[$i + 1], $h, $a, $b, $c, $d, $e, $f, $g);
        round!($sigma0, $sigma1, $k[$i + 2], $w[$i + 2], $g, $h, $a, $b, $c, $d, $e, $f);
        round!($sigma0, $sigma1, $k[$i + 3], $w[$i + 3], $f, $g, $h, $a, $b, $c, $d, $e);
        round!($sigma0, $sigma1, $k[$i + 4], $w[$i + 4], $e, $f, $g, $h, $a, $b, $c, $d);
        round!($sigma0, $sigma1, $k[$i + 5], $w[$i + 5], $d, $e, $f, $g, $h, $a, $b, $c);
        round!($sigma0, $sigma1, $k[$i + 6], $w[$i + 6], $c, $d, $e, $f, $g, $h, $a, $b);
        round!($sigma0, $sigma1, $k[$i + 7], $w[$i + 7], $b, $c, $d, $e, $f, $g, $h, $a);
    };
}

// Round counts come from the variant descriptor; the unrolled loop needs
// a multiple of eight that the schedule covers.
fn check_rounds(context: &'static str, rounds: usize, max: usize) -> Result<()> {
    validate::parameter(
        rounds > 0 && rounds <= max && rounds % 8 == 0,
        context,
        "round count must be a multiple of 8 within the schedule length",
    )
}

/// Fold one 64-byte block into a SHA-224/SHA-256 chaining state
///
/// `block` must be exactly one block long; anything else is an ingestion
/// bug and is rejected with [`Error::InvalidBlockLength`](crate::error::Error).
pub(crate) fn compress256(
    state: &mut [u32; SHA2_STATE_WORDS],
    block: &[u8],
    rounds: usize,
) -> Result<()> {
    let block = validate::block::<SHA256_BLOCK_SIZE>("SHA-256 compress", block)?;
    check_rounds("SHA-256 compress", rounds, SHA256_ROUNDS)?;
    let w = schedule256(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in (0..rounds).step_by(8) {
        eight_rounds!(big_sigma0_32, big_sigma1_32, K256, w, i, a, b, c, d, e, f, g, h);
    }

    // Davies-Meyer feed-forward
    for (word, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(working);
    }

    Ok(())
}

/// Fold one 128-byte block into a SHA-384/SHA-512/SHA-512/t chaining state
pub(crate) fn compress512(
    state: &mut [u64; SHA2_STATE_WORDS],
    block: &[u8],
    rounds: usize,
) -> Result<()> {
    let block = validate::block::<SHA512_BLOCK_SIZE>("SHA-512 compress", block)?;
    check_rounds("SHA-512 compress", rounds, SHA512_ROUNDS)?;
    let w = schedule512(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in (0..rounds).step_by(8) {
        eight_rounds!(big_sigma0_64, big_sigma1_64, K512, w, i, a, b, c, d, e, f, g, h);
    }

    for (word, working) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(working);
    }

    Ok(())
}
