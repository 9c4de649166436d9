//! Test vectors and helpers for the shastream library
pub mod oracle;
pub mod vectors;

use rand::Rng;

/// Split `len` into random chunk lengths, zero-length chunks included
pub fn random_chunks<R: Rng>(rng: &mut R, len: usize, max_chunk: usize) -> Vec<usize> {
    let mut chunks = Vec::new();
    let mut remaining = len;
    while remaining > 0 {
        let step = rng.gen_range(0..=remaining.min(max_chunk));
        chunks.push(step);
        remaining -= step;
    }
    chunks
}
