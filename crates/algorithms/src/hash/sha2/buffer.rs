//! Partial-block accumulator

use zeroize::Zeroize;

use shastream_params::utils::hash::SHA512_BLOCK_SIZE;

/// Fixed-capacity byte buffer holding at most one block of pending input
///
/// Storage is sized for the widest block; `block_size` limits how much of
/// it a given variant uses. Outside of padding `len < block_size` holds.
#[derive(Clone)]
pub(crate) struct BlockBuffer {
    data: [u8; SHA512_BLOCK_SIZE],
    len: usize,
    block_size: usize,
}

impl BlockBuffer {
    pub(crate) fn new(block_size: usize) -> Self {
        debug_assert!(block_size <= SHA512_BLOCK_SIZE);
        Self {
            data: [0u8; SHA512_BLOCK_SIZE],
            len: 0,
            block_size,
        }
    }

    /// Number of valid leading bytes (the fill level)
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes still needed to complete the block
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.block_size - self.len
    }

    /// Append as much of `input` as fits and return how many bytes were taken
    pub(crate) fn fill(&mut self, input: &[u8]) -> usize {
        let take = input.len().min(self.remaining());
        self.data[self.len..self.len + take].copy_from_slice(&input[..take]);
        self.len += take;
        take
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.block_size
    }

    /// The whole block, valid only once [`is_full`](Self::is_full)
    #[inline]
    pub(crate) fn block(&self) -> &[u8] {
        &self.data[..self.block_size]
    }

    /// Mutable view of the whole block, used while padding
    #[inline]
    pub(crate) fn block_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.block_size]
    }

    /// Mark the buffer empty without touching its bytes
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.len = 0;
    }

    /// Wipe the contents and mark the buffer empty
    pub(crate) fn clear(&mut self) {
        self.data.zeroize();
        self.len = 0;
    }
}
