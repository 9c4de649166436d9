//! Padding, length tagging and digest extraction (FIPS PUB 180-4 §5.1, §6)

use byteorder::{BigEndian, ByteOrder};
use tracing::{debug, trace};

use shastream_params::utils::hash::SHA2_MAX_OUTPUT_SIZE;

use super::engine::{Sha2, Sha2Digest};
use super::variant::Truncation;
use crate::error::Result;
use crate::types::Digest;

/// Write the big-endian message bit length into the last `trailer_size` bytes
///
/// For the 64-bit family the trailer is 128 bits wide; message lengths are
/// capped below 2^64 bits, so its upper half is always zero.
fn write_length_trailer(block: &mut [u8], trailer_size: usize, bit_len: u64) {
    let end = block.len();
    let trailer = &mut block[end - trailer_size..];
    let (high, low) = trailer.split_at_mut(trailer_size - 8);
    high.fill(0);
    BigEndian::write_u64(low, bit_len);
}

impl Sha2 {
    /// Produce the digest of everything written so far and finish the engine
    ///
    /// The first call pads and compresses the final block(s); later calls
    /// return the same digest without touching the state again. Use
    /// [`snapshot`](Sha2::snapshot) first to keep the engine writable.
    pub fn sum(&mut self) -> Result<Sha2Digest> {
        if !self.finished {
            if let Err(err) = self.finalize() {
                return Err(self.fatal(err));
            }
        }
        self.extract()
    }

    fn finalize(&mut self) -> Result<()> {
        let block_size = self.descriptor.block_size;
        let trailer_size = self.descriptor.trailer_size;
        let fill = self.buffer.len();
        let bit_len = self.bytes_processed << 3;

        // Terminating 1 bit, then zeros to the end of the block.
        let block = self.buffer.block_mut();
        block[fill] = 0x80;
        block[fill + 1..].fill(0);

        if fill >= block_size - trailer_size {
            // No room for the length: flush a pure padding block first.
            trace!(algorithm = self.descriptor.name, fill, "padding spills into a second block");
            self.state.compress(self.buffer.block(), self.descriptor.rounds)?;
            self.buffer.block_mut().fill(0);
        }

        write_length_trailer(self.buffer.block_mut(), trailer_size, bit_len);
        self.state.compress(self.buffer.block(), self.descriptor.rounds)?;

        self.buffer.clear();
        self.finished = true;

        debug!(
            algorithm = self.descriptor.name,
            bytes_processed = self.bytes_processed,
            "finalized"
        );
        Ok(())
    }

    /// Serialize the chaining state big-endian and apply the truncation rule
    fn extract(&self) -> Result<Sha2Digest> {
        let width = self.descriptor.word_width.bytes();
        let mut out = [0u8; SHA2_MAX_OUTPUT_SIZE];

        let (words, tail_bytes) = match self.descriptor.truncation {
            Truncation::WholeWords { words } => (words, 0),
            Truncation::PartialWord { words, tail_bytes } => (words, tail_bytes),
        };

        for index in 0..words {
            self.state
                .write_word(index, &mut out[index * width..(index + 1) * width]);
        }

        if tail_bytes > 0 {
            // Upper bytes of the next word, e.g. the high 32 bits for SHA-512/224.
            let mut word = [0u8; 8];
            self.state.write_word(words, &mut word[..width]);
            let start = words * width;
            out[start..start + tail_bytes].copy_from_slice(&word[..tail_bytes]);
        }

        let len = self.descriptor.truncation.output_len(self.descriptor.word_width);
        debug_assert_eq!(len, self.descriptor.output_size);
        Digest::with_len(out, len)
    }
}
