//! Streaming ingestion: assembling arbitrary writes into whole blocks

use tracing::trace;

use shastream_params::utils::hash::SHA2_MAX_MESSAGE_BYTES;

use super::engine::Sha2;
use crate::error::{validate, Error, Result};

impl Sha2 {
    /// Append `data` to the message
    ///
    /// May be called any number of times before [`sum`](Sha2::sum); the
    /// digest only depends on the concatenation of everything written.
    /// Writing to a finished engine, or past the maximum message length,
    /// is reported through the fatal hook and leaves the engine unchanged.
    pub fn write(&mut self, data: &[u8]) -> Result<&mut Self> {
        match self.ingest(data) {
            Ok(()) => Ok(self),
            Err(err) => Err(self.fatal(err)),
        }
    }

    fn ingest(&mut self, mut input: &[u8]) -> Result<()> {
        if self.finished {
            return Err(Error::WriteAfterFinalize {
                algorithm: self.descriptor.name,
            });
        }

        let total = validate::message_length(
            self.descriptor.name,
            self.bytes_processed,
            input.len() as u64,
            SHA2_MAX_MESSAGE_BYTES,
        )?;

        // Not enough to complete a block: just buffer it.
        if input.len() < self.buffer.remaining() {
            self.buffer.fill(input);
            self.bytes_processed = total;
            trace!(
                algorithm = self.descriptor.name,
                buffered = self.buffer.len(),
                "write buffered"
            );
            return Ok(());
        }

        let mut blocks = 0usize;

        // Top up the pending partial block and fold it in.
        if !self.buffer.is_empty() {
            let taken = self.buffer.fill(input);
            input = &input[taken..];
            debug_assert!(self.buffer.is_full());
            self.state.compress(self.buffer.block(), self.descriptor.rounds)?;
            self.buffer.reset();
            blocks += 1;
        }

        // Whole blocks go straight from the caller's slice.
        let mut chunks = input.chunks_exact(self.descriptor.block_size);
        for block in &mut chunks {
            self.state.compress(block, self.descriptor.rounds)?;
            blocks += 1;
        }

        self.buffer.fill(chunks.remainder());
        self.bytes_processed = total;

        trace!(
            algorithm = self.descriptor.name,
            blocks,
            buffered = self.buffer.len(),
            bytes_processed = self.bytes_processed,
            "write compressed"
        );

        Ok(())
    }
}
