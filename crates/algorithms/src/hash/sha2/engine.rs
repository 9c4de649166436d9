//! The generic SHA-2 engine and its public facade
//!
//! One engine type serves all six variants. The chaining state is a
//! tagged union over the two word widths; everything else (block size,
//! trailer size, output length, truncation) is read from the variant's
//! static descriptor.

use core::fmt;
use std::sync::Arc;

use byteorder::{BigEndian, ByteOrder};
use tracing::debug;
use zeroize::Zeroize;

use shastream_params::utils::hash::{SHA2_MAX_OUTPUT_SIZE, SHA2_STATE_WORDS};

use super::buffer::BlockBuffer;
use super::compress::{compress256, compress512};
use super::variant::{InitialHash, Variant, VariantDescriptor};
use crate::error::{Error, FatalHook, Result, TracingHook};
use crate::types::Digest;

/// Digest produced by the generic engine; its length is the variant's output size
pub type Sha2Digest = Digest<SHA2_MAX_OUTPUT_SIZE>;

/// Running hash value H(i) for one of the two word widths
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub(crate) enum ChainState {
    Narrow([u32; SHA2_STATE_WORDS]),
    Wide([u64; SHA2_STATE_WORDS]),
}

impl ChainState {
    pub(crate) fn new(initial: InitialHash) -> Self {
        match initial {
            InitialHash::Narrow(words) => ChainState::Narrow(*words),
            InitialHash::Wide(words) => ChainState::Wide(*words),
        }
    }

    /// Fold one block into the state using `rounds` compression rounds
    #[inline]
    pub(crate) fn compress(&mut self, block: &[u8], rounds: usize) -> Result<()> {
        match self {
            ChainState::Narrow(state) => compress256(state, block, rounds),
            ChainState::Wide(state) => compress512(state, block, rounds),
        }
    }

    /// Write word `index` in big-endian order; `out` must be one word long
    pub(crate) fn write_word(&self, index: usize, out: &mut [u8]) {
        match self {
            ChainState::Narrow(state) => BigEndian::write_u32(out, state[index]),
            ChainState::Wide(state) => BigEndian::write_u64(out, state[index]),
        }
    }
}

/// Streaming SHA-2 engine
///
/// Created with a [`Variant`], fed with any number of [`write`](Sha2::write)
/// calls and finished with [`sum`](Sha2::sum). [`snapshot`](Sha2::snapshot)
/// yields an independent copy, which gives interim digests without
/// finishing the original.
///
/// An engine has a single owner; distinct engines share nothing mutable
/// and may run on different threads.
///
/// ```
/// use shastream_algorithms::hash::sha2::{Sha2, Variant};
///
/// let mut engine = Sha2::new(Variant::Sha256);
/// engine.write(b"a ")?.write(b"message")?;
/// assert_eq!(
///     engine.sum()?.to_hex(),
///     "f53c09ca39717a45c62d9aca8f8113eddbfd5f81dcab0b33b1c1834075225e68"
/// );
/// # Ok::<(), shastream_algorithms::error::Error>(())
/// ```
#[derive(Clone)]
pub struct Sha2 {
    pub(super) variant: Variant,
    pub(super) descriptor: &'static VariantDescriptor,
    pub(super) state: ChainState,
    pub(super) buffer: BlockBuffer,
    pub(super) bytes_processed: u64,
    pub(super) finished: bool,
    pub(super) hook: Arc<dyn FatalHook>,
}

/// Wipes the chaining state, the buffered input and the counter, then
/// leaves the engine freshly initialised for the same variant.
impl Zeroize for Sha2 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.clear();
        self.bytes_processed.zeroize();
        self.reset();
    }
}

impl Drop for Sha2 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Sha2 {
    /// Create an engine that reports fatal conditions through [`TracingHook`]
    pub fn new(variant: Variant) -> Self {
        Self::with_hook(variant, Arc::new(TracingHook))
    }

    /// Create an engine with an injected fatal-reporting hook
    pub fn with_hook(variant: Variant, hook: Arc<dyn FatalHook>) -> Self {
        let descriptor = variant.descriptor();
        Self {
            variant,
            descriptor,
            state: ChainState::new(descriptor.initial_hash),
            buffer: BlockBuffer::new(descriptor.block_size),
            bytes_processed: 0,
            finished: false,
            hook,
        }
    }

    /// Create an engine from a numeric algorithm id (1..=6)
    ///
    /// An unknown id is reported through `hook` and no engine is produced.
    pub fn from_id(id: u32, hook: Arc<dyn FatalHook>) -> Result<Self> {
        match Variant::try_from(id) {
            Ok(variant) => Ok(Self::with_hook(variant, hook)),
            Err(err) => {
                hook.report(&err);
                Err(err)
            }
        }
    }

    /// Create an engine from an algorithm name such as `"SHA-512/256"`
    ///
    /// An unknown name is reported through `hook` and no engine is produced.
    pub fn from_name(name: &str, hook: Arc<dyn FatalHook>) -> Result<Self> {
        match name.parse::<Variant>() {
            Ok(variant) => Ok(Self::with_hook(variant, hook)),
            Err(err) => {
                hook.report(&err);
                Err(err)
            }
        }
    }

    /// Hash `data` in one call
    pub fn digest(variant: Variant, data: &[u8]) -> Result<Sha2Digest> {
        let mut engine = Self::new(variant);
        engine.write(data)?;
        engine.sum()
    }

    /// The variant this engine computes
    pub fn algorithm(&self) -> Variant {
        self.variant
    }

    /// Algorithm identifier, e.g. `"SHA-384"`
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Digest length in bytes
    pub fn output_size(&self) -> usize {
        self.descriptor.output_size
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.descriptor.block_size
    }

    /// Message bytes consumed so far
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    /// Whether [`sum`](Sha2::sum) has finalized this engine
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Independent deep copy of this engine's state
    ///
    /// `engine.snapshot().sum()` is the digest of everything written so far;
    /// the original keeps accepting writes. Only the fatal hook is shared.
    pub fn snapshot(&self) -> Self {
        debug!(
            algorithm = self.descriptor.name,
            bytes_processed = self.bytes_processed,
            "snapshot"
        );
        self.clone()
    }

    /// Return to the freshly-initialised state for the same variant
    pub fn reset(&mut self) -> &mut Self {
        self.state = ChainState::new(self.descriptor.initial_hash);
        self.buffer.clear();
        self.bytes_processed = 0;
        self.finished = false;
        self
    }

    /// Report `error` through the hook and hand it back for propagation
    pub(super) fn fatal(&self, error: Error) -> Error {
        self.hook.report(&error);
        error
    }
}

impl fmt::Debug for Sha2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha2")
            .field("algorithm", &self.descriptor.name)
            .field("bytes_processed", &self.bytes_processed)
            .field("buffered", &self.buffer.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
