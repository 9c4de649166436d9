//! Static parameterization of the six SHA-2 variants
//!
//! One [`VariantDescriptor`] per variant carries everything that differs
//! between them: word width, block size, round count, output length,
//! initial hash value and truncation rule. The engine selects a
//! descriptor once at construction and never branches on the variant
//! itself afterwards.

use core::fmt;
use core::str::FromStr;

use shastream_params::utils::hash::{
    SHA224_OUTPUT_SIZE, SHA256_BLOCK_SIZE, SHA256_LENGTH_TRAILER_SIZE, SHA256_OUTPUT_SIZE,
    SHA256_ROUNDS, SHA2_STATE_WORDS, SHA384_OUTPUT_SIZE, SHA512_224_OUTPUT_SIZE,
    SHA512_256_OUTPUT_SIZE, SHA512_BLOCK_SIZE, SHA512_LENGTH_TRAILER_SIZE, SHA512_OUTPUT_SIZE,
    SHA512_ROUNDS,
};

use super::constants::{
    SHA224_IV, SHA256_IV, SHA384_IV, SHA512_224_IV, SHA512_256_IV, SHA512_IV,
};
use crate::error::{Error, Result};

/// One of the six standardized SHA-2 parameterizations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA-512/224
    Sha512_224,
    /// SHA-512/256
    Sha512_256,
}

/// Width of the words the compression function operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordWidth {
    /// 32-bit words: SHA-224 and SHA-256
    W32,
    /// 64-bit words: SHA-384, SHA-512 and SHA-512/t
    W64,
}

impl WordWidth {
    /// Word size in bytes
    pub const fn bytes(self) -> usize {
        match self {
            WordWidth::W32 => 4,
            WordWidth::W64 => 8,
        }
    }
}

/// Initial hash value H(0) for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialHash {
    /// Eight 32-bit words
    Narrow(&'static [u32; SHA2_STATE_WORDS]),
    /// Eight 64-bit words
    Wide(&'static [u64; SHA2_STATE_WORDS]),
}

/// How the digest is cut out of the big-endian serialized hash state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Keep the first `words` state words
    WholeWords {
        /// Number of leading words kept
        words: usize,
    },
    /// Keep the first `words` state words plus the upper `tail_bytes` of the next one
    PartialWord {
        /// Number of leading words kept whole
        words: usize,
        /// Leading bytes kept from the following word
        tail_bytes: usize,
    },
}

impl Truncation {
    /// Digest length this rule produces for the given word width
    pub const fn output_len(self, width: WordWidth) -> usize {
        match self {
            Truncation::WholeWords { words } => words * width.bytes(),
            Truncation::PartialWord { words, tail_bytes } => words * width.bytes() + tail_bytes,
        }
    }
}

/// Static parameters of one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    /// Algorithm identifier, e.g. `"SHA-512/224"`
    pub name: &'static str,
    /// Word width of the state and schedule
    pub word_width: WordWidth,
    /// Block size in bytes
    pub block_size: usize,
    /// Bytes reserved for the big-endian bit length in the final block
    pub trailer_size: usize,
    /// Number of compression rounds
    pub rounds: usize,
    /// Digest length in bytes
    pub output_size: usize,
    /// Initial hash value
    pub initial_hash: InitialHash,
    /// Digest extraction rule
    pub truncation: Truncation,
}

const SHA224_DESCRIPTOR: VariantDescriptor = VariantDescriptor {
    name: "SHA-224",
    word_width: WordWidth::W32,
    block_size: SHA256_BLOCK_SIZE,
    trailer_size: SHA256_LENGTH_TRAILER_SIZE,
    rounds: SHA256_ROUNDS,
    output_size: SHA224_OUTPUT_SIZE,
    initial_hash: InitialHash::Narrow(&SHA224_IV),
    truncation: Truncation::WholeWords { words: 7 },
};

const SHA256_DESCRIPTOR: VariantDescriptor = VariantDescriptor {
    name: "SHA-256",
    word_width: WordWidth::W32,
    block_size: SHA256_BLOCK_SIZE,
    trailer_size: SHA256_LENGTH_TRAILER_SIZE,
    rounds: SHA256_ROUNDS,
    output_size: SHA256_OUTPUT_SIZE,
    initial_hash: InitialHash::Narrow(&SHA256_IV),
    truncation: Truncation::WholeWords { words: 8 },
};

const SHA384_DESCRIPTOR: VariantDescriptor = VariantDescriptor {
    name: "SHA-384",
    word_width: WordWidth::W64,
    block_size: SHA512_BLOCK_SIZE,
    trailer_size: SHA512_LENGTH_TRAILER_SIZE,
    rounds: SHA512_ROUNDS,
    output_size: SHA384_OUTPUT_SIZE,
    initial_hash: InitialHash::Wide(&SHA384_IV),
    truncation: Truncation::WholeWords { words: 6 },
};

const SHA512_DESCRIPTOR: VariantDescriptor = VariantDescriptor {
    name: "SHA-512",
    word_width: WordWidth::W64,
    block_size: SHA512_BLOCK_SIZE,
    trailer_size: SHA512_LENGTH_TRAILER_SIZE,
    rounds: SHA512_ROUNDS,
    output_size: SHA512_OUTPUT_SIZE,
    initial_hash: InitialHash::Wide(&SHA512_IV),
    truncation: Truncation::WholeWords { words: 8 },
};

const SHA512_224_DESCRIPTOR: VariantDescriptor = VariantDescriptor {
    name: "SHA-512/224",
    word_width: WordWidth::W64,
    block_size: SHA512_BLOCK_SIZE,
    trailer_size: SHA512_LENGTH_TRAILER_SIZE,
    rounds: SHA512_ROUNDS,
    output_size: SHA512_224_OUTPUT_SIZE,
    initial_hash: InitialHash::Wide(&SHA512_224_IV),
    truncation: Truncation::PartialWord { words: 3, tail_bytes: 4 },
};

const SHA512_256_DESCRIPTOR: VariantDescriptor = VariantDescriptor {
    name: "SHA-512/256",
    word_width: WordWidth::W64,
    block_size: SHA512_BLOCK_SIZE,
    trailer_size: SHA512_LENGTH_TRAILER_SIZE,
    rounds: SHA512_ROUNDS,
    output_size: SHA512_256_OUTPUT_SIZE,
    initial_hash: InitialHash::Wide(&SHA512_256_IV),
    truncation: Truncation::WholeWords { words: 4 },
};

impl Variant {
    /// Every variant, in numeric-id order
    pub const ALL: [Variant; 6] = [
        Variant::Sha224,
        Variant::Sha256,
        Variant::Sha384,
        Variant::Sha512,
        Variant::Sha512_224,
        Variant::Sha512_256,
    ];

    /// Static parameters of this variant
    pub const fn descriptor(self) -> &'static VariantDescriptor {
        match self {
            Variant::Sha224 => &SHA224_DESCRIPTOR,
            Variant::Sha256 => &SHA256_DESCRIPTOR,
            Variant::Sha384 => &SHA384_DESCRIPTOR,
            Variant::Sha512 => &SHA512_DESCRIPTOR,
            Variant::Sha512_224 => &SHA512_224_DESCRIPTOR,
            Variant::Sha512_256 => &SHA512_256_DESCRIPTOR,
        }
    }

    /// Numeric identifier; 0 is reserved for "no algorithm"
    pub const fn id(self) -> u32 {
        match self {
            Variant::Sha224 => 1,
            Variant::Sha256 => 2,
            Variant::Sha384 => 3,
            Variant::Sha512 => 4,
            Variant::Sha512_224 => 5,
            Variant::Sha512_256 => 6,
        }
    }

    /// Algorithm identifier, e.g. `"SHA-256"`
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Word width of this variant's family
    pub const fn word_width(self) -> WordWidth {
        self.descriptor().word_width
    }

    /// Block size in bytes
    pub const fn block_size(self) -> usize {
        self.descriptor().block_size
    }

    /// Digest length in bytes
    pub const fn output_size(self) -> usize {
        self.descriptor().output_size
    }

    /// Number of compression rounds
    pub const fn rounds(self) -> usize {
        self.descriptor().rounds
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for Variant {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.id() == id)
            .ok_or_else(|| Error::UnknownVariant { id: id.to_string() })
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts the canonical name in any case, with or without the dash,
    /// and with `/`, `_` or `t` separating the SHA-512/t truncation.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-')
            .map(|c| match c {
                '/' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "sha224" => Ok(Variant::Sha224),
            "sha256" => Ok(Variant::Sha256),
            "sha384" => Ok(Variant::Sha384),
            "sha512" => Ok(Variant::Sha512),
            "sha512_224" | "sha512t224" => Ok(Variant::Sha512_224),
            "sha512_256" | "sha512t256" => Ok(Variant::Sha512_256),
            _ => Err(Error::UnknownVariant { id: s.to_string() }),
        }
    }
}
