//! Independent SHA-2 implementation used as a cross-check

use sha2::Digest as _;
use shastream_algorithms::hash::Variant;

/// Digest of `data` computed by the RustCrypto `sha2` crate
pub fn reference_digest(variant: Variant, data: &[u8]) -> Vec<u8> {
    match variant {
        Variant::Sha224 => sha2::Sha224::digest(data).to_vec(),
        Variant::Sha256 => sha2::Sha256::digest(data).to_vec(),
        Variant::Sha384 => sha2::Sha384::digest(data).to_vec(),
        Variant::Sha512 => sha2::Sha512::digest(data).to_vec(),
        Variant::Sha512_224 => sha2::Sha512_224::digest(data).to_vec(),
        Variant::Sha512_256 => sha2::Sha512_256::digest(data).to_vec(),
    }
}
