//! Cross-checks the engine against the RustCrypto `sha2` crate

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use shastream_algorithms::hash::{HashFunction, Sha2, Variant};
use shastream_algorithms::hash::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use shastream_tests::oracle::reference_digest;
use shastream_tests::random_chunks;

#[test]
fn one_shot_matches_reference_for_all_lengths() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut data = vec![0u8; 600];
    rng.fill_bytes(&mut data);

    for variant in Variant::ALL {
        for len in 0..=data.len() {
            let digest = Sha2::digest(variant, &data[..len]).unwrap();
            assert_eq!(
                digest.as_ref(),
                reference_digest(variant, &data[..len]).as_slice(),
                "{} mismatch at length {}",
                variant,
                len
            );
        }
    }
}

#[test]
fn streaming_matches_reference() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for variant in Variant::ALL {
        for _ in 0..20 {
            let len = (rng.next_u32() % 2048) as usize;
            let mut data = vec![0u8; len];
            rng.fill_bytes(&mut data);

            let mut engine = Sha2::new(variant);
            let mut offset = 0;
            for step in random_chunks(&mut rng, len, 300) {
                engine.write(&data[offset..offset + step]).unwrap();
                offset += step;
            }

            assert_eq!(
                engine.sum().unwrap().as_ref(),
                reference_digest(variant, &data).as_slice(),
                "{} streaming mismatch at length {}",
                variant,
                len
            );
        }
    }
}

#[test]
fn typed_wrappers_match_reference() {
    let data = b"The quick brown fox jumps over the lazy dog";

    fn check<H: HashFunction>(variant: Variant, data: &[u8]) {
        let digest = H::digest(data).unwrap();
        assert_eq!(digest.as_ref(), reference_digest(variant, data).as_slice());
    }

    check::<Sha224>(Variant::Sha224, data);
    check::<Sha256>(Variant::Sha256, data);
    check::<Sha384>(Variant::Sha384, data);
    check::<Sha512>(Variant::Sha512, data);
    check::<Sha512_224>(Variant::Sha512_224, data);
    check::<Sha512_256>(Variant::Sha512_256, data);
}
