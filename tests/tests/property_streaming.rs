//! Property-based tests for streaming writes and snapshots

use proptest::prelude::*;
use shastream_algorithms::hash::{Sha2, Variant};
use shastream_tests::oracle::reference_digest;

fn any_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

/// A message together with sorted cut points inside it
fn message_with_cuts() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    prop::collection::vec(any::<u8>(), 0..=700).prop_flat_map(|msg| {
        let len = msg.len();
        let cuts = prop::collection::vec(0..=len, 0..8).prop_map(|mut cuts| {
            cuts.sort_unstable();
            cuts
        });
        (Just(msg), cuts)
    })
}

proptest! {
    #[test]
    fn digest_depends_only_on_concatenation(
        variant in any_variant(),
        (msg, cuts) in message_with_cuts()
    ) {
        let mut engine = Sha2::new(variant);
        let mut start = 0;
        for &cut in &cuts {
            engine.write(&msg[start..cut]).unwrap();
            start = cut;
        }
        engine.write(&msg[start..]).unwrap();

        prop_assert_eq!(engine.bytes_processed(), msg.len() as u64);
        prop_assert_eq!(engine.sum().unwrap(), Sha2::digest(variant, &msg).unwrap());
    }

    #[test]
    fn snapshot_sum_is_digest_of_prefix(
        variant in any_variant(),
        prefix in prop::collection::vec(any::<u8>(), 0..=400),
        suffix in prop::collection::vec(any::<u8>(), 0..=400)
    ) {
        let mut engine = Sha2::new(variant);
        engine.write(&prefix).unwrap();

        let interim = engine.snapshot().sum().unwrap();
        let expected_prefix = reference_digest(variant, &prefix);
        prop_assert_eq!(interim.as_ref(), expected_prefix.as_slice());

        engine.write(&suffix).unwrap();
        let mut whole = prefix.clone();
        whole.extend_from_slice(&suffix);
        let digest = engine.sum().unwrap();
        let expected_whole = reference_digest(variant, &whole);
        prop_assert_eq!(digest.as_ref(), expected_whole.as_slice());
    }

    #[test]
    fn sum_is_stable(
        variant in any_variant(),
        msg in prop::collection::vec(any::<u8>(), 0..=300)
    ) {
        let mut engine = Sha2::new(variant);
        engine.write(&msg).unwrap();
        let first = engine.sum().unwrap();
        prop_assert_eq!(first.len(), variant.output_size());
        prop_assert_eq!(engine.sum().unwrap(), first);
    }
}
