//! Independent engines and snapshots on separate threads

use std::sync::Arc;
use std::thread;

use shastream_algorithms::hash::{Sha2, Variant};
use shastream_api::RecordingHook;
use shastream_tests::oracle::reference_digest;

#[test]
fn engines_hash_in_parallel() {
    let handles: Vec<_> = Variant::ALL
        .into_iter()
        .enumerate()
        .map(|(i, variant)| {
            thread::spawn(move || {
                let data = vec![i as u8; 10_000 + i * 37];
                let mut engine = Sha2::new(variant);
                for chunk in data.chunks(333) {
                    engine.write(chunk).unwrap();
                }
                (variant, data, engine.sum().unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (variant, data, digest) = handle.join().unwrap();
        assert_eq!(digest.as_ref(), reference_digest(variant, &data).as_slice());
    }
}

#[test]
fn snapshots_finish_on_other_threads() {
    let hook = Arc::new(RecordingHook::new());
    let mut engine = Sha2::with_hook(Variant::Sha256, hook.clone());
    let mut written = Vec::new();
    let mut handles = Vec::new();

    for round in 0..8u8 {
        let chunk = vec![round; 100];
        engine.write(&chunk).unwrap();
        written.extend_from_slice(&chunk);

        let snapshot = engine.snapshot();
        let prefix = written.clone();
        handles.push(thread::spawn(move || {
            let mut snapshot = snapshot;
            (prefix, snapshot.sum().unwrap())
        }));
    }

    for handle in handles {
        let (prefix, digest) = handle.join().unwrap();
        assert_eq!(digest.as_ref(), reference_digest(Variant::Sha256, &prefix).as_slice());
    }
    assert!(!engine.is_finished());
    assert_eq!(hook.count(), 0);
}

#[test]
fn shared_hook_collects_reports_from_all_threads() {
    let hook = Arc::new(RecordingHook::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let hook = hook.clone();
            thread::spawn(move || {
                let mut engine = Sha2::with_hook(Variant::Sha512_224, hook);
                engine.sum().unwrap();
                engine.write(b"late").is_err()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(hook.count(), 4);
}
