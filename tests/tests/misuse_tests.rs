//! Fatal-condition reporting through injected hooks

use std::io::Write;
use std::panic;
use std::sync::Arc;

use shastream_algorithms::hash::{Sha2, Variant};
use shastream_api::{Error, PanicHook, RecordingHook};

#[test]
fn write_after_sum_is_reported_and_ignored() {
    let hook = Arc::new(RecordingHook::new());
    let mut engine = Sha2::with_hook(Variant::Sha384, hook.clone());
    engine.write(b"abc").unwrap();
    let digest = engine.sum().unwrap();

    let err = engine.write(b"late").unwrap_err();
    assert!(err.is_misuse());
    assert_eq!(hook.count(), 1);
    assert_eq!(hook.last(), Some(err));
    assert_eq!(engine.sum().unwrap(), digest);
}

#[test]
fn empty_write_after_sum_is_still_misuse() {
    let hook = Arc::new(RecordingHook::new());
    let mut engine = Sha2::with_hook(Variant::Sha224, hook.clone());
    engine.sum().unwrap();

    assert!(engine.write(&[]).is_err());
    assert_eq!(hook.count(), 1);
}

#[test]
fn unknown_selectors_report_once_each() {
    let hook = Arc::new(RecordingHook::new());

    for id in [0u32, 7, 42, u32::MAX] {
        assert!(Sha2::from_id(id, hook.clone()).is_err());
    }
    for name in ["", "md5", "sha3-256", "SHA-512/384"] {
        assert!(Sha2::from_name(name, hook.clone()).is_err());
    }

    assert_eq!(hook.count(), 8);
    assert!(hook
        .errors()
        .iter()
        .all(|err| matches!(err, Error::UnknownVariant { .. })));
}

#[test]
fn panic_hook_aborts_the_operation() {
    let mut engine = Sha2::with_hook(Variant::Sha256, Arc::new(PanicHook));
    engine.sum().unwrap();

    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        let _ = engine.write(b"late");
    }));
    assert!(result.is_err());
}

#[test]
fn io_write_surfaces_engine_errors() {
    let hook = Arc::new(RecordingHook::new());
    let mut engine = Sha2::with_hook(Variant::Sha512, hook.clone());

    write!(engine, "a {}", "message").unwrap();
    let digest = engine.sum().unwrap();
    assert_eq!(digest, Sha2::digest(Variant::Sha512, b"a message").unwrap());

    let err = engine.write_all(b"more").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::Other);
    assert_eq!(hook.count(), 1);
}
