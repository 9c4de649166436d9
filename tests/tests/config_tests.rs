//! Variant selectors and digests in configuration files

use serde::Deserialize;
use shastream_algorithms::hash::{Sha2, Sha2Digest, Variant};

#[derive(Debug, Deserialize)]
struct IntegrityConfig {
    algorithm: Variant,
    expected: Sha2Digest,
}

#[test]
fn config_selects_variant_and_expected_digest() {
    let config: IntegrityConfig = toml::from_str(
        r#"
        algorithm = "Sha512_256"
        expected = "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
        "#,
    )
    .unwrap();

    assert_eq!(config.algorithm, Variant::Sha512_256);
    assert_eq!(Sha2::digest(config.algorithm, b"abc").unwrap(), config.expected);
}

#[test]
fn malformed_digest_is_rejected() {
    let result: Result<IntegrityConfig, _> = toml::from_str(
        r#"
        algorithm = "Sha256"
        expected = "not hex"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn numeric_ids_and_names_agree() {
    for variant in Variant::ALL {
        assert_eq!(Variant::try_from(variant.id()).unwrap(), variant);
        assert_eq!(variant.name().parse::<Variant>().unwrap(), variant);
    }
}
