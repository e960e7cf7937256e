//! Integration tests for the EdDSA schemes

use edcrypt::prelude::*;
use rand::rngs::OsRng;
use std::sync::Arc;

#[test]
fn test_ed25519_signature() {
    let mut rng = OsRng;
    let eddsa = EdDsa::ed25519();

    // Generate keypair
    let key_pair = eddsa.generate_key_pair(&mut rng).unwrap();
    assert_eq!(key_pair.public_key().len(), 32);

    // Sign the message
    let message = b"Test message for Ed25519 signature";
    let signature = eddsa.sign(&key_pair, message, b"").unwrap();
    assert_eq!(signature.to_bytes().len(), 64);

    // Verify the signature
    assert!(eddsa
        .verify(key_pair.public_key(), message, b"", &signature)
        .unwrap());

    // Try with a modified message
    let modified_message = b"Modified message that should not verify";
    assert!(!eddsa
        .verify(key_pair.public_key(), modified_message, b"", &signature)
        .unwrap());
}

#[test]
fn test_ed448_signature_with_context() {
    let mut rng = OsRng;
    let eddsa = EdDsa::ed448();

    let key_pair = eddsa.generate_key_pair(&mut rng).unwrap();
    let message = b"Test message for Ed448 signature";
    let signature = eddsa.sign(&key_pair, message, b"application").unwrap();
    assert_eq!(signature.to_bytes().len(), 114);

    assert!(eddsa
        .verify(key_pair.public_key(), message, b"application", &signature)
        .unwrap());
    assert!(!eddsa
        .verify(key_pair.public_key(), message, b"", &signature)
        .unwrap());
}

#[test]
fn test_known_vector_through_hex() {
    let eddsa = EdDsa::default();
    let private_key =
        PrivateKey::from_hex("abd3df0ba4c941a451c934a44938cc2bf051233c4e535931233c4e5351a4c695")
            .unwrap();
    let key_pair = eddsa.generate_key_pair_from(private_key).unwrap();
    let public_key =
        PublicKey::from_hex("195ac5d462f0aa357c424982250f994ab0918ecee50a2ce5c6feb4f6b07ab660")
            .unwrap();
    assert_eq!(key_pair.public_key(), &public_key);

    let signature = eddsa.sign(&key_pair, b"demo", b"").unwrap();
    let parsed = Signature::from_hex(&signature.to_hex()).unwrap();
    assert!(eddsa.verify(&public_key, b"demo", b"", &parsed).unwrap());
    assert!(!eddsa.verify(&public_key, b"demo.", b"", &parsed).unwrap());
}

#[test]
fn test_trait_objects_and_generic_use() {
    fn round_trip<S: Signer>(signer: &S, key_pair: &KeyPair) -> bool {
        let signature = signer.sign(key_pair, b"generic", b"").unwrap();
        signer
            .verify(key_pair.public_key(), b"generic", b"", &signature)
            .unwrap()
    }

    let eddsa = EdDsa::ed448();
    let key_pair = eddsa.key_generator().generate_key_pair(&mut OsRng).unwrap();
    assert!(round_trip(eddsa.signer(), &key_pair));
}

#[test]
fn test_custom_hash_configuration() {
    let scheme = SchemeProvider::new(CurveId::Ed448, HashAlgorithm::Shake128)
        .unwrap()
        .with_hash_provider(Arc::new(DigestProvider::new()));
    let eddsa = EdDsa::new(scheme);

    let key_pair = eddsa.generate_key_pair(&mut OsRng).unwrap();
    let signature = eddsa.sign(&key_pair, b"shake128", b"").unwrap();
    assert!(eddsa
        .verify(key_pair.public_key(), b"shake128", b"", &signature)
        .unwrap());

    // The same key under the standard Ed448 configuration is a different key
    let standard = EdDsa::ed448()
        .derive_public_key(key_pair.private_key())
        .unwrap();
    assert_ne!(&standard, key_pair.public_key());
}

#[test]
fn test_prehashed_and_pure_signatures_differ() {
    let pure = EdDsa::ed25519();
    let prehashed = EdDsa::new(SchemeProvider::ed25519().prehashed());
    let key_pair = pure.generate_key_pair(&mut OsRng).unwrap();

    let sig_pure = pure.sign(&key_pair, b"abc", b"").unwrap();
    let sig_ph = prehashed.sign(&key_pair, b"abc", b"").unwrap();
    assert_ne!(sig_pure, sig_ph);

    assert!(!prehashed
        .verify(key_pair.public_key(), b"abc", b"", &sig_pure)
        .unwrap());
    assert!(prehashed
        .verify(key_pair.public_key(), b"abc", b"", &sig_ph)
        .unwrap());
}

#[test]
fn test_misuse_is_an_error() {
    let eddsa = EdDsa::ed25519();
    let key_pair = eddsa.generate_key_pair(&mut OsRng).unwrap();
    let long_context = vec![b'c'; 300];

    assert_eq!(
        eddsa.sign(&key_pair, b"m", &long_context).unwrap_err(),
        Error::InvalidContext { length: 300 }
    );
    assert!(matches!(
        EdDsa::try_from(None::<SchemeProvider>),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        eddsa.derive_public_key(&PrivateKey::from_bytes(&[0u8; 16])),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_point_comparison_across_curves_is_an_error() {
    use edcrypt::algorithms::{ED25519, ED448};

    let err = ED25519.base_point().is_equal(&ED448.base_point()).unwrap_err();
    assert_eq!(
        Error::from(err),
        Error::IllegalComparison {
            left: "Ed25519",
            right: "Ed448"
        }
    );
}
