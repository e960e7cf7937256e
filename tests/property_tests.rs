//! Property tests for key derivation, signing and verification

use edcrypt::prelude::*;
use proptest::prelude::*;

fn scheme(ed448: bool) -> EdDsa {
    if ed448 {
        EdDsa::ed448()
    } else {
        EdDsa::ed25519()
    }
}

fn seed_strategy() -> impl Strategy<Value = (bool, Vec<u8>)> {
    any::<bool>().prop_flat_map(|ed448| {
        let len = if ed448 { 57 } else { 32 };
        (Just(ed448), proptest::collection::vec(any::<u8>(), len))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn derivation_is_deterministic((ed448, seed) in seed_strategy()) {
        let eddsa = scheme(ed448);
        let private_key = PrivateKey::from_bytes(&seed);
        let first = eddsa.derive_public_key(&private_key).unwrap();
        let second = eddsa.derive_public_key(&private_key).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn signatures_verify(
        (ed448, seed) in seed_strategy(),
        message in proptest::collection::vec(any::<u8>(), 0..256),
        context in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let eddsa = scheme(ed448);
        let key_pair = eddsa.generate_key_pair_from(PrivateKey::from_bytes(&seed)).unwrap();
        let signature = eddsa.sign(&key_pair, &message, &context).unwrap();
        prop_assert!(eddsa.verify(key_pair.public_key(), &message, &context, &signature).unwrap());
    }

    #[test]
    fn single_bit_flips_are_rejected(
        (ed448, seed) in seed_strategy(),
        message in proptest::collection::vec(any::<u8>(), 1..64),
        flip in any::<prop::sample::Index>(),
        bit in 0u8..8,
        in_signature in any::<bool>(),
    ) {
        let eddsa = scheme(ed448);
        let key_pair = eddsa.generate_key_pair_from(PrivateKey::from_bytes(&seed)).unwrap();
        let signature = eddsa.sign(&key_pair, &message, b"").unwrap();

        let (message, signature) = if in_signature {
            let mut wire = signature.to_bytes();
            let i = flip.index(wire.len());
            wire[i] ^= 1 << bit;
            (message, Signature::from_bytes(&wire).unwrap())
        } else {
            let mut altered = message.clone();
            let i = flip.index(altered.len());
            altered[i] ^= 1 << bit;
            (altered, signature)
        };
        prop_assert!(!eddsa.verify(key_pair.public_key(), &message, b"", &signature).unwrap());
    }
}
