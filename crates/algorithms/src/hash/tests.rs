use super::*;
use edcrypt_api::Error as CoreError;

fn hex_digest(algorithm: HashAlgorithm, msg: &[u8], len: usize) -> String {
    hex::encode(DigestProvider::new().digest(algorithm, &[msg], len).unwrap())
}

#[test]
fn test_sha512_abc() {
    assert_eq!(
        hex_digest(HashAlgorithm::Sha512, b"abc", 64),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn test_sha3_512_abc() {
    assert_eq!(
        hex_digest(HashAlgorithm::Sha3_512, b"abc", 64),
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
         10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
    );
}

#[test]
fn test_keccak512_empty() {
    assert_eq!(
        hex_digest(HashAlgorithm::Keccak512, b"", 64),
        "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304\
         c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
    );
}

#[test]
fn test_shake_default_lengths() {
    let provider = DigestProvider::new();
    let out128 = provider.hash(HashAlgorithm::Shake128, &[b""]).unwrap();
    assert_eq!(
        hex::encode(out128),
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"
    );
    let out256 = provider.hash(HashAlgorithm::Shake256, &[b""]).unwrap();
    assert_eq!(out256.len(), 64);
    assert!(hex::encode(out256)
        .starts_with("46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"));
}

#[test]
fn test_xof_prefix_property() {
    let provider = DigestProvider::new();
    let short = provider
        .hash_with_len(HashAlgorithm::Shake256, &[b"edcrypt"], 64)
        .unwrap();
    let long = provider
        .hash_with_len(HashAlgorithm::Shake256, &[b"edcrypt"], 114)
        .unwrap();
    assert_eq!(long.len(), 114);
    assert_eq!(&long[..64], &short[..]);
}

#[test]
fn test_multi_part_input_is_concatenation() {
    let provider = DigestProvider::new();
    let parts = provider
        .hash(HashAlgorithm::Sha512, &[b"Sig", b"Ed", b"448"])
        .unwrap();
    let whole = provider.hash(HashAlgorithm::Sha512, &[b"SigEd448"]).unwrap();
    assert_eq!(parts, whole);
}

#[test]
fn test_fixed_output_rejects_other_lengths() {
    let provider = DigestProvider::new();
    let err = provider
        .hash_with_len(HashAlgorithm::Sha512, &[b"abc"], 114)
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument { context: "SHA-512", .. }));
}

#[test]
fn test_zero_length_rejected() {
    let provider = DigestProvider::new();
    assert!(provider
        .hash_with_len(HashAlgorithm::Shake128, &[b"abc"], 0)
        .is_err());
}
