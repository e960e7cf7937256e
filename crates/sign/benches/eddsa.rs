//! Benchmarks for the EdDSA schemes (RFC 8032).
//!
//! Key generation, signing and verification for Ed25519 and Ed448 over a
//! few message sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edcrypt_sign::EdDsa;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Message sizes to benchmark (in bytes)
const MESSAGE_SIZES: &[usize] = &[32, 1024, 16384];

fn schemes() -> [(&'static str, EdDsa); 2] {
    [("ed25519", EdDsa::ed25519()), ("ed448", EdDsa::ed448())]
}

fn bench_keypair(c: &mut Criterion) {
    let mut group = c.benchmark_group("eddsa_keypair");
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);

    for (name, eddsa) in schemes() {
        group.bench_function(name, |b| {
            b.iter(|| black_box(eddsa.generate_key_pair(&mut rng).unwrap()));
        });
    }

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("eddsa_sign");
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);

    for (name, eddsa) in schemes() {
        let key_pair = eddsa.generate_key_pair(&mut rng).unwrap();
        for &size in MESSAGE_SIZES {
            let message = vec![0xa5u8; size];
            group.bench_with_input(BenchmarkId::new(name, size), &message, |b, msg| {
                b.iter(|| black_box(eddsa.sign(&key_pair, msg, b"").unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("eddsa_verify");
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);

    for (name, eddsa) in schemes() {
        let key_pair = eddsa.generate_key_pair(&mut rng).unwrap();
        for &size in MESSAGE_SIZES {
            let message = vec![0xa5u8; size];
            let signature = eddsa.sign(&key_pair, &message, b"").unwrap();
            group.bench_with_input(BenchmarkId::new(name, size), &message, |b, msg| {
                b.iter(|| {
                    black_box(
                        eddsa
                            .verify(key_pair.public_key(), msg, b"", &signature)
                            .unwrap(),
                    )
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_keypair, bench_sign, bench_verify);
criterion_main!(benches);
