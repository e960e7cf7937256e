//! Constants for hash functions

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Output size of the original Keccak-512 in bytes
pub const KECCAK512_OUTPUT_SIZE: usize = 64;

/// Default output size of SHAKE128 in bytes (128-bit security level)
pub const SHAKE128_DEFAULT_OUTPUT_SIZE: usize = 32;

/// Default output size of SHAKE256 in bytes (256-bit security level)
pub const SHAKE256_DEFAULT_OUTPUT_SIZE: usize = 64;
