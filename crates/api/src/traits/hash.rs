//! Hashing service traits
//!
//! The EdDSA core never names a concrete hash implementation. It asks an
//! injected [`HashProvider`] for a digest of a given [`HashAlgorithm`], so
//! the provider can be swapped (for a hardware backend, or a mock in tests)
//! without touching the signing code.

use crate::Result;
use core::fmt;
use edcrypt_params::utils::hash::{
    KECCAK512_OUTPUT_SIZE, SHA3_512_OUTPUT_SIZE, SHA512_OUTPUT_SIZE, SHAKE128_DEFAULT_OUTPUT_SIZE,
    SHAKE256_DEFAULT_OUTPUT_SIZE,
};

/// Hash algorithms a scheme can be configured with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashAlgorithm {
    /// SHA-512 (FIPS 180-4), the Ed25519 hash
    Sha512,
    /// SHA3-512 (FIPS 202)
    Sha3_512,
    /// The original Keccak-512 submission, as used by NEM
    Keccak512,
    /// SHAKE128 extendable-output function
    Shake128,
    /// SHAKE256 extendable-output function, the Ed448 hash
    Shake256,
}

impl HashAlgorithm {
    /// Algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha512 => "SHA-512",
            Self::Sha3_512 => "SHA3-512",
            Self::Keccak512 => "Keccak-512",
            Self::Shake128 => "SHAKE128",
            Self::Shake256 => "SHAKE256",
        }
    }

    /// Whether the algorithm can produce output of any requested length
    pub fn is_xof(&self) -> bool {
        matches!(self, Self::Shake128 | Self::Shake256)
    }

    /// Output length in bytes when no explicit length is requested
    pub fn default_output_len(&self) -> usize {
        match self {
            Self::Sha512 => SHA512_OUTPUT_SIZE,
            Self::Sha3_512 => SHA3_512_OUTPUT_SIZE,
            Self::Keccak512 => KECCAK512_OUTPUT_SIZE,
            Self::Shake128 => SHAKE128_DEFAULT_OUTPUT_SIZE,
            Self::Shake256 => SHAKE256_DEFAULT_OUTPUT_SIZE,
        }
    }

    /// Whether the algorithm can emit exactly `len` bytes
    pub fn supports_output_len(&self, len: usize) -> bool {
        self.is_xof() || self.default_output_len() == len
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stateless hashing service
///
/// Inputs are given as a list of slices and hashed as their concatenation,
/// so callers can hash `dom || prefix || message` without first copying
/// the parts into one buffer.
///
/// Implementations must be safe to share across threads; the signing code
/// holds them behind an `Arc`.
pub trait HashProvider: Send + Sync {
    /// Hash with the algorithm's default output length
    ///
    /// # Errors
    ///
    /// Returns `HashingUnavailable` if the provider does not implement
    /// `algorithm`.
    fn hash(&self, algorithm: HashAlgorithm, inputs: &[&[u8]]) -> Result<Vec<u8>> {
        self.hash_with_len(algorithm, inputs, algorithm.default_output_len())
    }

    /// Hash producing exactly `output_len` bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `algorithm` is fixed-output and
    /// `output_len` differs from its digest size, and `HashingUnavailable`
    /// if the provider does not implement `algorithm`.
    fn hash_with_len(
        &self,
        algorithm: HashAlgorithm,
        inputs: &[&[u8]],
        output_len: usize,
    ) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_lengths() {
        assert_eq!(HashAlgorithm::Sha512.default_output_len(), 64);
        assert_eq!(HashAlgorithm::Shake128.default_output_len(), 32);
        assert_eq!(HashAlgorithm::Shake256.default_output_len(), 64);
        assert!(HashAlgorithm::Shake256.supports_output_len(114));
        assert!(!HashAlgorithm::Sha512.supports_output_len(114));
        assert!(HashAlgorithm::Keccak512.supports_output_len(64));
    }

    #[test]
    fn test_names() {
        assert_eq!(HashAlgorithm::Sha3_512.to_string(), "SHA3-512");
        assert!(HashAlgorithm::Shake128.is_xof());
        assert!(!HashAlgorithm::Keccak512.is_xof());
    }
}
