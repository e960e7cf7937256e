//! Hashing provider backed by RustCrypto digests
//!
//! [`DigestProvider`] is the default [`HashProvider`] used by every EdDSA
//! scheme. It serves the two fixed-output 512-bit hashes (SHA-512 and
//! SHA3-512), the original Keccak-512, and the SHAKE extendable-output
//! functions at both security levels.

use crate::error::{validate, Error, HashResult};
use edcrypt_api::{HashAlgorithm, HashProvider, Result as CoreResult};
use log::trace;
use sha2::{Digest, Sha512};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Keccak512, Sha3_512, Shake128, Shake256};

/// Stateless hashing service over `sha2` and `sha3`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigestProvider;

impl DigestProvider {
    /// Create a new provider
    pub fn new() -> Self {
        Self
    }

    /// Hash `inputs` as one message, validating `output_len` first
    pub fn digest(
        &self,
        algorithm: HashAlgorithm,
        inputs: &[&[u8]],
        output_len: usize,
    ) -> HashResult<Vec<u8>> {
        if !algorithm.is_xof() {
            validate::parameter(
                output_len == algorithm.default_output_len(),
                algorithm.name(),
                "fixed-output hash cannot produce the requested length",
            )?;
        }
        validate::parameter(output_len > 0, algorithm.name(), "output length must be non-zero")?;
        trace!("hashing {} parts with {} to {} bytes", inputs.len(), algorithm, output_len);

        let out = match algorithm {
            HashAlgorithm::Sha512 => fixed::<Sha512>(inputs),
            HashAlgorithm::Sha3_512 => fixed::<Sha3_512>(inputs),
            HashAlgorithm::Keccak512 => fixed::<Keccak512>(inputs),
            HashAlgorithm::Shake128 => extendable::<Shake128>(inputs, output_len),
            HashAlgorithm::Shake256 => extendable::<Shake256>(inputs, output_len),
        };
        if out.len() != output_len {
            return Err(Error::Unsupported {
                algorithm: algorithm.name(),
                details: format!("backend produced {} bytes", out.len()),
            });
        }
        Ok(out)
    }
}

impl HashProvider for DigestProvider {
    fn hash_with_len(
        &self,
        algorithm: HashAlgorithm,
        inputs: &[&[u8]],
        output_len: usize,
    ) -> CoreResult<Vec<u8>> {
        self.digest(algorithm, inputs, output_len)
            .map_err(Into::into)
    }
}

fn fixed<D: Digest>(inputs: &[&[u8]]) -> Vec<u8> {
    let mut hasher = D::new();
    for input in inputs {
        Digest::update(&mut hasher, *input);
    }
    hasher.finalize().to_vec()
}

fn extendable<X: Default + Update + ExtendableOutput>(inputs: &[&[u8]], len: usize) -> Vec<u8> {
    let mut hasher = X::default();
    for input in inputs {
        Update::update(&mut hasher, input);
    }
    let mut reader = hasher.finalize_xof();
    let mut out = vec![0u8; len];
    reader.read(&mut out);
    out
}

#[cfg(test)]
mod tests;
