//! Key derivation and scalar clamping

use edcrypt_algorithms::CurveId;
use edcrypt_api::{Error, KeyGenerator, KeyPair, PrivateKey, PublicKey, Result, ResultExt};
use edcrypt_internal::bytes::split;
use log::debug;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::scheme::SchemeProvider;

/// Force a hashed seed half into a valid secret scalar
///
/// - Ed25519: clear the low 3 bits, clear bit 255, set bit 254
/// - Ed448: clear the low 2 bits, zero the last byte, set bit 447
pub fn clamp(curve: CurveId, bytes: &mut [u8]) {
    let len = bytes.len();
    if len < 2 {
        return;
    }
    match curve {
        CurveId::Ed25519 => {
            bytes[0] &= 0xf8;
            bytes[len - 1] &= 0x7f;
            bytes[len - 1] |= 0x40;
        }
        CurveId::Ed448 => {
            bytes[0] &= 0xfc;
            bytes[len - 1] = 0;
            bytes[len - 2] |= 0x80;
        }
    }
}

/// Secret scalar and nonce prefix expanded from a private seed
pub(crate) struct ExpandedKey {
    pub(crate) scalar: BigUint,
    pub(crate) prefix: Zeroizing<Vec<u8>>,
}

/// Derives public keys from private seeds for one scheme
#[derive(Clone, Debug)]
pub struct EdDsaKeyGenerator {
    scheme: SchemeProvider,
}

impl EdDsaKeyGenerator {
    pub fn new(scheme: SchemeProvider) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &SchemeProvider {
        &self.scheme
    }

    /// Hash the seed and split it into the clamped scalar and the prefix
    pub(crate) fn expand(&self, private_key: &PrivateKey) -> Result<ExpandedKey> {
        let len = self.scheme.encoded_len();
        if private_key.len() != len {
            return Err(Error::invalid_argument(
                "EdDsaKeyGenerator",
                format!(
                    "{} private key must be {} bytes, got {}",
                    self.scheme.curve(),
                    len,
                    private_key.len()
                ),
            ));
        }

        let digest = Zeroizing::new(self.scheme.hash(&[private_key.as_bytes()])?);
        let (scalar_seed, prefix) = split(&digest, len);
        let mut scalar_bytes = Zeroizing::new(scalar_seed.to_vec());
        clamp(self.scheme.curve(), &mut scalar_bytes);

        Ok(ExpandedKey {
            scalar: BigUint::from_bytes_le(&scalar_bytes),
            prefix: Zeroizing::new(prefix.to_vec()),
        })
    }
}

impl KeyGenerator for EdDsaKeyGenerator {
    fn generate_key_pair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<KeyPair> {
        let private_key = PrivateKey::random(rng, self.scheme.encoded_len());
        self.generate_key_pair_from(private_key)
    }

    fn generate_key_pair_from(&self, private_key: PrivateKey) -> Result<KeyPair> {
        let public_key = self.derive_public_key(&private_key)?;
        Ok(KeyPair::new(private_key, public_key))
    }

    fn derive_public_key(&self, private_key: &PrivateKey) -> Result<PublicKey> {
        let expanded = self.expand(private_key)?;
        let curve = self.scheme.curve_params();
        let encoded = curve
            .base_point()
            .scalar_multiply(&expanded.scalar)
            .encode()
            .with_context("EdDsaKeyGenerator")?;
        debug!("derived {} public key", self.scheme.scheme_name());
        Ok(PublicKey::from_bytes(encoded.as_bytes()))
    }
}
