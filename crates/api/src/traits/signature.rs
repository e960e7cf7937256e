//! Digital signature traits for edcrypt
//!
//! The EdDSA state machine is stateless request/response: a key generator
//! turns a seed into a key pair, and a signer turns a key pair and message
//! into a signature or checks one. Both are implemented per scheme
//! configuration by `edcrypt-sign`.

use crate::types::{KeyPair, PrivateKey, PublicKey, Signature};
use crate::Result;
use rand::{CryptoRng, RngCore};

/// Key pair derivation for a signature scheme
pub trait KeyGenerator {
    /// Generate a new key pair from a fresh random seed
    ///
    /// # Security Requirements
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation.
    fn generate_key_pair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<KeyPair>;

    /// Build a key pair around an existing private key
    fn generate_key_pair_from(&self, private_key: PrivateKey) -> Result<KeyPair>;

    /// Derive the public key belonging to `private_key`
    ///
    /// Derivation is deterministic: the same seed always yields the same
    /// public key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the key length does not match the
    /// scheme's curve.
    fn derive_public_key(&self, private_key: &PrivateKey) -> Result<PublicKey>;
}

/// Signing and verification for a signature scheme
pub trait Signer {
    /// Sign `message` under `context`
    ///
    /// # Errors
    ///
    /// Returns `InvalidContext` for contexts longer than 255 bytes and
    /// `InvalidArgument` for keys sized for another curve.
    fn sign(&self, key_pair: &KeyPair, message: &[u8], context: &[u8]) -> Result<Signature>;

    /// Verify `signature` over `message` under `context`
    ///
    /// A signature that fails to decode or does not satisfy the group
    /// equation yields `Ok(false)`. `Err` is reserved for caller misuse
    /// such as an oversized context.
    fn verify(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        context: &[u8],
        signature: &Signature,
    ) -> Result<bool>;
}
