//! Key and signature containers
//!
//! These are plain byte holders. They know nothing about curves; length
//! checks against a particular curve happen in the key generator and the
//! signer, which is where the curve is known.

use crate::{Error, Result};
use core::fmt;
use edcrypt_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// EdDSA private key: the raw seed bytes
///
/// # Security
///
/// The seed is zeroed when dropped, compares in constant time, and is
/// never printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    seed: Vec<u8>,
}

impl PrivateKey {
    /// Wrap raw seed bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            seed: bytes.to_vec(),
        }
    }

    /// Parse a hex encoded seed
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let seed = hex::decode(hex_str)?;
        Ok(Self { seed })
    }

    /// Draw a fresh `len` byte seed from `rng`
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R, len: usize) -> Self {
        let mut seed = vec![0u8; len];
        rng.fill_bytes(&mut seed);
        Self { seed }
    }

    /// Lowercase hex form of the seed
    pub fn to_hex(&self) -> String {
        hex::encode(&self.seed)
    }

    /// Raw seed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.seed
    }

    /// Seed length in bytes
    pub fn len(&self) -> usize {
        self.seed.len()
    }

    /// Whether the seed is empty
    pub fn is_empty(&self) -> bool {
        self.seed.is_empty()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.seed, &other.seed)
    }
}

impl Eq for PrivateKey {}

// Implement Debug without exposing key material
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("length", &self.seed.len())
            .finish()
    }
}

/// EdDSA public key: a compressed curve point
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Wrap encoded point bytes
    ///
    /// No validation happens here. An invalid encoding is caught when the
    /// key is decoded during verification, which then returns `false`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Parse a hex encoded public key
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Ok(Self {
            bytes: hex::decode(hex_str)?,
        })
    }

    /// Lowercase hex form
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Raw encoded bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the key holds no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A private seed together with the public key derived from it
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Pair a private key with its public key
    ///
    /// Key generators are the usual source of key pairs; this constructor
    /// trusts the caller that the two halves belong together.
    pub fn new(private_key: PrivateKey, public_key: PublicKey) -> Self {
        Self {
            private_key,
            public_key,
        }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &self.private_key)
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// EdDSA signature: encoded point `R` and encoded scalar `S`
///
/// The wire form is `R || S`, each half the curve's encoded length
/// (64 bytes in total for Ed25519, 114 for Ed448).
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    r: Vec<u8>,
    s: Vec<u8>,
}

impl Signature {
    /// Build a signature from its two halves
    pub fn new(r: Vec<u8>, s: Vec<u8>) -> Self {
        Self { r, s }
    }

    /// Split wire bytes `R || S` into a signature
    ///
    /// # Errors
    ///
    /// Returns `InvalidLength` for empty or odd-length input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() % 2 != 0 {
            return Err(Error::InvalidLength {
                context: "Signature::from_bytes",
                expected: bytes.len() + bytes.len() % 2,
                actual: bytes.len(),
            });
        }
        let (r, s) = bytes.split_at(bytes.len() / 2);
        Ok(Self::new(r.to_vec(), s.to_vec()))
    }

    /// Parse the hex form of `R || S`
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Wire bytes `R || S`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.r.len() + self.s.len());
        out.extend_from_slice(&self.r);
        out.extend_from_slice(&self.s);
        out
    }

    /// Lowercase hex form of `R || S`
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Encoded point `R`
    pub fn r(&self) -> &[u8] {
        &self.r
    }

    /// Encoded scalar `S`
    pub fn s(&self) -> &[u8] {
        &self.s
    }

    /// Total wire length in bytes
    pub fn len(&self) -> usize {
        self.r.len() + self.s.len()
    }

    /// Whether both halves are empty
    pub fn is_empty(&self) -> bool {
        self.r.is_empty() && self.s.is_empty()
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("length", &self.len())
            .finish()
    }
}
