//! The `EdDsa` facade

use edcrypt_algorithms::CurveId;
use edcrypt_api::{
    Error, KeyGenerator, KeyPair, PrivateKey, PublicKey, Result, Signature, Signer,
};
use rand::{CryptoRng, RngCore};

use super::keygen::EdDsaKeyGenerator;
use super::scheme::SchemeProvider;
use super::signer::EdDsaSigner;

/// One configured EdDSA scheme with its key generator and signer
///
/// `EdDsa::default()` is Ed25519 with SHA-512.
#[derive(Clone, Debug)]
pub struct EdDsa {
    scheme: SchemeProvider,
    key_generator: EdDsaKeyGenerator,
    signer: EdDsaSigner,
}

impl EdDsa {
    pub fn new(scheme: SchemeProvider) -> Self {
        Self {
            key_generator: EdDsaKeyGenerator::new(scheme.clone()),
            signer: EdDsaSigner::new(scheme.clone()),
            scheme,
        }
    }

    /// Ed25519 with SHA-512
    pub fn ed25519() -> Self {
        Self::new(SchemeProvider::ed25519())
    }

    /// Ed448 with SHAKE256
    pub fn ed448() -> Self {
        Self::new(SchemeProvider::ed448())
    }

    pub fn curve(&self) -> CurveId {
        self.scheme.curve()
    }

    pub fn scheme(&self) -> &SchemeProvider {
        &self.scheme
    }

    pub fn key_generator(&self) -> &EdDsaKeyGenerator {
        &self.key_generator
    }

    pub fn signer(&self) -> &EdDsaSigner {
        &self.signer
    }

    /// Generate a key pair from a fresh seed drawn from `rng`
    pub fn generate_key_pair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<KeyPair> {
        self.key_generator.generate_key_pair(rng)
    }

    /// Build a key pair around an existing seed
    pub fn generate_key_pair_from(&self, private_key: PrivateKey) -> Result<KeyPair> {
        self.key_generator.generate_key_pair_from(private_key)
    }

    pub fn derive_public_key(&self, private_key: &PrivateKey) -> Result<PublicKey> {
        self.key_generator.derive_public_key(private_key)
    }

    /// Sign `message` under `context` (empty for plain signatures)
    pub fn sign(&self, key_pair: &KeyPair, message: &[u8], context: &[u8]) -> Result<Signature> {
        self.signer.sign(key_pair, message, context)
    }

    /// Verify `signature`; malformed keys or signatures yield `Ok(false)`
    pub fn verify(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        context: &[u8],
        signature: &Signature,
    ) -> Result<bool> {
        self.signer.verify(public_key, message, context, signature)
    }
}

impl Default for EdDsa {
    fn default() -> Self {
        Self::ed25519()
    }
}

impl TryFrom<Option<SchemeProvider>> for EdDsa {
    type Error = Error;

    fn try_from(scheme: Option<SchemeProvider>) -> Result<Self> {
        scheme
            .map(Self::new)
            .ok_or_else(|| Error::invalid_argument("EdDsa", "a scheme provider is required"))
    }
}
