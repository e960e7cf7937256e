//! Scheme configuration: curve, hash, variant and domain separation

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use edcrypt_algorithms::{CurveId, CurveParams, DigestProvider};
use edcrypt_api::{Error, HashAlgorithm, HashProvider, Result};
use edcrypt_internal::bytes::join;
use edcrypt_params::traditional::eddsa::{
    ED25519_DOM_LABEL, ED448_DOM_LABEL, MAX_CONTEXT_SIZE, PREHASH_OUTPUT_SIZE,
};

/// Pure or prehashed signing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdDsaVariant {
    /// The message is hashed as-is (phflag 0)
    #[default]
    Pure,
    /// The message is first reduced to a 64 byte digest (phflag 1)
    Prehashed,
}

impl EdDsaVariant {
    /// Phase flag byte of the domain prefix
    pub fn phflag(&self) -> u8 {
        match self {
            Self::Pure => 0,
            Self::Prehashed => 1,
        }
    }
}

/// Everything that distinguishes one EdDSA scheme from another
///
/// The hashing service is injected; by default it is a [`DigestProvider`].
#[derive(Clone)]
pub struct SchemeProvider {
    curve: CurveId,
    hash_algorithm: HashAlgorithm,
    variant: EdDsaVariant,
    hasher: Arc<dyn HashProvider>,
}

impl SchemeProvider {
    /// Configure a scheme on `curve` hashing with `hash_algorithm`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the algorithm cannot produce twice the
    /// curve's encoded length, e.g. SHA-512 on Ed448.
    pub fn new(curve: CurveId, hash_algorithm: HashAlgorithm) -> Result<Self> {
        let needed = 2 * curve.encoded_len();
        if !hash_algorithm.supports_output_len(needed) {
            return Err(Error::invalid_argument(
                "SchemeProvider::new",
                format!(
                    "{} cannot produce the {} bytes {} needs",
                    hash_algorithm, needed, curve
                ),
            ));
        }
        Ok(Self {
            curve,
            hash_algorithm,
            variant: EdDsaVariant::Pure,
            hasher: Arc::new(DigestProvider::new()),
        })
    }

    /// Ed25519 with SHA-512
    pub fn ed25519() -> Self {
        Self {
            curve: CurveId::Ed25519,
            hash_algorithm: HashAlgorithm::Sha512,
            variant: EdDsaVariant::Pure,
            hasher: Arc::new(DigestProvider::new()),
        }
    }

    /// Ed448 with SHAKE256
    pub fn ed448() -> Self {
        Self {
            curve: CurveId::Ed448,
            hash_algorithm: HashAlgorithm::Shake256,
            variant: EdDsaVariant::Pure,
            hasher: Arc::new(DigestProvider::new()),
        }
    }

    /// Switch to the prehashed variant
    pub fn prehashed(mut self) -> Self {
        self.variant = EdDsaVariant::Prehashed;
        self
    }

    /// Replace the hashing service
    pub fn with_hash_provider(mut self, hasher: Arc<dyn HashProvider>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn curve(&self) -> CurveId {
        self.curve
    }

    pub fn curve_params(&self) -> &'static CurveParams {
        self.curve.params()
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    pub fn variant(&self) -> EdDsaVariant {
        self.variant
    }

    /// Encoded length of points, scalars and private seeds
    pub fn encoded_len(&self) -> usize {
        self.curve.encoded_len()
    }

    /// RFC 8032 name of the configured scheme
    pub fn scheme_name(&self) -> &'static str {
        match (self.curve, self.variant) {
            (CurveId::Ed25519, EdDsaVariant::Pure) => "Ed25519",
            (CurveId::Ed25519, EdDsaVariant::Prehashed) => "Ed25519ph",
            (CurveId::Ed448, EdDsaVariant::Pure) => "Ed448",
            (CurveId::Ed448, EdDsaVariant::Prehashed) => "Ed448ph",
        }
    }

    /// Reject contexts longer than 255 bytes
    pub fn check_context(context: &[u8]) -> Result<()> {
        if context.len() > MAX_CONTEXT_SIZE {
            return Err(Error::InvalidContext {
                length: context.len(),
            });
        }
        Ok(())
    }

    /// Domain separation prefix for `context`
    ///
    /// Ed25519 uses no prefix for the pure variant with an empty context,
    /// and `dom2` otherwise. Ed448 always uses `dom4`.
    pub fn dom(&self, context: &[u8]) -> Result<Vec<u8>> {
        Self::check_context(context)?;
        let label = match self.curve {
            CurveId::Ed25519 if context.is_empty() && self.variant == EdDsaVariant::Pure => {
                return Ok(Vec::new())
            }
            CurveId::Ed25519 => ED25519_DOM_LABEL,
            CurveId::Ed448 => ED448_DOM_LABEL,
        };
        // context length fits in a byte after the check above
        let flags = [self.variant.phflag(), context.len() as u8];
        let parts: [&[u8]; 3] = [label, &flags, context];
        Ok(join(&parts))
    }

    /// The message as it enters the signature hash
    pub fn pre_hash<'a>(&self, message: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        match self.variant {
            EdDsaVariant::Pure => Ok(Cow::Borrowed(message)),
            EdDsaVariant::Prehashed => self
                .hasher
                .hash_with_len(self.hash_algorithm, &[message], PREHASH_OUTPUT_SIZE)
                .map(Cow::Owned),
        }
    }

    /// Scheme hash of `inputs`, twice the encoded length long
    pub fn hash(&self, inputs: &[&[u8]]) -> Result<Vec<u8>> {
        self.hasher
            .hash_with_len(self.hash_algorithm, inputs, 2 * self.encoded_len())
    }
}

impl Default for SchemeProvider {
    fn default() -> Self {
        Self::ed25519()
    }
}

impl fmt::Debug for SchemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeProvider")
            .field("curve", &self.curve)
            .field("hash_algorithm", &self.hash_algorithm)
            .field("variant", &self.variant)
            .finish()
    }
}
