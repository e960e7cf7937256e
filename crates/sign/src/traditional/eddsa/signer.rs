//! The EdDSA sign/verify protocol

use edcrypt_algorithms::{EncodedPoint, EncodedScalar, GroupPoint};
use edcrypt_api::{Error, KeyPair, PublicKey, Result, Signature, Signer};
use log::{debug, trace};
use num_bigint::BigUint;

use super::keygen::EdDsaKeyGenerator;
use super::scheme::SchemeProvider;

/// Signs and verifies messages for one scheme
#[derive(Clone, Debug)]
pub struct EdDsaSigner {
    scheme: SchemeProvider,
    key_generator: EdDsaKeyGenerator,
}

impl EdDsaSigner {
    pub fn new(scheme: SchemeProvider) -> Self {
        let key_generator = EdDsaKeyGenerator::new(scheme.clone());
        Self {
            scheme,
            key_generator,
        }
    }

    pub fn scheme(&self) -> &SchemeProvider {
        &self.scheme
    }

    /// `H(dom || parts...) mod L`
    fn hash_to_scalar(&self, dom: &[u8], parts: &[&[u8]]) -> Result<BigUint> {
        let mut inputs: Vec<&[u8]> = Vec::with_capacity(parts.len() + 1);
        inputs.push(dom);
        inputs.extend_from_slice(parts);
        let digest = self.scheme.hash(&inputs)?;
        Ok(BigUint::from_bytes_le(&digest) % self.scheme.curve_params().order())
    }

    /// Decoded `R`, `A` and `S`, or `None` if any of them is malformed
    fn decode_signature(
        &self,
        public_key: &PublicKey,
        signature: &Signature,
    ) -> Option<(GroupPoint, GroupPoint, BigUint)> {
        let curve = self.scheme.curve_params();
        let r = EncodedPoint::new(curve, signature.r()).and_then(|e| e.decode());
        let a = EncodedPoint::new(curve, public_key.as_bytes()).and_then(|e| e.decode());
        let s = EncodedScalar::new(curve, signature.s()).and_then(|e| e.decode());
        match (r, a, s) {
            (Ok(r), Ok(a), Ok(s)) => Some((r, a, s.value().clone())),
            (Err(e), _, _) => {
                trace!("rejecting signature: R: {}", e);
                None
            }
            (_, Err(e), _) => {
                trace!("rejecting signature: public key: {}", e);
                None
            }
            (_, _, Err(e)) => {
                trace!("rejecting signature: S: {}", e);
                None
            }
        }
    }
}

impl Signer for EdDsaSigner {
    fn sign(&self, key_pair: &KeyPair, message: &[u8], context: &[u8]) -> Result<Signature> {
        let dom = self.scheme.dom(context)?;
        let public_key = key_pair.public_key();
        if public_key.len() != self.scheme.encoded_len() {
            return Err(Error::invalid_argument(
                "EdDsaSigner::sign",
                format!(
                    "{} public key must be {} bytes, got {}",
                    self.scheme.curve(),
                    self.scheme.encoded_len(),
                    public_key.len()
                ),
            ));
        }
        let expanded = self.key_generator.expand(key_pair.private_key())?;
        let message = self.scheme.pre_hash(message)?;
        let curve = self.scheme.curve_params();

        let r = self.hash_to_scalar(&dom, &[&expanded.prefix[..], &message[..]])?;
        let encoded_r = curve.base_point().scalar_multiply(&r).encode()?;

        let k = self.hash_to_scalar(
            &dom,
            &[encoded_r.as_bytes(), public_key.as_bytes(), &message[..]],
        )?;
        let s = (k * &expanded.scalar + r) % curve.order();
        let encoded_s = EncodedScalar::from_value(curve, &s)?;

        debug!("signed message with {}", self.scheme.scheme_name());
        Ok(Signature::new(encoded_r.into_bytes(), encoded_s.into_bytes()))
    }

    fn verify(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        context: &[u8],
        signature: &Signature,
    ) -> Result<bool> {
        let dom = self.scheme.dom(context)?;
        let Some((r, a, s)) = self.decode_signature(public_key, signature) else {
            debug!("{} verification rejected malformed input", self.scheme.scheme_name());
            return Ok(false);
        };
        let message = self.scheme.pre_hash(message)?;
        let curve = self.scheme.curve_params();

        let k = self.hash_to_scalar(&dom, &[signature.r(), public_key.as_bytes(), &message[..]])?;

        // R + kA == sB, without cofactor clearing
        let lhs = r.add(&a.scalar_multiply(&k));
        let rhs = curve.base_point().scalar_multiply(&s);
        let valid = lhs.is_equal(&rhs)?;

        debug!(
            "{} verification {}",
            self.scheme.scheme_name(),
            if valid { "accepted" } else { "rejected" }
        );
        Ok(valid)
    }
}
