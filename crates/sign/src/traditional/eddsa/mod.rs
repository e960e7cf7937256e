//! EdDSA (Edwards-curve Digital Signature Algorithm)
//!
//! This module implements the signature protocol of RFC 8032 for both
//! Edwards curves:
//!
//! | scheme     | curve        | hash                | domain prefix          |
//! |------------|--------------|---------------------|------------------------|
//! | Ed25519    | edwards25519 | SHA-512             | none                   |
//! | Ed25519ctx | edwards25519 | SHA-512             | `dom2(0, ctx)`         |
//! | Ed25519ph  | edwards25519 | SHA-512             | `dom2(1, ctx)`         |
//! | Ed448      | edwards448   | SHAKE256, 114 bytes | `dom4(0, ctx)`         |
//! | Ed448ph    | edwards448   | SHAKE256, 114 bytes | `dom4(1, ctx)`         |
//!
//! Ed25519 switches to Ed25519ctx as soon as a non-empty context is given.
//!
//! # Example
//!
//! ```
//! use edcrypt_sign::EdDsa;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> edcrypt_api::Result<()> {
//! let eddsa = EdDsa::default();
//! let key_pair = eddsa.generate_key_pair(&mut OsRng)?;
//!
//! let message = b"Hello, EdDSA!";
//! let signature = eddsa.sign(&key_pair, message, b"")?;
//!
//! assert!(eddsa.verify(key_pair.public_key(), message, b"", &signature)?);
//! assert!(!eddsa.verify(key_pair.public_key(), b"Hello, EdDSA?", b"", &signature)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Timing
//!
//! The arithmetic underneath is variable time. Keep signing off machines
//! where an attacker can measure it.

mod edwards;
mod keygen;
mod scheme;
mod signer;

pub use edwards::EdDsa;
pub use keygen::{clamp, EdDsaKeyGenerator};
pub use scheme::{EdDsaVariant, SchemeProvider};
pub use signer::EdDsaSigner;
