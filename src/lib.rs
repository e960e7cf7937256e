//! # edcrypt
//!
//! A pure Rust implementation of the Edwards-curve Digital Signature
//! Algorithm (RFC 8032) over edwards25519 and edwards448.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edcrypt = "0.3"
//! ```
//!
//! ```
//! use edcrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> edcrypt::Result<()> {
//! let eddsa = EdDsa::ed448();
//! let key_pair = eddsa.generate_key_pair(&mut OsRng)?;
//! let signature = eddsa.sign(&key_pair, b"message", b"context")?;
//! assert!(eddsa.verify(key_pair.public_key(), b"message", b"context", &signature)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for public keys, signatures and
//!   scheme settings
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`edcrypt-api`]: error type, key and signature containers, traits
//! - [`edcrypt-algorithms`]: field and group arithmetic, point codec, hashing provider
//! - [`edcrypt-sign`]: the EdDSA schemes
//! - [`edcrypt-params`]: curve constants
//! - [`edcrypt-internal`]: byte helpers

// Core re-exports
pub use edcrypt_algorithms as algorithms;
pub use edcrypt_api as api;
pub use edcrypt_internal as internal;
pub use edcrypt_params as params;
pub use edcrypt_sign as sign;

pub use edcrypt_api::{Error, Result};

/// Common imports for edcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{HashAlgorithm, HashProvider, KeyGenerator, Signer};

    // Re-export key and signature containers
    pub use crate::api::{KeyPair, PrivateKey, PublicKey, Signature};

    // Re-export the schemes
    pub use crate::algorithms::{CurveId, DigestProvider};
    pub use crate::sign::{EdDsa, EdDsaVariant, SchemeProvider};
}
