//! Public API traits and types for the edcrypt library
//!
//! This crate provides the public API surface shared by the arithmetic and
//! signature crates: the error type, the key and signature containers, and
//! the traits through which hashing, key generation and signing are
//! reached.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{KeyPair, PrivateKey, PublicKey, Signature};

// Re-export all traits from the traits module
pub use traits::{HashAlgorithm, HashProvider, KeyGenerator, Signer};

// Re-export trait modules for direct access
pub use traits::{hash, signature};
