//! Trait definitions for the edcrypt API

pub mod hash;
pub mod signature;

pub use hash::{HashAlgorithm, HashProvider};
pub use signature::{KeyGenerator, Signer};
