//! Traditional signature schemes
//!
//! This module contains the Edwards-curve signature schemes.

pub mod eddsa;

// Re-export EdDSA types
pub use eddsa::{EdDsa, EdDsaKeyGenerator, EdDsaSigner, EdDsaVariant, SchemeProvider};
