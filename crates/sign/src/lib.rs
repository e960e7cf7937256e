//! EdDSA signature schemes
//!
//! This crate implements the EdDSA sign/verify protocol of RFC 8032 on top
//! of the Edwards arithmetic in `edcrypt-algorithms`: Ed25519, Ed25519ctx,
//! Ed25519ph, Ed448 and Ed448ph.

#![forbid(unsafe_code)]

pub mod traditional;

// Re-exports from the EdDSA module
pub use traditional::eddsa::{EdDsa, EdDsaKeyGenerator, EdDsaSigner, EdDsaVariant, SchemeProvider};
