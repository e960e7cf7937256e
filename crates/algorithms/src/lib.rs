//! Arithmetic primitives for the edcrypt library
//!
//! This crate holds the parts of EdDSA that are pure mathematics or glue to
//! hash primitives:
//!
//! - [`ec::edwards`]: prime field elements, the two curve parameter tables,
//!   group points in extended coordinates, and the compressed point and
//!   scalar codec
//! - [`hash`]: a [`HashProvider`](edcrypt_api::HashProvider) backed by the
//!   `sha2` and `sha3` crates
//!
//! # Timing
//!
//! Field and group arithmetic use arbitrary precision integers with
//! variable-time square-and-multiply and double-and-add. Do not use this
//! crate where timing side channels matter.

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hashing provider
pub mod hash;
pub use hash::DigestProvider;

// Elliptic curve arithmetic
pub mod ec;
pub use ec::edwards::{
    CurveId, CurveParams, EncodedPoint, EncodedScalar, FieldElement, GroupPoint, ED25519, ED448,
};
