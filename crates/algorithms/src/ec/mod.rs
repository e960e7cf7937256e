//! Elliptic Curve Primitives
//!
//! Twisted Edwards curves for EdDSA: edwards25519 (Ed25519) and
//! edwards448 (Ed448). Both share one implementation parameterized by an
//! explicit curve table.

pub mod edwards;

pub use edwards::{CurveId, CurveParams, EncodedPoint, EncodedScalar, FieldElement, GroupPoint};
