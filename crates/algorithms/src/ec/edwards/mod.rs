//! Twisted Edwards curve arithmetic
//!
//! The curve equation is `a*x^2 + y^2 = 1 + d*x^2*y^2` over `F_p`:
//!
//! | curve   | p                  | a  | encoded length |
//! |---------|--------------------|----|----------------|
//! | Ed25519 | 2^255 - 19         | -1 | 32             |
//! | Ed448   | 2^448 - 2^224 - 1  | 1  | 57             |
//!
//! Every [`FieldElement`] and [`GroupPoint`] carries a reference to its
//! [`CurveParams`], and operations that combine values check that the
//! curves agree.

mod codec;
mod curve;
mod field;
mod point;

pub use codec::{EncodedPoint, EncodedScalar};
pub use curve::{CurveId, CurveParams, ED25519, ED448};
pub use field::FieldElement;
pub use point::GroupPoint;
