//! Compressed point and scalar encodings
//!
//! Decoding is the only way untrusted bytes become curve values. Both
//! decoders are strict: they reject non-canonical encodings rather than
//! reducing them.

use core::fmt;

use num_bigint::BigUint;

use super::curve::CurveParams;
use super::field::FieldElement;
use super::point::GroupPoint;
use crate::error::{validate, Error, Result};

/// Compressed encoding of a [`GroupPoint`]
#[derive(Clone)]
pub struct EncodedPoint {
    bytes: Vec<u8>,
    curve: &'static CurveParams,
}

impl EncodedPoint {
    /// Wrap `bytes`, which must have the curve's encoded length
    pub fn new(curve: &'static CurveParams, bytes: &[u8]) -> Result<Self> {
        validate::length("encoded point", bytes.len(), curve.encoded_len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
            curve,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }

    /// Recover the point
    ///
    /// # Errors
    ///
    /// Returns `Decode` if `y >= p`, if no `x` satisfies the curve
    /// equation for this `y`, or if the sign bit is set for `x = 0`.
    pub fn decode(&self) -> Result<GroupPoint> {
        let curve = self.curve;
        let mut y_bytes = self.bytes.clone();
        let sign = match y_bytes.last_mut() {
            Some(last) => {
                let bit = *last & 0x80 != 0;
                *last &= 0x7f;
                bit
            }
            None => {
                return Err(Error::Decode {
                    context: "encoded point",
                    reason: "empty encoding",
                })
            }
        };

        let y_value = BigUint::from_bytes_le(&y_bytes);
        validate::decode(
            &y_value < curve.prime(),
            "encoded point",
            "y coordinate is not canonical",
        )?;
        let y = FieldElement::new(curve, y_value);

        // x^2 = (y^2 - 1) / (d y^2 - a)
        let one = FieldElement::one(curve);
        let y2 = y.square();
        let u = y2.subtract(&one);
        let v = curve.d().multiply(&y2).subtract(&curve.a());
        let v_inv = v.inverse().map_err(|_| Error::Decode {
            context: "encoded point",
            reason: "degenerate denominator",
        })?;
        let x2 = u.multiply(&v_inv);

        let mut x = x2.sqrt().ok_or(Error::Decode {
            context: "encoded point",
            reason: "x coordinate has no square root",
        })?;
        validate::decode(
            !(x.is_zero() && sign),
            "encoded point",
            "sign bit set for x = 0",
        )?;
        if x.is_odd() != sign {
            x = x.negate();
        }
        validate::decode(
            x.is_odd() == sign,
            "encoded point",
            "x parity does not match sign bit",
        )?;

        GroupPoint::from_affine(x, y)
    }
}

impl PartialEq for EncodedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.curve.id() == other.curve.id() && self.bytes == other.bytes
    }
}

impl Eq for EncodedPoint {}

impl fmt::Debug for EncodedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedPoint({}, {} bytes)", self.curve.name(), self.bytes.len())
    }
}

/// Little-endian encoding of a scalar modulo the group order
#[derive(Clone)]
pub struct EncodedScalar {
    bytes: Vec<u8>,
    curve: &'static CurveParams,
}

impl EncodedScalar {
    /// Wrap `bytes`, which must have the curve's encoded length
    pub fn new(curve: &'static CurveParams, bytes: &[u8]) -> Result<Self> {
        validate::length("encoded scalar", bytes.len(), curve.encoded_len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
            curve,
        })
    }

    /// Encode `value`, which must be below the group order
    pub fn from_value(curve: &'static CurveParams, value: &BigUint) -> Result<Self> {
        validate::parameter(
            value < curve.order(),
            "scalar",
            "must be reduced modulo the group order",
        )?;
        let bytes = FieldElement::new(curve, value.clone()).to_bytes_le(curve.encoded_len());
        Ok(Self { bytes, curve })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Recover the scalar
    ///
    /// The result is held as a field element; scalars below `L` are below
    /// `p` on both curves, so the value is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the value is not below the group order `L`.
    pub fn decode(&self) -> Result<FieldElement> {
        let value = BigUint::from_bytes_le(&self.bytes);
        validate::decode(
            &value < self.curve.order(),
            "encoded scalar",
            "value is not below the group order",
        )?;
        Ok(FieldElement::new(self.curve, value))
    }
}

impl PartialEq for EncodedScalar {
    fn eq(&self, other: &Self) -> bool {
        self.curve.id() == other.curve.id() && self.bytes == other.bytes
    }
}

impl Eq for EncodedScalar {}

impl fmt::Debug for EncodedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedScalar({}, {} bytes)", self.curve.name(), self.bytes.len())
    }
}
