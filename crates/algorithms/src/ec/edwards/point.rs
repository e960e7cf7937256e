//! Group points in extended coordinates
//!
//! A point `(X:Y:Z:T)` stands for the affine point `(X/Z, Y/Z)` with
//! `T = XY/Z`. Addition and doubling use the unified formulas of
//! Hisil, Wong, Carter and Dawson (2008), which are complete on both
//! curves since `a` is a square and `d` is not. Results are left
//! projective; `Z` is only inverted when a point is encoded.

use core::fmt;

use edcrypt_internal::bytes::to_binary_digits;
use num_bigint::BigUint;
use num_traits::Zero;

use super::codec::EncodedPoint;
use super::curve::CurveParams;
use super::field::FieldElement;
use crate::error::{validate, Error, Result};

/// Element of the curve group
#[derive(Clone)]
pub struct GroupPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
    curve: &'static CurveParams,
}

impl GroupPoint {
    /// Neutral element `(0, 1)`
    pub fn identity(curve: &'static CurveParams) -> Self {
        Self {
            x: FieldElement::zero(curve),
            y: FieldElement::one(curve),
            z: FieldElement::one(curve),
            t: FieldElement::zero(curve),
            curve,
        }
    }

    /// The curve's standard generator
    pub fn base_point(curve: &'static CurveParams) -> Self {
        let (x, y) = curve.base_coordinates();
        Self::from_affine_unchecked(x, y)
    }

    /// Build a point from affine coordinates, checking the curve equation
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        if x.curve().id() != y.curve().id() {
            return Err(Error::CurveMismatch {
                left: x.curve().name(),
                right: y.curve().name(),
            });
        }
        let point = Self::from_affine_unchecked(x, y);
        validate::decode(point.is_on_curve(), "curve point", "not on the curve")?;
        Ok(point)
    }

    fn from_affine_unchecked(x: FieldElement, y: FieldElement) -> Self {
        let curve = x.curve();
        let t = x.multiply(&y);
        Self {
            x,
            y,
            z: FieldElement::one(curve),
            t,
            curve,
        }
    }

    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }

    /// Group addition (add-2008-hwcd)
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(
            self.curve.id(),
            other.curve.id(),
            "adding points from different curves"
        );
        let a = self.x.multiply(&other.x);
        let b = self.y.multiply(&other.y);
        let c = self.t.multiply(&self.curve.d()).multiply(&other.t);
        let d = self.z.multiply(&other.z);
        let e = self
            .x
            .add(&self.y)
            .multiply(&other.x.add(&other.y))
            .subtract(&a)
            .subtract(&b);
        let f = d.subtract(&c);
        let g = d.add(&c);
        let h = b.subtract(&self.curve.a().multiply(&a));
        Self {
            x: e.multiply(&f),
            y: g.multiply(&h),
            z: f.multiply(&g),
            t: e.multiply(&h),
            curve: self.curve,
        }
    }

    /// Point doubling (dbl-2008-hwcd), equal to `self.add(self)`
    pub fn doubling(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let z2 = self.z.square();
        let c = z2.add(&z2);
        let d = self.curve.a().multiply(&a);
        let e = self.x.add(&self.y).square().subtract(&a).subtract(&b);
        let g = d.add(&b);
        let f = g.subtract(&c);
        let h = d.subtract(&b);
        Self {
            x: e.multiply(&f),
            y: g.multiply(&h),
            z: f.multiply(&g),
            t: e.multiply(&h),
            curve: self.curve,
        }
    }

    /// `scalar * self` by most-significant-bit-first double-and-add
    ///
    /// Variable time in the bit length and Hamming weight of `scalar`.
    pub fn scalar_multiply(&self, scalar: &BigUint) -> Self {
        if scalar.is_zero() {
            return Self::identity(self.curve);
        }
        let mut acc = Self::identity(self.curve);
        for bit in to_binary_digits(&scalar.to_bytes_be()) {
            acc = acc.doubling();
            if bit == 1 {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// `(x, -y)`
    pub fn negate_y(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.negate(),
            z: self.z.clone(),
            t: self.t.negate(),
            curve: self.curve,
        }
    }

    /// `(-x, -y)`
    pub fn negate(&self) -> Self {
        Self {
            x: self.x.negate(),
            y: self.y.negate(),
            z: self.z.clone(),
            t: self.t.clone(),
            curve: self.curve,
        }
    }

    /// Affine coordinates `(X/Z, Y/Z)`
    pub fn to_affine(&self) -> Result<(FieldElement, FieldElement)> {
        let z_inv = self.z.inverse()?;
        Ok((self.x.multiply(&z_inv), self.y.multiply(&z_inv)))
    }

    pub fn affine_x(&self) -> Result<FieldElement> {
        Ok(self.to_affine()?.0)
    }

    pub fn affine_y(&self) -> Result<FieldElement> {
        Ok(self.to_affine()?.1)
    }

    /// Compressed encoding: affine `y` little-endian, top bit set to the
    /// parity of affine `x`
    pub fn encode(&self) -> Result<EncodedPoint> {
        let (x, y) = self.to_affine()?;
        let len = self.curve.encoded_len();
        let mut bytes = y.to_bytes_le(len);
        if let Some(last) = bytes.last_mut() {
            *last &= 0x7f;
            if x.is_odd() {
                *last |= 0x80;
            }
        }
        EncodedPoint::new(self.curve, &bytes)
    }

    /// Affine equality
    ///
    /// # Errors
    ///
    /// Returns `CurveMismatch` when the points lie on different curves.
    pub fn is_equal(&self, other: &Self) -> Result<bool> {
        if self.curve.id() != other.curve.id() {
            return Err(Error::CurveMismatch {
                left: self.curve.name(),
                right: other.curve.name(),
            });
        }
        // X1/Z1 == X2/Z2 and Y1/Z1 == Y2/Z2 without inverting
        let x_eq = self.x.multiply(&other.z) == other.x.multiply(&self.z);
        let y_eq = self.y.multiply(&other.z) == other.y.multiply(&self.z);
        Ok(x_eq && y_eq)
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// Whether the point satisfies the projective curve equation
    /// `(aX^2 + Y^2) Z^2 = Z^4 + d X^2 Y^2`
    pub fn is_on_curve(&self) -> bool {
        if self.z.is_zero() {
            return false;
        }
        let x2 = self.x.square();
        let y2 = self.y.square();
        let z2 = self.z.square();
        let lhs = self.curve.a().multiply(&x2).add(&y2).multiply(&z2);
        let rhs = z2
            .square()
            .add(&self.curve.d().multiply(&x2).multiply(&y2));
        lhs == rhs
    }
}

impl fmt::Debug for GroupPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_affine() {
            Ok((x, y)) => f
                .debug_struct("GroupPoint")
                .field("curve", &self.curve.id())
                .field("x", x.value())
                .field("y", y.value())
                .finish(),
            Err(_) => f
                .debug_struct("GroupPoint")
                .field("curve", &self.curve.id())
                .field("z", &"0")
                .finish(),
        }
    }
}
