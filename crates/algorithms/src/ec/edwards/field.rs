//! Prime field elements
//!
//! A [`FieldElement`] is a residue in `[0, p)` for the prime of the curve it
//! belongs to. Elements are immutable and every operation returns a fresh,
//! reduced value.

use core::fmt;

use edcrypt_internal::bytes::pad_zero_on_tail;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::curve::{CurveParams, SqrtMethod};
use crate::error::{Error, Result};

/// Element of the base field of a curve
#[derive(Clone)]
pub struct FieldElement {
    value: BigUint,
    curve: &'static CurveParams,
}

impl FieldElement {
    /// Reduce `value` modulo the curve prime
    pub fn new(curve: &'static CurveParams, value: BigUint) -> Self {
        let value = if &value >= curve.prime() {
            value % curve.prime()
        } else {
            value
        };
        Self { value, curve }
    }

    pub fn zero(curve: &'static CurveParams) -> Self {
        Self {
            value: BigUint::zero(),
            curve,
        }
    }

    pub fn one(curve: &'static CurveParams) -> Self {
        Self {
            value: BigUint::one(),
            curve,
        }
    }

    /// Interpret little-endian bytes as an integer and reduce it
    pub fn from_bytes_le(curve: &'static CurveParams, bytes: &[u8]) -> Self {
        Self::new(curve, BigUint::from_bytes_le(bytes))
    }

    /// Little-endian bytes, zero padded on the tail to `len`
    pub fn to_bytes_le(&self, len: usize) -> Vec<u8> {
        pad_zero_on_tail(&self.value.to_bytes_le(), len)
    }

    /// Canonical integer value
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Least significant bit of the canonical value
    pub fn is_odd(&self) -> bool {
        self.value
            .to_bytes_le()
            .first()
            .map_or(false, |b| b & 1 == 1)
    }

    pub fn add(&self, other: &Self) -> Self {
        self.check_curve(other);
        Self::new(self.curve, &self.value + &other.value)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        self.check_curve(other);
        Self::new(self.curve, &self.value + self.curve.prime() - &other.value)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        self.check_curve(other);
        Self::new(self.curve, &self.value * &other.value)
    }

    pub fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Additive inverse `p - v`
    pub fn negate(&self) -> Self {
        Self::new(self.curve, self.curve.prime() - &self.value)
    }

    /// Integer quotient `floor(self / other)` of the canonical values
    ///
    /// This is not field division. Callers use it only where the division
    /// is known to be exact; multiply by [`inverse`](Self::inverse) for
    /// field division.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.check_curve(other);
        if other.is_zero() {
            return Err(Error::NotInvertible {
                context: "FieldElement::divide",
            });
        }
        Ok(Self::new(self.curve, &self.value / &other.value))
    }

    /// Reduce the canonical value modulo an arbitrary `modulus`
    pub fn modulo(&self, modulus: &BigUint) -> Result<BigUint> {
        if modulus.is_zero() {
            return Err(Error::param("modulus", "must be non-zero"));
        }
        Ok(&self.value % modulus)
    }

    /// `self^exponent mod p`
    pub fn pow_mod(&self, exponent: &BigUint) -> Self {
        Self {
            value: self.value.modpow(exponent, self.curve.prime()),
            curve: self.curve,
        }
    }

    /// Multiplicative inverse via Fermat, `self^(p-2)`
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::NotInvertible {
                context: "FieldElement::inverse",
            });
        }
        let exponent = self.curve.prime() - 2u32;
        Ok(self.pow_mod(&exponent))
    }

    /// A square root of `self`, if one exists
    ///
    /// Which of the two roots is returned is unspecified; the point decoder
    /// fixes the sign afterwards.
    pub fn sqrt(&self) -> Option<Self> {
        match &self.curve.sqrt {
            SqrtMethod::FiveModEight { exponent, sqrt_m1 } => {
                let candidate = self.pow_mod(exponent);
                let check = candidate.square();
                if &check == self {
                    return Some(candidate);
                }
                if check == self.negate() {
                    let fixed = candidate.multiply(&Self::new(self.curve, sqrt_m1.clone()));
                    return Some(fixed);
                }
                None
            }
            SqrtMethod::ThreeModFour { exponent } => {
                let candidate = self.pow_mod(exponent);
                if &candidate.square() == self {
                    Some(candidate)
                } else {
                    None
                }
            }
        }
    }

    fn check_curve(&self, other: &Self) {
        debug_assert_eq!(
            self.curve.id(),
            other.curve.id(),
            "field elements from different curves"
        );
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.curve.id() == other.curve.id() && self.value == other.value
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({}, 0x{:x})", self.curve.name(), self.value)
    }
}
