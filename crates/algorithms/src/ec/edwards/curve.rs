//! Curve parameter tables

use core::fmt;

use edcrypt_params::traditional::eddsa::{
    ED25519_BASE_X, ED25519_BASE_Y, ED25519_D, ED25519_ENCODED_SIZE, ED25519_L, ED25519_P,
    ED25519_SQRT_M1, ED448_BASE_X, ED448_BASE_Y, ED448_D, ED448_ENCODED_SIZE, ED448_L, ED448_P,
};
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

use super::field::FieldElement;
use super::point::GroupPoint;

/// Identifier of a supported curve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// edwards25519
    Ed25519,
    /// edwards448
    Ed448,
}

impl CurveId {
    /// Scheme name of the curve
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ed25519 => "Ed25519",
            Self::Ed448 => "Ed448",
        }
    }

    /// Parameter table for this curve
    pub fn params(&self) -> &'static CurveParams {
        match self {
            Self::Ed25519 => &ED25519,
            Self::Ed448 => &ED448,
        }
    }

    /// Length of an encoded point or scalar in bytes
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Ed25519 => ED25519_ENCODED_SIZE,
            Self::Ed448 => ED448_ENCODED_SIZE,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How square roots are taken in the base field
#[derive(Clone, Debug)]
pub(crate) enum SqrtMethod {
    /// `p = 5 mod 8`: candidate `w^((p+3)/8)`, fixed up by `sqrt(-1)`
    FiveModEight {
        exponent: BigUint,
        sqrt_m1: BigUint,
    },
    /// `p = 3 mod 4`: candidate `w^((p+1)/4)`
    ThreeModFour { exponent: BigUint },
}

/// Constants of one twisted Edwards curve
pub struct CurveParams {
    id: CurveId,
    p: BigUint,
    a: BigUint,
    d: BigUint,
    order: BigUint,
    base_x: BigUint,
    base_y: BigUint,
    encoded_len: usize,
    pub(crate) sqrt: SqrtMethod,
}

/// edwards25519: `-x^2 + y^2 = 1 - (121665/121666) x^2 y^2`
pub static ED25519: Lazy<CurveParams> = Lazy::new(|| {
    let p = BigUint::from_bytes_le(&ED25519_P);
    let exponent = (&p + 3u32) >> 3;
    CurveParams {
        id: CurveId::Ed25519,
        a: &p - 1u32,
        d: BigUint::from_bytes_le(&ED25519_D),
        order: BigUint::from_bytes_le(&ED25519_L),
        base_x: BigUint::from_bytes_le(&ED25519_BASE_X),
        base_y: BigUint::from_bytes_le(&ED25519_BASE_Y),
        encoded_len: ED25519_ENCODED_SIZE,
        sqrt: SqrtMethod::FiveModEight {
            exponent,
            sqrt_m1: BigUint::from_bytes_le(&ED25519_SQRT_M1),
        },
        p,
    }
});

/// edwards448: `x^2 + y^2 = 1 - 39081 x^2 y^2`
pub static ED448: Lazy<CurveParams> = Lazy::new(|| {
    let p = BigUint::from_bytes_le(&ED448_P);
    let exponent = (&p + 1u32) >> 2;
    CurveParams {
        id: CurveId::Ed448,
        a: BigUint::one(),
        d: BigUint::from_bytes_le(&ED448_D),
        order: BigUint::from_bytes_le(&ED448_L),
        base_x: BigUint::from_bytes_le(&ED448_BASE_X),
        base_y: BigUint::from_bytes_le(&ED448_BASE_Y),
        encoded_len: ED448_ENCODED_SIZE,
        sqrt: SqrtMethod::ThreeModFour { exponent },
        p,
    }
});

impl CurveParams {
    pub fn id(&self) -> CurveId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Field prime `p`
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// Order `L` of the prime subgroup generated by the base point
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Length of an encoded point or scalar in bytes
    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Curve coefficient `a` as a field element
    pub fn a(&'static self) -> FieldElement {
        FieldElement::new(self, self.a.clone())
    }

    /// Curve constant `d` as a field element
    pub fn d(&'static self) -> FieldElement {
        FieldElement::new(self, self.d.clone())
    }

    /// Generator of the prime-order subgroup
    pub fn base_point(&'static self) -> GroupPoint {
        GroupPoint::base_point(self)
    }

    pub(crate) fn base_coordinates(&'static self) -> (FieldElement, FieldElement) {
        (
            FieldElement::new(self, self.base_x.clone()),
            FieldElement::new(self, self.base_y.clone()),
        )
    }
}

impl PartialEq for CurveParams {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CurveParams {}

impl fmt::Debug for CurveParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveParams")
            .field("curve", &self.id)
            .field("encoded_len", &self.encoded_len)
            .finish()
    }
}
