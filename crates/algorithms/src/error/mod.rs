//! Error handling for the arithmetic primitives

use std::borrow::Cow;

use edcrypt_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for arithmetic and codec primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Bytes that do not encode a curve element
    #[error("cannot decode {context}: {reason}")]
    Decode {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        reason: &'static str,
    },

    /// Operands taken from two different curves
    #[error("{left} value cannot be combined with {right} value")]
    CurveMismatch {
        /// Curve of the left operand
        left: &'static str,
        /// Curve of the right operand
        right: &'static str,
    },

    /// Inverse or division requested for zero
    #[error("{context}: zero is not invertible")]
    NotInvertible {
        /// Operation that failed
        context: &'static str,
    },

    /// Hash algorithm the provider cannot serve
    #[error("{algorithm} unavailable: {details}")]
    Unsupported {
        /// Algorithm name
        algorithm: &'static str,
        /// Additional details
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for arithmetic primitives
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for hash operations
pub type HashResult<T> = Result<T>;

// Conversion into the public error type
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidArgument {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Decode { context, reason } => CoreError::Decode {
                context,
                message: reason.to_string(),
            },
            Error::CurveMismatch { left, right } => CoreError::IllegalComparison { left, right },
            Error::NotInvertible { context } => CoreError::NotInvertible { context },
            Error::Unsupported { algorithm, details } => CoreError::HashingUnavailable {
                algorithm,
                message: details,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
