//! Error type definitions for EdDSA operations

use thiserror::Error as ThisError;

/// Primary error type for EdDSA operations
///
/// Only caller misuse surfaces through this type. A signature that simply
/// does not verify is reported as `Ok(false)` by the signer, never as an
/// error; `Decode` escapes only from the explicit decoding entry points.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Bytes do not encode a valid point or scalar
    #[error("decode error in {context}: {message}")]
    Decode {
        context: &'static str,
        message: String,
    },

    /// Equality check between points of different curves
    #[error("{left} point cannot be compared with {right} point")]
    IllegalComparison {
        left: &'static str,
        right: &'static str,
    },

    /// Invalid argument, such as a key sized for another curve
    #[error("invalid argument in {context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// Context string longer than 255 bytes
    #[error("invalid context: {length} bytes exceeds the 255 byte limit")]
    InvalidContext { length: usize },

    /// The requested hash algorithm or provider is missing
    #[error("hashing unavailable for {algorithm}: {message}")]
    HashingUnavailable {
        algorithm: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Text encoding error (hex)
    #[error("encoding error in {context}: {message}")]
    Encoding {
        context: &'static str,
        message: String,
    },

    /// Inverse requested for the zero element
    #[error("{context}: element is not invertible")]
    NotInvertible { context: &'static str },
}

/// Result type for EdDSA operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Decode { message, .. } => Self::Decode { context, message },
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Encoding { message, .. } => Self::Encoding { context, message },
            Self::NotInvertible { .. } => Self::NotInvertible { context },
            other => other,
        }
    }

    /// Shorthand for an `InvalidArgument` error
    pub fn invalid_argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Whether this error came from decoding untrusted bytes
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
