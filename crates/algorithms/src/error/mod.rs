//! Error handling for the curve primitives

use alloc::string::String;
use core::fmt;

use wgkeygen_api::Error as CoreError;

/// The error type for the curve primitives
///
/// Arithmetic is total over every 32-byte input, so the only runtime
/// failures are a broken entropy source and length mismatches at the
/// slice-based entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The randomness source failed to deliver the requested bytes
    InsufficientEntropy {
        /// Operation that requested the bytes
        operation: &'static str,
        /// Description of the source failure
        details: String,
    },
}

/// Result type for the curve primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InsufficientEntropy { operation, details } => {
                write!(f, "Entropy source failed during {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InsufficientEntropy { operation, details } => CoreError::InsufficientEntropy {
                context: operation,
                message: details,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
