//! Error type definitions for key-pair operations

use alloc::string::String;

/// Primary error type for key-pair operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The randomness source could not supply the requested bytes
    ///
    /// Key generation aborts on this error. It is never retried internally
    /// and no weaker source is substituted.
    InsufficientEntropy {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for key-pair operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InsufficientEntropy { message, .. } => {
                Self::InsufficientEntropy { context, message }
            }
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }

    /// Whether this error reports a failed randomness source
    pub fn is_entropy_failure(&self) -> bool {
        matches!(self, Self::InsufficientEntropy { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InsufficientEntropy { context, message } => {
                write!(f, "Insufficient entropy: {}: {}", context, message)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
        }
    }
}
