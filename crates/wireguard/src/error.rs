//! Error types for the wgkeygen-wireguard crate.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating keys or building configurations.
#[derive(Debug, Error)]
pub enum Error {
    /// Key generation or key parsing failed in the primitive layer.
    ///
    /// An entropy-source failure arrives here unchanged; check it with
    /// [`Error::is_entropy_failure`].
    #[error(transparent)]
    Key(#[from] wgkeygen_api::Error),

    /// Invalid base64-encoded key.
    #[error("Invalid base64 key: {0}")]
    InvalidKey(String),

    /// Failed to parse endpoint address.
    #[error("Invalid endpoint (expected host:port): {0}")]
    InvalidEndpoint(String),
}

impl Error {
    /// Whether the error reports a failed randomness source.
    pub fn is_entropy_failure(&self) -> bool {
        matches!(self, Error::Key(e) if e.is_entropy_failure())
    }
}
