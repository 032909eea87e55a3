//! Byte encodings of key material
//!
//! Keys travel as fixed 32-byte strings. Parsing checks the length and
//! reports a mismatch as [`Error::InvalidLength`](crate::Error::InvalidLength).

use crate::Result;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// Public key material, such as a u-coordinate
pub trait Serialize: Sized {
    /// Parse from raw bytes, checking the length
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// The raw bytes
    fn to_bytes(&self) -> Vec<u8>;
}

/// Private key material
///
/// The byte copy handed out is wiped when dropped; callers that pass
/// secret bytes to `from_bytes` remain responsible for wiping their input.
pub trait SerializeSecret: Sized {
    /// Parse from raw bytes, checking the length
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// The raw bytes in a buffer that is zeroized on drop
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
