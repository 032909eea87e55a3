//! Shared constants for X25519 operations

pub use wgkeygen_params::traditional::ecdh::{X25519_POINT_SIZE, X25519_SCALAR_SIZE};

/// Size of an encoded field element in bytes (255 bits rounded up)
pub const X25519_FIELD_ELEMENT_SIZE: usize = 32;

/// Number of 51-bit limbs in a field element
pub(crate) const FIELD_LIMBS: usize = 5;

/// Number of 64-bit words in a decoded scalar
pub(crate) const SCALAR_WORDS: usize = 4;
