//! X25519 scalar encoding and clamping
//!
//! A scalar is a 32-byte little-endian string read as an unsigned 256-bit
//! integer. Private keys are additionally clamped: the low three bits are
//! cleared (a multiple of the cofactor 8), bit 255 is cleared and bit 254
//! is set, placing the integer in [2^254, 2^255).

use crate::ec::x25519::constants::{SCALAR_WORDS, X25519_SCALAR_SIZE};
use core::fmt;
use subtle::Choice;
use wgkeygen_internal::endian::{load_u64_words_le, store_u64_words_le};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Decode 32 little-endian bytes into four 64-bit words, least significant first
///
/// Byte `i` contributes `bytes[i] * 256^i` to the integer.
pub fn decode_le(bytes: &[u8; X25519_SCALAR_SIZE]) -> [u64; SCALAR_WORDS] {
    load_u64_words_le::<SCALAR_WORDS>(bytes)
}

/// Encode four 64-bit words (least significant first) as 32 little-endian bytes
///
/// Inverse of [`decode_le`]. The width is fixed at 256 bits.
pub fn encode_le(words: &[u64; SCALAR_WORDS]) -> [u8; X25519_SCALAR_SIZE] {
    let mut out = [0u8; X25519_SCALAR_SIZE];
    store_u64_words_le(words, &mut out);
    out
}

/// Clamp raw bytes into a valid Curve25519 private scalar
///
/// Idempotent: clamping an already clamped buffer returns it unchanged.
pub fn clamp(mut bytes: [u8; X25519_SCALAR_SIZE]) -> [u8; X25519_SCALAR_SIZE] {
    clamp_in_place(&mut bytes);
    bytes
}

/// Clamp a scalar buffer in place
pub fn clamp_in_place(bytes: &mut [u8; X25519_SCALAR_SIZE]) {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
}

/// A decoded 256-bit scalar
///
/// Holds secret key material; the words are wiped on drop and never
/// printed by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u64; SCALAR_WORDS]);

impl Scalar {
    /// Decode a scalar without clamping
    ///
    /// Used for the raw ladder, which multiplies by exactly the integer it
    /// is given.
    pub fn from_bytes(bytes: &[u8; X25519_SCALAR_SIZE]) -> Self {
        Scalar(decode_le(bytes))
    }

    /// Clamp and decode a scalar
    pub fn from_bytes_clamped(bytes: &[u8; X25519_SCALAR_SIZE]) -> Self {
        let mut clamped = *bytes;
        clamp_in_place(&mut clamped);
        let scalar = Scalar(decode_le(&clamped));
        clamped.zeroize();
        scalar
    }

    /// Encode the scalar back to 32 little-endian bytes
    pub fn to_bytes(&self) -> [u8; X25519_SCALAR_SIZE] {
        encode_le(&self.0)
    }

    /// Bit `index` of the integer (0 is least significant)
    ///
    /// The index is public; the bit value is returned as a `Choice` so it
    /// can drive masked swaps without becoming a branch condition.
    #[inline(always)]
    pub fn bit(&self, index: usize) -> Choice {
        let word = self.0[index / 64];
        Choice::from(((word >> (index % 64)) & 1) as u8)
    }

    /// Whether the scalar satisfies the clamping invariants
    pub fn is_clamped(&self) -> bool {
        let low = self.0[0] & 0b111;
        let top = self.0[3] >> 62;
        low == 0 && top == 0b01
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar([REDACTED])")
    }
}
