//! Constants for X25519 (Curve25519 in Montgomery form)
//!
//! The curve is v² = u³ + 486662·u² + u over GF(p), p = 2^255 - 19.
//! All multi-byte values below are little-endian, matching the wire
//! encoding of RFC 7748.

/// Size of an X25519 private scalar in bytes
pub const X25519_SCALAR_SIZE: usize = 32;

/// Size of an X25519 u-coordinate (public key) in bytes
pub const X25519_POINT_SIZE: usize = 32;

/// Number of scalar bits processed by the Montgomery ladder
pub const X25519_LADDER_BITS: usize = 255;

/// The field prime p = 2^255 - 19
pub const X25519_FIELD_PRIME: [u8; 32] = [
    0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// The inversion exponent p - 2 = 2^255 - 21
pub const X25519_FIELD_PRIME_MINUS_TWO: [u8; 32] = [
    0xeb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// Montgomery coefficient A = 486662
pub const X25519_A: u32 = 486_662;

/// Ladder constant a24 = (A - 2) / 4 = 121665
pub const X25519_A24: u32 = 121_665;

/// u-coordinate of the standard base point
pub const X25519_BASE_POINT_U: u8 = 9;
