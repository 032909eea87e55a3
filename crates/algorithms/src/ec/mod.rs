//! Elliptic Curve Primitives
//!
//! Only Curve25519 in Montgomery form is provided. The implementation keeps
//! to the u-coordinate-only arithmetic of RFC 7748, which is all X25519 key
//! derivation needs.

pub mod x25519;
