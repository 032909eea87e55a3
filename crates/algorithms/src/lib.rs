//! Curve25519 key-pair derivation primitives
//!
//! This crate implements, from first principles, the pieces needed to turn
//! 32 bytes of entropy into an X25519 key pair:
//!
//! - arithmetic in GF(2^255 - 19) on five 51-bit limbs
//! - the fixed-width little-endian scalar codec and scalar clamping
//! - the RFC 7748 Montgomery ladder over u-coordinates
//! - key-pair generation against the base point u = 9
//!
//! # Security Features
//!
//! - The ladder always runs 255 iterations and swaps its working points
//!   with a mask, never with a branch on key bits
//! - Field equality and selection go through `subtle`
//! - Raw entropy and private scalars live in zeroizing buffers

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::x25519::{
    base_point_u, generate_keypair, ladder, x25519, x25519_base, FieldElement, Scalar,
    X25519_POINT_SIZE, X25519_SCALAR_SIZE,
};

// Re-export security types from wgkeygen-common
pub use wgkeygen_common::security::SecretBuffer;
