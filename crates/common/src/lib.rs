//! Common implementations and shared functionality for the wgkeygen workspace
//!
//! Secret material (raw entropy, clamped scalars, private keys) travels in
//! the types defined here so that it is wiped when it goes out of scope.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
