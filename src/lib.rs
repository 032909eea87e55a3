//! # wgkeygen
//!
//! Curve25519 key-pair derivation for issuing WireGuard client
//! configurations.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wgkeygen = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `wireguard` (default): typed keys, base64 text and configuration rendering
//! - `serde`: serde support for public keys and server settings
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`wgkeygen-algorithms`]: field arithmetic, scalar codec, Montgomery ladder
//!   and key-pair generation
//! - [`wgkeygen-wireguard`]: WireGuard keys and client configurations
//! - [`wgkeygen-api`], [`wgkeygen-common`], [`wgkeygen-internal`],
//!   [`wgkeygen-params`]: errors, secret buffers, constant-time helpers and
//!   curve constants

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use wgkeygen_algorithms as algorithms;
pub use wgkeygen_api as api;
pub use wgkeygen_common as common;
pub use wgkeygen_internal as internal;
pub use wgkeygen_params as params;

// Feature-gated re-exports
#[cfg(feature = "wireguard")]
pub use wgkeygen_wireguard as wireguard;

// Third-party crates that appear in public signatures
#[cfg(feature = "wireguard")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for wgkeygen users
pub mod prelude {
    pub use crate::api::{Error, Result, Serialize, SerializeSecret};
    pub use crate::common::SecretBuffer;

    pub use crate::algorithms::{
        base_point_u, generate_keypair, ladder, x25519, x25519_base, FieldElement, Scalar,
    };

    #[cfg(feature = "wireguard")]
    pub use crate::wireguard::{
        client_address, ClientConfig, KeyPair, PrivateKey, PublicKey, ServerSettings,
    };
}
