//! Security primitives for handling sensitive key material

pub mod secret;

pub use secret::SecretBuffer;
