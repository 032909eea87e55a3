//! Public API traits and types for the wgkeygen workspace
//!
//! This crate provides the error type every other crate converts into and
//! the byte-serialization traits implemented by the key types.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{Serialize, SerializeSecret};
