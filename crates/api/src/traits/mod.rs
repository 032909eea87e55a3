//! Traits implemented by the public key types

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
