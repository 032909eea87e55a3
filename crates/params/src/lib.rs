//! Constant values for the wgkeygen workspace
//!
//! Curve parameters live here as plain `const` items so every crate in the
//! workspace agrees on them at compile time.

#![no_std]
#![forbid(unsafe_code)]

pub mod traditional;
