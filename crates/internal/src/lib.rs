//! Internal utilities for the wgkeygen workspace
//!
//! Constant-time comparison helpers and little-endian word loaders shared by
//! the field and scalar code. Nothing in here is part of the public API
//! contract of the facade crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_choice, ct_is_zero};
