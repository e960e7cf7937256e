//! Constant values for edcrypt cryptographic operations
//!
//! Curve tables and sizes live here so that the arithmetic crates and the
//! signature crate agree on a single source for every magic number.

#![no_std]

pub mod traditional;
pub mod utils;
