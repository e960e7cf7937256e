//! Internal utilities for the edcrypt library
//!
//! Nothing in this crate is cryptographic on its own. It holds the byte
//! shuffling helpers the Edwards code needs (splitting, tail padding,
//! joining, binary digit extraction) and the constant-time comparison
//! used for secret key equality.

pub mod bytes;
pub mod constant_time;
