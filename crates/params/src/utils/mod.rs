//! Constant values shared by the hashing glue

pub mod hash;
