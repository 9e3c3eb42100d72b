//! Keys Module
//!
//! Generates the random, hashed tokens that guard cache access.

mod generate;
mod hash;
mod secret;

pub use generate::{random_string, CharSet};
pub use hash::{digest, verify, HashAlgorithm};
pub use secret::Secret;
