//! Digest helpers
//!
//! Hex-encoded SHA-2 digests and digest verification.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256, Sha512};
use tracing::debug;

use crate::error::KeyError;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl FromStr for HashAlgorithm {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(KeyError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => f.write_str("sha256"),
            HashAlgorithm::Sha512 => f.write_str("sha512"),
        }
    }
}

/// Returns the lowercase hex digest of `input`.
pub fn digest(algorithm: HashAlgorithm, input: impl AsRef<[u8]>) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(input.as_ref())),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(input.as_ref())),
    }
}

/// Checks whether `input` hashes to `expected`.
pub fn verify(algorithm: HashAlgorithm, input: impl AsRef<[u8]>, expected: &str) -> bool {
    let matched = digest(algorithm, input) == expected;
    if !matched {
        debug!("{} verification failed", algorithm);
    }
    matched
}
