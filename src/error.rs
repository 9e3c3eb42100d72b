//! Error types for the cache and the module loader
//!
//! Provides unified error handling using thiserror.

use std::path::PathBuf;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors returned by the cache facade.
///
/// A miss on `get` or `delete` is not an error; both operations report it
/// through their return value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Token did not match the cache secret
    #[error("Unauthorized")]
    Unauthorized,

    /// Cache already holds `capacity` entries
    #[error("Cache limit reached: capacity is {capacity}")]
    CapacityExceeded { capacity: usize },
}

// == Key Error Enum ==
/// Errors raised while generating or hashing secrets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("bit length must be a positive integer")]
    InvalidBitLength,

    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("random data not generated")]
    MissingRandomData,
}

// == Load Error Enum ==
/// Errors raised by the module loader.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid file name provided")]
    InvalidFileName,

    #[error("No matching file found for {0}")]
    NotFound(String),

    #[error("Manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
