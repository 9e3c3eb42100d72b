//! Configuration Module
//!
//! Handles loading loader and cache settings from environment variables.

use std::env;
use std::path::PathBuf;

use crate::keys::HashAlgorithm;

/// Default TTL applied when a caller does not pass one.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Loader configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached modules, None = unbounded
    pub capacity: Option<usize>,
    /// TTL in seconds for cached modules
    pub default_ttl: i64,
    /// JSON manifest holding the `root` directory list
    pub manifest: PathBuf,
    /// Explicit search roots, takes precedence over the manifest
    pub roots: Option<Vec<PathBuf>>,
    /// Digest used to derive the access token
    pub hash_algorithm: HashAlgorithm,
    /// Bits of random data fed into the token digest
    pub secret_bits: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DYIMPORT_CAPACITY` - Cache capacity, `0` or `unbounded` disables the bound (default: 100)
    /// - `DYIMPORT_DEFAULT_TTL` - TTL in seconds (default: 3600)
    /// - `DYIMPORT_MANIFEST` - Manifest path (default: package.json)
    /// - `DYIMPORT_ROOTS` - Search roots in `PATH` syntax (default: unset)
    /// - `DYIMPORT_HASH` - `sha256` or `sha512` (default: sha512)
    /// - `DYIMPORT_SECRET_BITS` - Random data length in bits (default: 512)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            capacity: env::var("DYIMPORT_CAPACITY")
                .ok()
                .map(|v| parse_capacity(&v, defaults.capacity))
                .unwrap_or(defaults.capacity),
            default_ttl: env::var("DYIMPORT_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
            manifest: env::var_os("DYIMPORT_MANIFEST")
                .map(PathBuf::from)
                .unwrap_or(defaults.manifest),
            roots: env::var_os("DYIMPORT_ROOTS")
                .map(|v| env::split_paths(&v).collect::<Vec<_>>())
                .filter(|roots| !roots.is_empty()),
            hash_algorithm: env::var("DYIMPORT_HASH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.hash_algorithm),
            secret_bits: env::var("DYIMPORT_SECRET_BITS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|bits| *bits > 0)
                .unwrap_or(defaults.secret_bits),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: Some(100),
            default_ttl: DEFAULT_TTL_SECS,
            manifest: PathBuf::from("package.json"),
            roots: None,
            hash_algorithm: HashAlgorithm::Sha512,
            secret_bits: 512,
        }
    }
}

fn parse_capacity(raw: &str, fallback: Option<usize>) -> Option<usize> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("unbounded") {
        return None;
    }
    match raw.parse::<usize>() {
        Ok(0) => None,
        Ok(n) => Some(n),
        Err(_) => fallback,
    }
}
