//! dyimport - Dynamic module loading with an authenticated TTL cache
//!
//! Resolves modules by file name across configured root directories and
//! memoizes them in an in-memory cache with TTL expiration, a hard capacity
//! bound, and token authentication on every operation.

pub mod cache;
pub mod config;
pub mod error;
pub mod keys;
pub mod loader;

pub use cache::Cache;
pub use config::Config;
pub use error::{CacheError, KeyError, LoadError};
pub use loader::ModuleLoader;
