//! Module Loader
//!
//! Resolves file names across search roots, loads them, and memoizes the
//! result in an authenticated cache keyed by file name.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{Cache, CacheStatus};
use crate::config::Config;
use crate::error::{CacheError, LoadError};
use crate::keys::Secret;
use crate::loader::{find_file, load_roots, LoadedModule};

/// Shared handle to a loaded module.
pub type SharedModule = Arc<LoadedModule>;

// == Module Loader ==
/// Owns one cache and the token that unlocks it.
///
/// Build one per independent module namespace and pass it to whatever needs
/// to load modules.
pub struct ModuleLoader {
    cache: Cache<SharedModule>,
    token: String,
    roots: Vec<PathBuf>,
}

impl ModuleLoader {
    /// Creates a loader over an existing cache.
    ///
    /// `token` must match the secret `cache` was built with.
    pub fn new(cache: Cache<SharedModule>, token: impl Into<String>, roots: Vec<PathBuf>) -> Self {
        Self {
            cache,
            token: token.into(),
            roots,
        }
    }

    /// Builds a loader from configuration.
    ///
    /// A fresh token is generated and used both as the cache secret and as
    /// the loader's own credential. Search roots come from `config.roots` or,
    /// when unset, from the manifest's `root` field.
    pub async fn from_config(config: &Config) -> Result<Self, LoadError> {
        let token = Secret::issue_token(config.hash_algorithm, config.secret_bits)?;

        let cache = match config.capacity {
            Some(capacity) => Cache::with_capacity(token.clone(), capacity),
            None => Cache::new(token.clone()),
        }
        .with_default_ttl(config.default_ttl);

        let roots = match &config.roots {
            Some(roots) => roots.clone(),
            None => load_roots(&config.manifest).await?,
        };
        info!("Module loader initialized with {} search roots", roots.len());

        Ok(Self::new(cache, token, roots))
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    // == Load ==
    /// Loads `file_name`, serving it from the cache when possible.
    ///
    /// The path is resolved before the cache is consulted, so a file that
    /// disappeared from every root fails with `NotFound` even while cached.
    /// When the cache is full the module is still returned, just not cached.
    pub async fn load(&self, file_name: &str) -> Result<SharedModule, LoadError> {
        if file_name.trim().is_empty() {
            return Err(LoadError::InvalidFileName);
        }

        let full_path = find_file(file_name, self.roots.as_slice())
            .await
            .ok_or_else(|| LoadError::NotFound(file_name.to_string()))?;

        if let Some(module) = self.cache.get(file_name, &self.token)? {
            debug!("Cache hit for {}", file_name);
            return Ok(module);
        }

        let module = Arc::new(LoadedModule::read(file_name, &full_path).await?);
        info!("Loaded {} from {}", file_name, full_path.display());

        match self
            .cache
            .add(file_name, Arc::clone(&module), &self.token, None)
        {
            Ok(()) => {}
            Err(CacheError::CapacityExceeded { capacity }) => {
                warn!(
                    "Module cache is full ({} entries), {} was not cached",
                    capacity, file_name
                );
            }
            Err(err) => return Err(err.into()),
        }

        Ok(module)
    }

    // == Cache Passthrough ==
    /// Snapshot of the cached modules.
    pub fn status(&self) -> Result<CacheStatus<SharedModule>, LoadError> {
        Ok(self.cache.status(&self.token)?)
    }

    /// Drops `file_name` from the cache so the next load rereads it.
    pub fn evict(&self, file_name: &str) -> Result<bool, LoadError> {
        Ok(self.cache.delete(file_name, &self.token)?)
    }

    /// Drops every cached module.
    pub fn clear(&self) -> Result<(), LoadError> {
        Ok(self.cache.clear(&self.token)?)
    }

    /// The cache backing this loader.
    ///
    /// Callers without the loader's token can hold the reference but cannot
    /// read or modify it.
    pub fn cache(&self) -> &Cache<SharedModule> {
        &self.cache
    }
}

impl std::fmt::Debug for ModuleLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleLoader")
            .field("cache", &self.cache)
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}
