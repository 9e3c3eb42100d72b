//! Loaded Module
//!
//! The artifact produced by loading a resolved file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::keys::{digest, HashAlgorithm};

// == Loaded Module ==
/// A file read from disk and ready to be shared through the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedModule {
    /// File name the module was requested by
    pub name: String,
    /// Resolved absolute path
    pub path: PathBuf,
    /// File contents
    #[serde(skip_serializing)]
    pub source: String,
    /// SHA-256 of the contents, hex encoded
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
}

impl LoadedModule {
    /// Reads the module at `path`.
    pub async fn read(name: impl Into<String>, path: &Path) -> std::io::Result<Self> {
        let source = tokio::fs::read_to_string(path).await?;
        Ok(Self::from_source(name, path, source))
    }

    pub fn from_source(name: impl Into<String>, path: &Path, source: String) -> Self {
        Self {
            name: name.into(),
            path: path.to_path_buf(),
            checksum: digest(HashAlgorithm::Sha256, &source),
            source,
            loaded_at: Utc::now(),
        }
    }

    /// Size of the contents in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_module() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("testFile.js");
        std::fs::write(&path, "export function test1() {}").unwrap();

        let module = LoadedModule::read("testFile.js", &path).await.unwrap();

        assert_eq!(module.name, "testFile.js");
        assert_eq!(module.path, path);
        assert_eq!(module.len(), 26);
        assert_eq!(module.checksum, digest(HashAlgorithm::Sha256, "export function test1() {}"));
    }

    #[tokio::test]
    async fn test_read_missing_module() {
        let dir = TempDir::new().unwrap();
        let result = LoadedModule::read("gone.js", &dir.path().join("gone.js")).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_source() {
        let module = LoadedModule::from_source("a.js", Path::new("/tmp/a.js"), "secret".to_string());
        let json = serde_json::to_value(&module).unwrap();

        assert_eq!(json["name"], "a.js");
        assert!(json.get("source").is_none());
        assert!(json.get("checksum").is_some());
    }
}
