//! Search Roots
//!
//! Reads the ordered list of search directories from a JSON manifest's
//! `root` field.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;

#[derive(Debug, Deserialize)]
struct Manifest {
    root: Option<Value>,
}

/// Loads the `root` field of the manifest at `path`.
///
/// The field may hold a single directory or an array of directories.
/// Relative entries stay relative to the working directory.
pub async fn load_roots(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_roots(path, &raw)
}

fn parse_roots(path: &Path, raw: &str) -> Result<Vec<PathBuf>, LoadError> {
    let manifest: Manifest = serde_json::from_str(raw)?;
    let invalid = |reason: &str| LoadError::Manifest {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    match manifest.root {
        None => Err(invalid("field \"root\" not found")),
        Some(Value::String(dir)) => Ok(vec![PathBuf::from(dir)]),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(dir) => Ok(PathBuf::from(dir)),
                _ => Err(invalid("\"root\" entries must be strings")),
            })
            .collect(),
        Some(_) => Err(invalid("\"root\" must be a string or an array of strings")),
    }
}
