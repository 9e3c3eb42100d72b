//! File Locator
//!
//! Recursive, depth-first search for a file name across root directories.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::{debug, warn};

type ListFuture<'a> = Pin<Box<dyn Future<Output = io::Result<Vec<PathBuf>>> + Send + 'a>>;

/// Returns the first file named `file_name` under the given roots.
///
/// Roots are searched in order; within a root the first depth-first match
/// wins. A root that cannot be read is logged and skipped.
pub async fn find_file<P: AsRef<Path>>(file_name: &str, roots: &[P]) -> Option<PathBuf> {
    for root in roots {
        let root = absolute(root.as_ref());
        match list_files(&root, file_name).await {
            Ok(files) => {
                if let Some(first) = files.into_iter().next() {
                    debug!("Resolved {} to {}", file_name, first.display());
                    return Some(first);
                }
            }
            Err(err) => warn!("Error reading directory {}: {}", root.display(), err),
        }
    }
    None
}

/// Lists every file named `file_name` below `dir`, in depth-first order.
///
/// Directory entries are visited sorted by name. Symbolic links are neither
/// followed nor matched.
pub fn list_files<'a>(dir: &'a Path, file_name: &'a str) -> ListFuture<'a> {
    Box::pin(async move {
        let mut entries = Vec::new();
        let mut read_dir = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = read_dir.next_entry().await? {
            let file_type = entry.file_type().await?;
            entries.push((entry.file_name(), entry.path(), file_type));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut results = Vec::new();
        for (name, path, file_type) in entries {
            if file_type.is_dir() {
                results.extend(list_files(&path, file_name).await?);
            } else if file_type.is_file() && name == file_name {
                results.push(path);
            }
        }
        Ok(results)
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
