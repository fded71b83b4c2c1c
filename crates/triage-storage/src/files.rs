use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Read a file as UTF-8 text.
pub async fn read_text(path: &Path) -> Result<String, StorageError> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StorageError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// List the `.json` files directly inside `dir`, sorted by path. A missing
/// directory lists as empty.
pub async fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StorageError::Io {
                path: dir.to_path_buf(),
                source: e,
            });
        }
    };

    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| StorageError::Io {
        path: dir.to_path_buf(),
        source: e,
    })? {
        let path = entry.path();
        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if is_file && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
