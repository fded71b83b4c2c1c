use std::path::PathBuf;

use thiserror::Error;

use triage_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("document not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document {}: {source}", path.display())]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: CoreError,
    },
}
