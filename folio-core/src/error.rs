//! Error types for folio-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading project data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file did not exist at the expected path.
    #[error("could not find {}", path.display())]
    MissingDataSource { path: PathBuf },

    /// The data file exists but is not a JSON array of objects.
    /// Carries serde_json's line/column context.
    #[error("failed to parse project data at {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other I/O failure while reading the data file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Path of the data file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::MissingDataSource { path }
            | LoadError::Malformed { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }
}
