//! Error types for folio-site.

use std::path::PathBuf;

use thiserror::Error;

use folio_core::LoadError;
use folio_renderer::RenderError;

/// All errors that can end a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The project data could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The page template could not be found or rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The rendered page could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// `true` for the one anticipated failure: no data file to read.
    pub fn is_missing_data_source(&self) -> bool {
        matches!(self, GenerateError::Load(LoadError::MissingDataSource { .. }))
    }
}

/// Convenience constructor for [`GenerateError::WriteFailure`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerateError {
    GenerateError::WriteFailure {
        path: path.into(),
        source,
    }
}
