//! Page writer.
//!
//! ## `write_document` — 3-step protocol
//!
//! 1. Write the rendered page to `<path>.folio.tmp`.
//! 2. Rename it over the final path (atomic on POSIX).
//! 3. On any failure, remove the `.tmp` and report the error.
//!
//! Parent directories are never created: a missing output directory is a
//! [`GenerateError::WriteFailure`].

use std::path::{Path, PathBuf};

use crate::error::{write_err, GenerateError};

/// Outcome of writing the page: the file now holds exactly the rendered
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Replace the contents of `path` with `content`, byte for byte (UTF-8).
pub fn write_document(path: &Path, content: &str) -> Result<WriteResult, GenerateError> {
    write_document_with_tmp(path, content, &tmp_path_for(path))
}

pub(crate) fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".folio.tmp");
    PathBuf::from(tmp)
}

fn write_document_with_tmp(
    path: &Path,
    content: &str,
    tmp: &Path,
) -> Result<WriteResult, GenerateError> {
    if let Err(e) = std::fs::write(tmp, content) {
        let _ = std::fs::remove_file(tmp);
        return Err(write_err(path, e));
    }

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(write_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult {
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
