//! Project data loader.
//!
//! Reads `data/projects.json` (or any path handed in) as a JSON array of
//! project records, preserving source order.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::LoadError;
use crate::types::ProjectRecord;

/// Load every project record from the JSON file at `path`.
///
/// Returns `LoadError::MissingDataSource` if the file is absent and
/// `LoadError::Malformed` (with line/column context) if it is not a JSON
/// array of objects.
pub fn load_projects_at(path: &Path) -> Result<Vec<ProjectRecord>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::MissingDataSource {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let projects = parse_projects(&contents).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded {} project(s) from {}", projects.len(), path.display());
    Ok(projects)
}

/// Parse project records from an in-memory JSON document.
pub fn parse_projects(json: &str) -> Result<Vec<ProjectRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
