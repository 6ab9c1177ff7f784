//! Loader error-message and file-handling integration tests.

use assert_fs::prelude::*;
use folio_core::{loader, LoadError};
use predicates::prelude::predicate;

// ---------------------------------------------------------------------------
// 1. Happy path
// ---------------------------------------------------------------------------

#[test]
fn load_reads_records_in_file_order() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("projects.json");
    file.write_str(
        r#"[
            {"id": "a", "category": "Web", "title": "Alpha"},
            {"id": "crm-orchestrator", "category": "Infra"},
            {"id": "b", "title": "Beta"}
        ]"#,
    )
    .expect("write");

    let projects = loader::load_projects_at(file.path()).expect("load");
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].id(), Some("a"));
    assert_eq!(projects[1].id(), Some("crm-orchestrator"));
    assert!(!projects[2].fields.contains_key("category"));
    assert_eq!(projects[2].fields["title"], "Beta");
}

#[test]
fn load_keeps_non_ascii_payload() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("projects.json");
    file.write_str(r#"[{"id": "ñ", "title": "Diseño — 日本語 ✓"}]"#)
        .expect("write");

    let projects = loader::load_projects_at(file.path()).expect("load");
    assert_eq!(projects[0].id(), Some("ñ"));
    assert_eq!(projects[0].fields["title"], "Diseño — 日本語 ✓");
}

// ---------------------------------------------------------------------------
// 2. Error messages
// ---------------------------------------------------------------------------

#[test]
fn load_missing_file_returns_missing_data_source() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let path = dir.path().join("data").join("projects.json");

    let err = loader::load_projects_at(&path).unwrap_err();
    assert!(matches!(err, LoadError::MissingDataSource { .. }), "got: {err}");
    assert_eq!(err.path(), path.as_path());
    let msg = err.to_string();
    assert!(msg.contains("could not find"), "got: {msg}");
    assert!(msg.contains("projects.json"), "must name the path, got: {msg}");

    dir.child("data").assert(predicate::path::missing());
}

#[test]
fn load_corrupt_json_returns_malformed_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("projects.json");
    file.write_str(r#"[{"id": "a",, }"#).expect("write");

    let err = loader::load_projects_at(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("projects.json"), "must contain file path, got: {msg}");
    match &err {
        LoadError::Malformed { source, .. } => assert!(source.line() >= 1),
        _ => unreachable!(),
    }
}

#[test]
fn load_object_root_returns_malformed() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("projects.json");
    file.write_str(r#"{"projects": []}"#).expect("write");

    let err = loader::load_projects_at(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }), "got: {err}");
}

#[test]
fn load_directory_returns_io_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    dir.child("projects.json").create_dir_all().expect("mkdir");

    let err = loader::load_projects_at(&dir.path().join("projects.json")).unwrap_err();
    assert!(
        matches!(err, LoadError::Io { .. } | LoadError::Malformed { .. }),
        "got: {err}"
    );
}
