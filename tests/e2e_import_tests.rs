//! End-to-end tests for the legacy JSON import
//!
//! Covers first-run migration, idempotent re-runs, poster backfill, and
//! tolerance of broken legacy files and flaky metadata lookups.

mod common;

use common::{matrix_metadata, temp_store, ScriptedLookup, MATRIX_TITLE};

use cineteca::legacy_import::import_legacy_file;
use cineteca::movie_store::MovieStore;
use std::path::PathBuf;

fn write_legacy(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("movies.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_first_run_imports_all_records() {
    let fixture = temp_store();
    let path = write_legacy(
        &fixture.dir,
        r#"{
            "The Matrix": {"rating": 8.7, "year": 1999},
            "Inception": {"rating": 8.8, "year": 2010}
        }"#,
    );
    let lookup = ScriptedLookup::new().with(matrix_metadata());

    let report = import_legacy_file(&path, &fixture.store, &lookup).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.already_present, 0);
    assert_eq!(fixture.store.count().unwrap(), 2);

    // Legacy ratings and years survive the import.
    let matrix = fixture.store.get(MATRIX_TITLE).unwrap().unwrap();
    assert_eq!(matrix.year, Some(1999));
    assert_eq!(matrix.rating, Some(8.7));
    // The poster came from the metadata service.
    assert_eq!(
        matrix.poster.as_deref(),
        Some("http://posters.example.com/matrix.jpg")
    );
    // Inception got no scripted response, so no poster.
    let inception = fixture.store.get("Inception").unwrap().unwrap();
    assert_eq!(inception.poster, None);
}

#[test]
fn test_rerun_is_idempotent_for_membership() {
    let fixture = temp_store();
    let path = write_legacy(
        &fixture.dir,
        r#"{"The Matrix": {"rating": 8.7, "year": 1999}}"#,
    );
    let lookup = ScriptedLookup::new().with(matrix_metadata());

    let first = import_legacy_file(&path, &fixture.store, &lookup).unwrap();
    let second = import_legacy_file(&path, &fixture.store, &lookup).unwrap();

    assert_eq!(first.imported, 1);
    assert_eq!(second.imported, 0);
    assert_eq!(second.already_present, 1);
    assert_eq!(fixture.store.count().unwrap(), 1);
}

#[test]
fn test_rerun_backfills_missing_posters() {
    let fixture = temp_store();
    let path = write_legacy(
        &fixture.dir,
        r#"{"The Matrix": {"rating": 8.7, "year": 1999}}"#,
    );

    // First run: the service knows nothing, so no poster lands.
    let empty_lookup = ScriptedLookup::new();
    import_legacy_file(&path, &fixture.store, &empty_lookup).unwrap();
    assert_eq!(
        fixture.store.get(MATRIX_TITLE).unwrap().unwrap().poster,
        None
    );

    // Second run with a working service fills the missing poster.
    let lookup = ScriptedLookup::new().with(matrix_metadata());
    let report = import_legacy_file(&path, &fixture.store, &lookup).unwrap();

    assert_eq!(report.posters_filled, 1);
    assert_eq!(
        fixture.store.get(MATRIX_TITLE).unwrap().unwrap().poster,
        matrix_metadata().poster
    );

    // Third run: poster already present, the service is not queried again.
    let quiet_lookup = ScriptedLookup::new().with(matrix_metadata());
    import_legacy_file(&path, &fixture.store, &quiet_lookup).unwrap();
    assert_eq!(quiet_lookup.call_count(), 0);
}

#[test]
fn test_lookup_failures_do_not_abort_the_import() {
    let fixture = temp_store();
    let path = write_legacy(
        &fixture.dir,
        r#"{
            "The Matrix": {"rating": 8.7, "year": 1999},
            "Inception": {"rating": 8.8, "year": 2010}
        }"#,
    );
    let lookup = ScriptedLookup::failing();

    let report = import_legacy_file(&path, &fixture.store, &lookup).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.lookup_failures, 2);
    assert_eq!(fixture.store.count().unwrap(), 2);
}

#[test]
fn test_corrupt_legacy_file_imports_nothing() {
    let fixture = temp_store();
    let path = write_legacy(&fixture.dir, "{not json");
    let lookup = ScriptedLookup::new();

    let report = import_legacy_file(&path, &fixture.store, &lookup).unwrap();

    assert_eq!(report.imported, 0);
    assert_eq!(fixture.store.count().unwrap(), 0);
}

#[test]
fn test_missing_legacy_file_imports_nothing() {
    let fixture = temp_store();
    let path = fixture.dir.path().join("does-not-exist.json");
    let lookup = ScriptedLookup::new();

    let report = import_legacy_file(&path, &fixture.store, &lookup).unwrap();

    assert_eq!(report.imported, 0);
    assert_eq!(fixture.store.count().unwrap(), 0);
}

#[test]
fn test_legacy_case_variant_does_not_duplicate_stored_movie() {
    let fixture = temp_store();
    let path = write_legacy(
        &fixture.dir,
        r#"{"THE MATRIX": {"rating": 6.0, "year": 1999}}"#,
    );

    // Pre-existing row with canonical casing and a poster.
    let lookup = ScriptedLookup::new().with(matrix_metadata());
    cineteca::shell::commands::add_movie(&fixture.store, &lookup, MATRIX_TITLE).unwrap();

    let report = import_legacy_file(&path, &fixture.store, &lookup).unwrap();

    assert_eq!(report.imported, 0);
    assert_eq!(report.already_present, 1);
    assert_eq!(fixture.store.count().unwrap(), 1);
    // The stored record keeps its original casing and rating.
    let stored = fixture.store.get(MATRIX_TITLE).unwrap().unwrap();
    assert_eq!(stored.title, MATRIX_TITLE);
    assert_eq!(stored.rating, Some(8.7));
}
