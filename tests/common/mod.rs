//! Common test infrastructure
//!
//! Temp-backed store fixtures and a scripted metadata service shared by the
//! end-to-end tests. Tests import from this module only.

#![allow(dead_code)]

use cineteca::metadata::{Lookup, LookupError, MetadataLookup, MovieMetadata};
use cineteca::movie_store::SqliteMovieStore;
use std::collections::HashMap;
use std::sync::Mutex;
use tempfile::TempDir;

pub const MATRIX_TITLE: &str = "The Matrix";
pub const INCEPTION_TITLE: &str = "Inception";
pub const ROOM_TITLE: &str = "The Room";

/// A movie store backed by a fresh database in a temp directory. The
/// directory is dropped with the fixture.
pub struct TestStore {
    pub store: SqliteMovieStore,
    pub dir: TempDir,
}

pub fn temp_store() -> TestStore {
    let dir = TempDir::new().unwrap();
    let store = SqliteMovieStore::new(dir.path().join("movies.db")).unwrap();
    TestStore { store, dir }
}

/// Stand-in for the metadata service. Responses are keyed by lowercased
/// title; unknown titles resolve to NotFound. `failing()` errors on every
/// call to exercise transport-failure paths.
pub struct ScriptedLookup {
    responses: HashMap<String, MovieMetadata>,
    fail_all: bool,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        ScriptedLookup {
            responses: HashMap::new(),
            fail_all: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        ScriptedLookup {
            responses: HashMap::new(),
            fail_all: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, metadata: MovieMetadata) -> Self {
        self.responses
            .insert(metadata.title.to_lowercase(), metadata);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl MetadataLookup for ScriptedLookup {
    fn lookup(&self, title: &str) -> Result<Lookup, LookupError> {
        self.calls.lock().unwrap().push(title.to_string());
        if self.fail_all {
            return Err(LookupError::Malformed("scripted failure".to_string()));
        }
        match self.responses.get(&title.to_lowercase()) {
            Some(metadata) => Ok(Lookup::Found(metadata.clone())),
            None => Ok(Lookup::NotFound),
        }
    }
}

pub fn metadata(
    title: &str,
    year: Option<i32>,
    rating: Option<f64>,
    poster: Option<&str>,
) -> MovieMetadata {
    MovieMetadata {
        title: title.to_string(),
        year,
        rating,
        poster: poster.map(String::from),
    }
}

pub fn matrix_metadata() -> MovieMetadata {
    metadata(
        MATRIX_TITLE,
        Some(1999),
        Some(8.7),
        Some("http://posters.example.com/matrix.jpg"),
    )
}

pub fn inception_metadata() -> MovieMetadata {
    metadata(
        INCEPTION_TITLE,
        Some(2010),
        Some(8.8),
        Some("http://posters.example.com/inception.jpg"),
    )
}

pub fn room_metadata() -> MovieMetadata {
    metadata(ROOM_TITLE, Some(2003), Some(3.6), None)
}
