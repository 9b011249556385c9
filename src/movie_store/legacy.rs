//! Reader for the legacy flat-JSON store.
//!
//! The legacy format is a single JSON object mapping title to
//! `{"year": ..., "rating": ...}`, with no poster data. It is read-only and
//! only consulted by the one-time import; a missing, empty, or corrupt file
//! reads as an empty store rather than an error.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyMovie {
    pub title: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LegacyRecord {
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    rating: Option<f64>,
}

/// Loads legacy records, sorted by title for deterministic import order.
pub fn load_legacy_movies<P: AsRef<Path>>(path: P) -> Vec<LegacyMovie> {
    let path = path.as_ref();
    if !path.exists() {
        return Vec::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read legacy store {:?}: {}", path, e);
            return Vec::new();
        }
    };
    if content.trim().is_empty() {
        return Vec::new();
    }

    let records: HashMap<String, LegacyRecord> = match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(e) => {
            warn!("Legacy store {:?} is not valid JSON, treating as empty: {}", path, e);
            return Vec::new();
        }
    };

    let mut movies: Vec<LegacyMovie> = records
        .into_iter()
        .map(|(title, record)| LegacyMovie {
            title,
            year: record.year,
            rating: record.rating,
        })
        .collect();
    movies.sort_by(|a, b| a.title.cmp(&b.title));
    movies
}
