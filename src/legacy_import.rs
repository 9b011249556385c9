//! One-time import of the legacy flat-JSON store into the SQLite catalog.
//!
//! Membership and core fields are reconciled idempotently; poster URLs are
//! fetched best-effort from the metadata service, so re-running only refetches
//! posters for rows that still lack one.

use crate::metadata::{Lookup, LookupError, MetadataLookup};
use crate::movie_store::{load_legacy_movies, InsertOutcome, LegacyMovie, Movie, MovieStore};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ImportReport {
    pub imported: usize,
    pub already_present: usize,
    pub posters_filled: usize,
    pub lookup_failures: usize,
}

/// Loads the legacy store at `path` and reconciles it into `store`.
/// A missing or unreadable legacy file imports nothing.
pub fn import_legacy_file(
    path: &Path,
    store: &dyn MovieStore,
    lookup: &dyn MetadataLookup,
) -> Result<ImportReport> {
    let legacy = load_legacy_movies(path);
    if legacy.is_empty() {
        info!("Legacy store {:?} has no records, nothing to import", path);
        return Ok(ImportReport::default());
    }

    info!("Importing {} legacy records from {:?}", legacy.len(), path);
    let report = import_records(&legacy, store, lookup)?;
    info!(
        "Legacy import done: {} imported, {} already present, {} posters filled, {} lookup failures",
        report.imported, report.already_present, report.posters_filled, report.lookup_failures
    );
    Ok(report)
}

pub fn import_records(
    legacy: &[LegacyMovie],
    store: &dyn MovieStore,
    lookup: &dyn MetadataLookup,
) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    let bar = ProgressBar::new(legacy.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("static progress template"),
    );

    for record in legacy {
        bar.set_message(record.title.clone());

        // Existence check follows the store's matching contract, so a legacy
        // "inception" does not duplicate a stored "Inception".
        match store.get(&record.title)? {
            None => {
                let poster = fetch_poster(lookup, &record.title, &mut report);
                let movie = Movie {
                    title: record.title.clone(),
                    year: record.year,
                    rating: record.rating,
                    poster,
                };
                match store.insert(&movie)? {
                    InsertOutcome::Inserted => report.imported += 1,
                    InsertOutcome::AlreadyExists(_) => report.already_present += 1,
                }
            }
            Some(existing) if existing.poster.is_none() => {
                report.already_present += 1;
                if let Some(poster) = fetch_poster(lookup, &existing.title, &mut report) {
                    store.update_poster(&existing.title, &poster)?;
                    report.posters_filled += 1;
                }
            }
            Some(_) => report.already_present += 1,
        }

        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(report)
}

/// Best-effort poster lookup: not-found and transport failures both yield no
/// poster rather than aborting the import.
fn fetch_poster(
    lookup: &dyn MetadataLookup,
    title: &str,
    report: &mut ImportReport,
) -> Option<String> {
    match lookup.lookup(title) {
        Ok(Lookup::Found(metadata)) => metadata.poster,
        Ok(Lookup::NotFound) => None,
        Err(LookupError::NotConfigured(_)) => None,
        Err(e) => {
            warn!("Poster lookup for '{}' failed: {}", title, e);
            report.lookup_failures += 1;
            None
        }
    }
}
