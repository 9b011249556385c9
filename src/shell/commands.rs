//! Command handlers behind the interactive menu.
//!
//! Handlers work against the injected store and lookup traits and return
//! outcome values; only the REPL in `mod.rs` turns outcomes into user-facing
//! text.

use crate::metadata::{Lookup, MetadataLookup};
use crate::movie_store::{InsertOutcome, Movie, MovieStore};
use anyhow::Result;

/// Outcome of the add flow: lookup the title, then insert the canonical
/// record. NotFound and AlreadyExists cause no mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Movie),
    AlreadyExists(String),
    NotFound,
}

pub fn add_movie(
    store: &dyn MovieStore,
    lookup: &dyn MetadataLookup,
    title: &str,
) -> Result<AddOutcome> {
    let metadata = match lookup.lookup(title) {
        Ok(Lookup::Found(metadata)) => metadata,
        Ok(Lookup::NotFound) => return Ok(AddOutcome::NotFound),
        Err(e) => return Err(e.into()),
    };

    // The service's canonical title is what gets stored, not the user input.
    let movie = Movie {
        title: metadata.title,
        year: metadata.year,
        rating: metadata.rating,
        poster: metadata.poster,
    };

    match store.insert(&movie)? {
        InsertOutcome::Inserted => Ok(AddOutcome::Added(movie)),
        InsertOutcome::AlreadyExists(stored_title) => Ok(AddOutcome::AlreadyExists(stored_title)),
    }
}

/// "Title (year): rating" with n/a for absent fields.
pub fn movie_line(movie: &Movie) -> String {
    let year = movie
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    let rating = movie
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "n/a".to_string());
    format!("{} ({}): {}", movie.title, year, rating)
}
