mod omdb;

pub use omdb::{OmdbClient, DEFAULT_OMDB_BASE_URL};

use thiserror::Error;

/// Metadata for a movie as resolved by the external service. The title is
/// the service's canonical casing, which is what gets stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMetadata {
    pub title: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub poster: Option<String>,
}

/// A lookup that completed without a transport error. "No such movie" is a
/// normal negative outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(MovieMetadata),
    NotFound,
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("metadata lookup is not configured: {0}")]
    NotConfigured(&'static str),

    #[error("network error while querying OMDb: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OMDb request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed OMDb response: {0}")]
    Malformed(String),
}

/// External metadata service, keyed by title. `OmdbClient` is the production
/// implementation; tests script their own.
pub trait MetadataLookup {
    fn lookup(&self, title: &str) -> Result<Lookup, LookupError>;
}
