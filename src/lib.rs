//! Cineteca Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod cli_style;
pub mod config;
pub mod legacy_import;
pub mod metadata;
pub mod movie_store;
pub mod reporting;
pub mod shell;
pub mod sqlite_persistence;
pub mod website;

// Re-export commonly used types for convenience
pub use metadata::{Lookup, MetadataLookup, MovieMetadata, OmdbClient};
pub use movie_store::{Movie, MovieStore, SqliteMovieStore};
