//! MovieStore trait definition.
//!
//! Abstracts the catalog's persistence so the shell, reporting, and import
//! code work against an injected store. `SqliteMovieStore` is the production
//! implementation; tests use in-memory stubs.

use super::models::{DeleteOutcome, InsertOutcome, Movie, UpdateOutcome};
use anyhow::Result;

pub trait MovieStore {
    /// Full catalog snapshot in insertion order.
    fn list(&self) -> Result<Vec<Movie>>;

    /// Look up a movie by title, case-insensitively.
    fn get(&self, title: &str) -> Result<Option<Movie>>;

    /// Insert a movie. The existence check and the insert run in a single
    /// transaction so two concurrent adds of the same title cannot both
    /// succeed.
    fn insert(&self, movie: &Movie) -> Result<InsertOutcome>;

    /// Delete a movie by title, case-insensitively.
    fn delete(&self, title: &str) -> Result<DeleteOutcome>;

    /// Set the rating of an existing movie. Range validation happens at the
    /// input boundary, not here.
    fn update_rating(&self, title: &str, rating: f64) -> Result<UpdateOutcome>;

    /// Set the poster URL of an existing movie. Used by the legacy import to
    /// backfill posters.
    fn update_poster(&self, title: &str, poster: &str) -> Result<UpdateOutcome>;

    /// Number of movies in the catalog.
    fn count(&self) -> Result<usize>;
}
