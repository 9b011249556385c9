mod legacy;
mod models;
mod schema;
mod store;
mod trait_def;

pub use legacy::{load_legacy_movies, LegacyMovie};
pub use models::{DeleteOutcome, InsertOutcome, Movie, UpdateOutcome};
pub use store::SqliteMovieStore;
pub use trait_def::MovieStore;
