//! Typed movie records and store operation outcomes.

use serde::{Deserialize, Serialize};

/// A single catalog entry. `title` is unique within the store; matching is
/// case-insensitive while storage preserves the original casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub poster: Option<String>,
}

impl Movie {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Movie {
            title: title.into(),
            year: None,
            rating: None,
            poster: None,
        }
    }
}

/// Outcome of an insert; a duplicate title is a normal negative outcome,
/// not an error. Carries the stored title's casing.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists(String),
}

/// Outcome of a delete; deleting an absent title is a no-op that must still
/// report non-success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteOutcome {
    Deleted(usize),
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}
