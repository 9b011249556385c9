//! Snapshot-based reporting: statistics, search, rating sort, random pick.
//!
//! Everything here is a pure derivation over a catalog snapshot obtained via
//! `MovieStore::list`; nothing touches the store directly.

use crate::movie_store::Movie;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    pub mean: f64,
    pub median: f64,
    pub best_rating: f64,
    pub worst_rating: f64,
    pub best: Vec<&'a str>,
    pub worst: Vec<&'a str>,
}

/// Aggregate rating statistics over the rated subset of the snapshot.
/// Returns `None` when no movie carries a rating. Ties for best/worst keep
/// snapshot order.
pub fn statistics(movies: &[Movie]) -> Option<Statistics<'_>> {
    let rated: Vec<(&str, f64)> = movies
        .iter()
        .filter_map(|m| m.rating.map(|r| (m.title.as_str(), r)))
        .collect();
    if rated.is_empty() {
        return None;
    }

    let mean = rated.iter().map(|(_, r)| r).sum::<f64>() / rated.len() as f64;

    let mut sorted: Vec<f64> = rated.iter().map(|(_, r)| *r).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let best_rating = *sorted.last().unwrap();
    let worst_rating = sorted[0];
    let best = rated
        .iter()
        .filter(|(_, r)| *r == best_rating)
        .map(|(title, _)| *title)
        .collect();
    let worst = rated
        .iter()
        .filter(|(_, r)| *r == worst_rating)
        .map(|(title, _)| *title)
        .collect();

    Some(Statistics {
        mean,
        median,
        best_rating,
        worst_rating,
        best,
        worst,
    })
}

/// Case-insensitive substring search on titles, in snapshot order.
pub fn search<'a>(movies: &'a [Movie], needle: &str) -> Vec<&'a Movie> {
    let needle = needle.to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .collect()
}

/// Movies sorted by rating, descending. A missing rating sorts as 0.0; the
/// sort is stable so equally rated movies keep snapshot order.
pub fn sorted_by_rating(movies: &[Movie]) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by(|a, b| {
        b.rating
            .unwrap_or(0.0)
            .total_cmp(&a.rating.unwrap_or(0.0))
    });
    sorted
}

/// Uniform random pick; `None` on an empty snapshot.
pub fn random_pick(movies: &[Movie]) -> Option<&Movie> {
    if movies.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..movies.len());
    Some(&movies[index])
}
