//! Read-only views over a profile's snapshot.
//!
//! Everything here is a pure function over the movies returned by a
//! `list` call; nothing mutates stored state.

pub mod filtering;
pub mod pick;
pub mod search;
pub mod sorting;
pub mod stats;

pub use filtering::{FilterParams, filter};
pub use pick::random_pick;
pub use search::{SearchOutcome, SearchPolicy, search};
pub use sorting::{sort_by_rating, sort_by_year};
pub use stats::{RatingStats, stats};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no movies to summarize")]
    EmptyCollection,
}

#[cfg(test)]
pub(crate) mod testing {
    use cinelog_model::{Movie, MovieId, MovieTitle, Rating, Year};

    pub(crate) fn movie(title: &str, year: i32, rating: f64) -> Movie {
        Movie {
            id: MovieId::new(),
            title: MovieTitle::new(title).unwrap(),
            year: Year::new(year),
            rating: Rating::new(rating),
            poster: None,
            note: None,
        }
    }
}
