use serde::{Deserialize, Serialize};

use crate::{MovieId, MovieTitle, Rating, Year};

/// A persisted movie record, exclusively owned by one user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: MovieTitle,
    pub year: Year,
    pub rating: Rating,
    pub poster: Option<String>,
    pub note: Option<String>,
}

/// Fields required to create a movie record.
///
/// Notes start out absent and are attached later through an explicit update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: MovieTitle,
    pub year: Year,
    pub rating: Rating,
    pub poster: Option<String>,
}

impl NewMovie {
    pub fn new(title: MovieTitle, year: Year, rating: Rating) -> Self {
        NewMovie {
            title,
            year,
            rating,
            poster: None,
        }
    }

    pub fn with_poster(mut self, poster: Option<String>) -> Self {
        self.poster = poster;
        self
    }
}
