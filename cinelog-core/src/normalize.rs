//! Turns raw OMDb fields into validated record values.

use std::ops::RangeInclusive;

use cinelog_model::{MovieTitle, Rating, Year};
use thiserror::Error;

use crate::providers::OmdbMovie;

/// The marker OMDb uses in place of a missing field value.
const UNAVAILABLE: &str = "N/A";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("field '{0}' is unusable and no fallback value was supplied")]
    MissingField(&'static str),

    #[error("input error: {0}")]
    Input(String),
}

/// Source of replacement values when a metadata field is unusable.
///
/// The interactive shell prompts the user within the supplied bounds;
/// non-interactive contexts use [`NoFallback`] and surface the failure.
pub trait FieldFallback {
    fn year(
        &self,
        bounds: &RangeInclusive<i32>,
    ) -> Result<Year, NormalizeError>;

    fn rating(
        &self,
        bounds: &RangeInclusive<f64>,
    ) -> Result<Rating, NormalizeError>;
}

/// Fallback that refuses to supply anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl FieldFallback for NoFallback {
    fn year(
        &self,
        _bounds: &RangeInclusive<i32>,
    ) -> Result<Year, NormalizeError> {
        Err(NormalizeError::MissingField("year"))
    }

    fn rating(
        &self,
        _bounds: &RangeInclusive<f64>,
    ) -> Result<Rating, NormalizeError> {
        Err(NormalizeError::MissingField("rating"))
    }
}

/// Valid ranges handed to the fallback when it has to prompt.
#[derive(Debug, Clone)]
pub struct NormalizeBounds {
    pub year: RangeInclusive<i32>,
    pub rating: RangeInclusive<f64>,
}

impl Default for NormalizeBounds {
    fn default() -> Self {
        Self {
            year: 1900..=2025,
            rating: 0.0..=10.0,
        }
    }
}

/// Typed, validated fields ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMovie {
    pub title: MovieTitle,
    pub year: Year,
    pub rating: Rating,
    pub poster: Option<String>,
}

pub fn normalize(
    raw: &OmdbMovie,
    bounds: &NormalizeBounds,
    fallback: &dyn FieldFallback,
) -> Result<NormalizedMovie, NormalizeError> {
    // The canonical title from the source gets persisted, not the query string.
    let title = MovieTitle::new(&raw.title)
        .map_err(|_| NormalizeError::MissingField("title"))?;

    let year = match parse_year(&raw.year) {
        Some(year) => Year::new(year),
        None => fallback.year(&bounds.year)?,
    };

    let rating = match raw.imdb_rating.as_deref().and_then(parse_rating) {
        Some(value) => Rating::new(value),
        None => fallback.rating(&bounds.rating)?,
    };

    Ok(NormalizedMovie {
        title,
        year,
        rating,
        poster: normalize_poster(raw.poster.as_deref()),
    })
}

/// OMDb year strings come in forms like `1999`, `2001–2003`, or `2012-`;
/// the leading run of digits is the release year.
fn parse_year(raw: &str) -> Option<i32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn parse_rating(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(UNAVAILABLE) {
        return None;
    }
    raw.parse().ok()
}

/// Absent means absent: the sentinel and the empty string both map to `None`.
fn normalize_poster(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(UNAVAILABLE) {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedFallback {
        year: i32,
        rating: f64,
    }

    impl FieldFallback for CannedFallback {
        fn year(
            &self,
            _bounds: &RangeInclusive<i32>,
        ) -> Result<Year, NormalizeError> {
            Ok(Year::new(self.year))
        }

        fn rating(
            &self,
            _bounds: &RangeInclusive<f64>,
        ) -> Result<Rating, NormalizeError> {
            Ok(Rating::new(self.rating))
        }
    }

    fn raw(year: &str, rating: Option<&str>, poster: Option<&str>) -> OmdbMovie {
        OmdbMovie {
            title: "Blade Runner".to_string(),
            year: year.to_string(),
            imdb_rating: rating.map(str::to_string),
            poster: poster.map(str::to_string),
        }
    }

    #[test]
    fn clean_fields_pass_straight_through() {
        let normalized = normalize(
            &raw("1982", Some("8.1"), Some("https://example.com/p.jpg")),
            &NormalizeBounds::default(),
            &NoFallback,
        )
        .unwrap();
        assert_eq!(normalized.title.as_str(), "Blade Runner");
        assert_eq!(normalized.year.value(), 1982);
        assert_eq!(normalized.rating.value(), 8.1);
        assert_eq!(
            normalized.poster.as_deref(),
            Some("https://example.com/p.jpg")
        );
    }

    #[test]
    fn range_years_use_the_leading_digits() {
        let normalized = normalize(
            &raw("2001\u{2013}2003", Some("7.0"), None),
            &NormalizeBounds::default(),
            &NoFallback,
        )
        .unwrap();
        assert_eq!(normalized.year.value(), 2001);
    }

    #[test]
    fn unavailable_rating_asks_the_fallback() {
        let normalized = normalize(
            &raw("1982", Some("N/A"), None),
            &NormalizeBounds::default(),
            &CannedFallback {
                year: 1982,
                rating: 6.5,
            },
        )
        .unwrap();
        assert_eq!(normalized.rating.value(), 6.5);
    }

    #[test]
    fn unusable_fields_without_fallback_fail() {
        let err = normalize(
            &raw("unknown", Some("8.1"), None),
            &NormalizeBounds::default(),
            &NoFallback,
        )
        .unwrap_err();
        assert!(matches!(err, NormalizeError::MissingField("year")));

        let err = normalize(
            &raw("1982", None, None),
            &NormalizeBounds::default(),
            &NoFallback,
        )
        .unwrap_err();
        assert!(matches!(err, NormalizeError::MissingField("rating")));
    }

    #[test]
    fn poster_sentinel_becomes_absent() {
        let bounds = NormalizeBounds::default();
        let normalized =
            normalize(&raw("1982", Some("8.1"), Some("N/A")), &bounds, &NoFallback)
                .unwrap();
        assert_eq!(normalized.poster, None);

        let normalized =
            normalize(&raw("1982", Some("8.1"), Some("")), &bounds, &NoFallback)
                .unwrap();
        assert_eq!(normalized.poster, None);
    }

    #[test]
    fn fetched_rating_is_rounded_to_one_decimal() {
        let normalized = normalize(
            &raw("1982", Some("8.67"), None),
            &NormalizeBounds::default(),
            &NoFallback,
        )
        .unwrap();
        assert_eq!(normalized.rating.value(), 8.7);
    }
}
