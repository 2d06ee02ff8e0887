use cinelog_model::Movie;

/// Optional bounds; a record matches when every supplied bound holds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterParams {
    pub min_rating: Option<f64>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

pub fn filter<'a>(movies: &'a [Movie], params: &FilterParams) -> Vec<&'a Movie> {
    movies
        .iter()
        .filter(|m| {
            params
                .min_rating
                .is_none_or(|min| m.rating.value() >= min)
                && params
                    .start_year
                    .is_none_or(|start| m.year.value() >= start)
                && params.end_year.is_none_or(|end| m.year.value() <= end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::testing::movie;
    use super::*;

    fn sample() -> Vec<Movie> {
        vec![
            movie("Old Gem", 1975, 8.5),
            movie("Modern Hit", 2015, 7.2),
            movie("Modern Flop", 2018, 4.0),
        ]
    }

    #[test]
    fn no_bounds_matches_everything() {
        let movies = sample();
        assert_eq!(filter(&movies, &FilterParams::default()).len(), 3);
    }

    #[test]
    fn all_supplied_bounds_must_hold() {
        let movies = sample();
        let params = FilterParams {
            min_rating: Some(7.0),
            start_year: Some(2000),
            end_year: None,
        };
        let hits = filter(&movies, &params);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title.as_str(), "Modern Hit");
    }

    #[test]
    fn end_year_is_inclusive() {
        let movies = sample();
        let params = FilterParams {
            min_rating: None,
            start_year: None,
            end_year: Some(2015),
        };
        let hits = filter(&movies, &params);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn nothing_matching_is_an_empty_sequence() {
        let movies = sample();
        let params = FilterParams {
            min_rating: Some(9.9),
            start_year: None,
            end_year: None,
        };
        assert!(filter(&movies, &params).is_empty());
    }
}
