use std::cmp::Ordering;

use cinelog_model::Movie;

/// Rating descending; equal ratings keep snapshot order.
pub fn sort_by_rating(movies: &[Movie]) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by(|a, b| {
        b.rating
            .value()
            .partial_cmp(&a.rating.value())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

/// Year ascending or descending; equal years keep snapshot order.
pub fn sort_by_year(movies: &[Movie], newest_first: bool) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    if newest_first {
        sorted.sort_by(|a, b| b.year.cmp(&a.year));
    } else {
        sorted.sort_by(|a, b| a.year.cmp(&b.year));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::super::testing::movie;
    use super::*;

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.title.to_string()).collect()
    }

    #[test]
    fn rating_sort_is_descending() {
        let movies = vec![
            movie("A", 2000, 6.0),
            movie("B", 2001, 9.0),
            movie("C", 2002, 7.5),
        ];
        assert_eq!(titles(&sort_by_rating(&movies)), ["B", "C", "A"]);
    }

    #[test]
    fn rating_ties_keep_snapshot_order() {
        let movies = vec![
            movie("First", 2000, 8.0),
            movie("Second", 2001, 8.0),
            movie("Third", 2002, 9.0),
        ];
        assert_eq!(
            titles(&sort_by_rating(&movies)),
            ["Third", "First", "Second"]
        );
    }

    #[test]
    fn newest_first_orders_by_year_descending() {
        let movies = vec![
            movie("A", 2000, 5.0),
            movie("B", 2020, 5.0),
            movie("C", 2010, 5.0),
        ];
        assert_eq!(titles(&sort_by_year(&movies, true)), ["B", "C", "A"]);
        assert_eq!(titles(&sort_by_year(&movies, false)), ["A", "C", "B"]);
    }

    #[test]
    fn year_ties_keep_snapshot_order() {
        let movies = vec![
            movie("First", 1999, 5.0),
            movie("Second", 1999, 6.0),
        ];
        assert_eq!(titles(&sort_by_year(&movies, true)), ["First", "Second"]);
        assert_eq!(titles(&sort_by_year(&movies, false)), ["First", "Second"]);
    }
}
