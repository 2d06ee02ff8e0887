use cinelog_model::{Movie, MovieTitle, Rating};

use super::QueryError;

/// Summary of a snapshot's ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    pub mean: f64,
    pub median: f64,
    pub highest: Rating,
    pub lowest: Rating,
    /// Titles sharing the highest rating, in snapshot order.
    pub best: Vec<MovieTitle>,
    /// Titles sharing the lowest rating, in snapshot order.
    pub worst: Vec<MovieTitle>,
}

/// Mean, median, and the titles at the rating extremes.
pub fn stats(movies: &[Movie]) -> Result<RatingStats, QueryError> {
    if movies.is_empty() {
        return Err(QueryError::EmptyCollection);
    }

    let ratings: Vec<f64> = movies.iter().map(|m| m.rating.value()).collect();
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let median = median_of(&ratings);

    let highest = ratings.iter().copied().fold(f64::MIN, f64::max);
    let lowest = ratings.iter().copied().fold(f64::MAX, f64::min);

    let best = movies
        .iter()
        .filter(|m| m.rating.value() == highest)
        .map(|m| m.title.clone())
        .collect();
    let worst = movies
        .iter()
        .filter(|m| m.rating.value() == lowest)
        .map(|m| m.title.clone())
        .collect();

    Ok(RatingStats {
        mean,
        median,
        highest: Rating::new(highest),
        lowest: Rating::new(lowest),
        best,
        worst,
    })
}

fn median_of(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::movie;
    use super::*;

    #[test]
    fn empty_snapshot_is_reported_not_computed() {
        assert_eq!(stats(&[]), Err(QueryError::EmptyCollection));
    }

    #[test]
    fn extremes_collect_every_tied_title() {
        let movies = vec![
            movie("A", 2000, 5.0),
            movie("B", 2001, 9.0),
            movie("C", 2002, 9.0),
        ];
        let summary = stats(&movies).unwrap();

        assert!((summary.mean - 7.666).abs() < 0.01);
        assert_eq!(summary.median, 9.0);
        assert_eq!(
            summary.best.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
            ["B", "C"]
        );
        assert_eq!(
            summary.worst.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
            ["A"]
        );
    }

    #[test]
    fn even_count_medians_average_the_middle_pair() {
        let movies = vec![
            movie("A", 2000, 4.0),
            movie("B", 2001, 6.0),
            movie("C", 2002, 8.0),
            movie("D", 2003, 9.0),
        ];
        let summary = stats(&movies).unwrap();
        assert_eq!(summary.median, 7.0);
    }

    #[test]
    fn single_movie_is_best_and_worst_at_once() {
        let movies = vec![movie("Solo", 2018, 6.9)];
        let summary = stats(&movies).unwrap();
        assert_eq!(summary.mean, 6.9);
        assert_eq!(summary.median, 6.9);
        assert_eq!(summary.best, summary.worst);
    }
}
