use cinelog_model::Movie;
use rand::Rng;

/// Uniformly random movie from the snapshot, `None` when it is empty.
pub fn random_pick(movies: &[Movie]) -> Option<&Movie> {
    if movies.is_empty() {
        return None;
    }
    let idx = rand::rng().random_range(0..movies.len());
    movies.get(idx)
}

#[cfg(test)]
mod tests {
    use super::super::testing::movie;
    use super::*;

    #[test]
    fn empty_snapshot_yields_nothing() {
        assert!(random_pick(&[]).is_none());
    }

    #[test]
    fn pick_comes_from_the_snapshot() {
        let movies =
            vec![movie("A", 2000, 5.0), movie("B", 2001, 6.0)];
        for _ in 0..20 {
            let picked = random_pick(&movies).unwrap();
            assert!(movies.iter().any(|m| m.id == picked.id));
        }
    }
}
