//! Two-phase title search: substring first, fuzzy suggestions second.
//!
//! The fuzzy phase only runs when the substring phase comes up empty, and
//! it ranks by normalized Levenshtein similarity so the cutoff reads as a
//! 0..1 ratio rather than an opaque score.

use cinelog_model::Movie;
use strsim::normalized_levenshtein;

/// Tunable fuzzy-suggestion policy.
///
/// The defaults mirror what the shell ships with; both knobs are
/// configuration, not contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchPolicy {
    /// Minimum normalized similarity for a suggestion to qualify.
    pub fuzzy_cutoff: f64,
    /// Upper bound on the number of suggestions returned.
    pub max_suggestions: usize,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: 0.4,
            max_suggestions: 5,
        }
    }
}

/// Result of a two-phase title search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Case-insensitive substring hits, in snapshot order.
    Matches(Vec<&'a Movie>),
    /// No substring hit; closest titles by similarity, best first.
    Suggestions(Vec<&'a Movie>),
    /// Nothing even remotely close.
    Empty,
}

pub fn search<'a>(
    movies: &'a [Movie],
    query: &str,
    policy: &SearchPolicy,
) -> SearchOutcome<'a> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchOutcome::Empty;
    }

    let matches: Vec<&Movie> = movies
        .iter()
        .filter(|m| m.title.as_str().to_lowercase().contains(&needle))
        .collect();
    if !matches.is_empty() {
        return SearchOutcome::Matches(matches);
    }

    let mut scored: Vec<(&Movie, f64)> = movies
        .iter()
        .filter_map(|m| {
            let similarity = normalized_levenshtein(
                &needle,
                &m.title.as_str().to_lowercase(),
            );
            (similarity >= policy.fuzzy_cutoff).then_some((m, similarity))
        })
        .collect();
    // Stable sort keeps snapshot order among equally similar titles.
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(policy.max_suggestions);

    if scored.is_empty() {
        SearchOutcome::Empty
    } else {
        SearchOutcome::Suggestions(
            scored.into_iter().map(|(m, _)| m).collect(),
        )
    }
}
