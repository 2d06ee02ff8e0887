use crate::ModelError;
use serde::{Deserialize, Serialize};

/// Strongly typed movie title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieTitle(String);

impl MovieTitle {
    pub fn new(title: impl AsRef<str>) -> Result<Self, ModelError> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(ModelError::InvalidTitle(
                "movie title cannot be empty".to_string(),
            ));
        }
        Ok(MovieTitle(title.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for MovieTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MovieTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::hash::Hash for MovieTitle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialOrd for MovieTitle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MovieTitle {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_titles() {
        assert!(MovieTitle::new("").is_err());
        assert!(MovieTitle::new("   ").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let title = MovieTitle::new("  Alien  ").unwrap();
        assert_eq!(title.as_str(), "Alien");
    }
}
