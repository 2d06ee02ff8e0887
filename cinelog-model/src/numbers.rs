use serde::{Deserialize, Serialize};

/// Release year
///
/// The model places no bounds on the year; input bounds are a caller-side
/// validation concern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Year(i32);

impl Year {
    pub fn new(year: i32) -> Self {
        Year(year)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Year(year)
    }
}

/// Movie rating, stored rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Rating(f64);

impl Rating {
    /// Rounds to one decimal place before storing.
    pub fn new(value: f64) -> Self {
        Rating((value * 10.0).round() / 10.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rounds_to_one_decimal() {
        assert_eq!(Rating::new(7.25).value(), 7.3);
        assert_eq!(Rating::new(8.64).value(), 8.6);
        assert_eq!(Rating::new(9.0).value(), 9.0);
    }

    #[test]
    fn rating_displays_one_decimal() {
        assert_eq!(Rating::new(8.0).to_string(), "8.0");
        assert_eq!(Rating::new(7.666).to_string(), "7.7");
    }
}
