use crate::ModelError;
use serde::{Deserialize, Serialize};

/// Profile name value object with validation
///
/// A profile name is a non-empty trimmed string of at most 64 characters.
/// Case is preserved; uniqueness across profiles is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl AsRef<str>) -> Result<Self, ModelError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ModelError::InvalidName(
                "profile name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > 64 {
            return Err(ModelError::InvalidName(
                "profile name is limited to 64 characters".to_string(),
            ));
        }
        Ok(UserName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("Movie Fan 42").is_ok());
    }

    #[test]
    fn invalid_names() {
        assert!(UserName::new("").is_err());
        assert!(UserName::new("   ").is_err());
        assert!(UserName::new("x".repeat(65)).is_err());
    }

    #[test]
    fn preserves_case_and_trims() {
        let name = UserName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }
}
