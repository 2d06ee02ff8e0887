use serde::{Deserialize, Serialize};

use crate::{UserId, UserName};

/// A user profile owning a movie collection.
///
/// Profiles are created on demand and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
}
