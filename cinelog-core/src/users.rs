//! Profile registry over the configured storage backend.

use cinelog_model::{User, UserName};

use crate::store::{MovieDatabase, Result, StoreError};

/// Thin facade over the user repository port.
#[derive(Clone)]
pub struct UserRegistry {
    db: MovieDatabase,
}

impl UserRegistry {
    pub fn new(db: MovieDatabase) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.db.users().list_users().await
    }

    pub async fn create(&self, name: &str) -> Result<User> {
        let name = UserName::new(name)?;
        self.db.users().create_user(&name).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<User>> {
        self.db.users().get_user_by_name(name).await
    }

    /// Get-or-create, used by single-profile deployments.
    pub async fn ensure(&self, name: &str) -> Result<User> {
        if let Some(user) = self.get_by_name(name).await? {
            return Ok(user);
        }
        match self.create(name).await {
            Ok(user) => Ok(user),
            // Lost a race against another session on the same database.
            Err(StoreError::DuplicateUser(_)) => {
                self.get_by_name(name).await?.ok_or_else(|| {
                    StoreError::Internal(
                        "profile disappeared while ensuring it".to_string(),
                    )
                })
            }
            Err(e) => Err(e),
        }
    }
}
