use async_trait::async_trait;
use cinelog_model::{Movie, NewMovie, Rating, User, UserId, UserName};

use super::Result;

/// Movie persistence operations, all scoped by the owning profile.
///
/// Every operation is durable on return for persistent backends; there is
/// no write buffering. Snapshots handed out by `list` are copies.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// A profile's movies in insertion order. Empty for an unknown profile.
    async fn list(&self, user_id: UserId) -> Result<Vec<Movie>>;

    /// Inserts the record as one atomic unit.
    /// Fails with [`super::StoreError::DuplicateTitle`] when the profile
    /// already owns a movie with this title; nothing is written in that case.
    async fn add(&self, user_id: UserId, movie: NewMovie) -> Result<Movie>;

    /// Number of rows removed (0 or 1). Zero is "not found", not an error.
    async fn delete(&self, user_id: UserId, title: &str) -> Result<u64>;

    /// Number of rows touched; zero means the title was not found.
    async fn update_rating(
        &self,
        user_id: UserId,
        title: &str,
        rating: Rating,
    ) -> Result<u64>;

    /// Number of rows touched; zero means the title was not found.
    async fn update_note(
        &self,
        user_id: UserId,
        title: &str,
        note: Option<&str>,
    ) -> Result<u64>;
}

/// Profile management repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All profiles in creation order; the order is stable within a session.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Fails with [`super::StoreError::DuplicateUser`] when the name is taken.
    async fn create_user(&self, name: &UserName) -> Result<User>;

    async fn get_user_by_name(&self, name: &str) -> Result<Option<User>>;
}
