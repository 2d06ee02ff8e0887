//! Persistence layer: repository ports plus the selectable backends.

pub mod memory;
pub mod ports;
pub mod sqlite;

pub use memory::MemoryStore;
pub use ports::{MovieRepository, UserRepository};
pub use sqlite::SqliteStore;

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie '{0}' already exists for this profile")]
    DuplicateTitle(String),

    #[error("profile '{0}' already exists")]
    DuplicateUser(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Model(#[from] cinelog_model::ModelError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Handle to the configured storage backend.
///
/// Both backends implement the same repository ports; which one backs the
/// handle is a configuration-time decision, not a code path.
#[derive(Clone)]
pub struct MovieDatabase {
    movies: Arc<dyn MovieRepository>,
    users: Arc<dyn UserRepository>,
}

impl MovieDatabase {
    /// SQLite-backed store at the given path, created when missing.
    pub async fn open_sqlite(path: &Path) -> Result<Self> {
        let store = Arc::new(SqliteStore::open(path).await?);
        Ok(Self {
            movies: store.clone(),
            users: store,
        })
    }

    /// Volatile in-memory store; collections vanish on exit.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            movies: store.clone(),
            users: store,
        }
    }

    pub fn movies(&self) -> &dyn MovieRepository {
        self.movies.as_ref()
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }
}
