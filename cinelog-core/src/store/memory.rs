//! Legacy in-memory backend.
//!
//! Implements the same repository ports as the SQLite store with no
//! durability; collections live and die with the process. Selected at
//! configuration time for throwaway sessions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use cinelog_model::{Movie, MovieId, NewMovie, Rating, User, UserId, UserName};

use super::ports::{MovieRepository, UserRepository};
use super::{Result, StoreError};

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    movies: HashMap<UserId, Vec<Movie>>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl MovieRepository for MemoryStore {
    async fn list(&self, user_id: UserId) -> Result<Vec<Movie>> {
        Ok(self
            .lock()
            .movies
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn add(&self, user_id: UserId, movie: NewMovie) -> Result<Movie> {
        let mut state = self.lock();
        let entries = state.movies.entry(user_id).or_default();
        if entries
            .iter()
            .any(|m| m.title.as_str() == movie.title.as_str())
        {
            return Err(StoreError::DuplicateTitle(movie.title.to_string()));
        }

        let record = Movie {
            id: MovieId::new(),
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
            poster: movie.poster,
            note: None,
        };
        entries.push(record.clone());
        Ok(record)
    }

    async fn delete(&self, user_id: UserId, title: &str) -> Result<u64> {
        let mut state = self.lock();
        let Some(entries) = state.movies.get_mut(&user_id) else {
            return Ok(0);
        };
        let before = entries.len();
        entries.retain(|m| m.title.as_str() != title);
        Ok((before - entries.len()) as u64)
    }

    async fn update_rating(
        &self,
        user_id: UserId,
        title: &str,
        rating: Rating,
    ) -> Result<u64> {
        let mut state = self.lock();
        let found = state
            .movies
            .get_mut(&user_id)
            .and_then(|entries| {
                entries.iter_mut().find(|m| m.title.as_str() == title)
            });
        match found {
            Some(movie) => {
                movie.rating = rating;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_note(
        &self,
        user_id: UserId,
        title: &str,
        note: Option<&str>,
    ) -> Result<u64> {
        let mut state = self.lock();
        let found = state
            .movies
            .get_mut(&user_id)
            .and_then(|entries| {
                entries.iter_mut().find(|m| m.title.as_str() == title)
            });
        match found {
            Some(movie) => {
                movie.note = note.map(str::to_string);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.lock().users.clone())
    }

    async fn create_user(&self, name: &UserName) -> Result<User> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.name.as_str() == name.as_str()) {
            return Err(StoreError::DuplicateUser(name.to_string()));
        }
        let user = User {
            id: UserId::new(),
            name: name.clone(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.name.as_str() == name)
            .cloned())
    }
}
