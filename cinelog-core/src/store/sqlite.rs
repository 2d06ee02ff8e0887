//! SQLite-backed repository implementation.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use cinelog_model::{
    Movie, MovieId, MovieTitle, NewMovie, Rating, User, UserId, UserName, Year,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};
use uuid::Uuid;

use super::ports::{MovieRepository, UserRepository};
use super::{Result, StoreError};

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
)
"#;

const CREATE_MOVIES: &str = r#"
CREATE TABLE IF NOT EXISTS movies (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id),
    title TEXT NOT NULL,
    year INTEGER NOT NULL,
    rating REAL NOT NULL,
    poster TEXT,
    note TEXT,
    created_at TEXT NOT NULL,
    UNIQUE (user_id, title)
)
"#;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (and bootstrap) a database file, creating it when missing.
    pub async fn open(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        Self::connect_with(options).await
    }

    /// Fresh private in-memory database.
    pub async fn open_in_memory() -> Result<Self> {
        Self::connect_with(SqliteConnectOptions::new().in_memory(true)).await
    }

    async fn connect_with(options: SqliteConnectOptions) -> Result<Self> {
        // Single connection: one writer, and an in-memory database lives
        // and dies with its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.bootstrap().await?;
        Ok(store)
    }

    async fn bootstrap(&self) -> Result<()> {
        sqlx::query(CREATE_USERS).execute(&self.pool).await?;
        sqlx::query(CREATE_MOVIES).execute(&self.pool).await?;
        debug!("sqlite schema ready");
        Ok(())
    }
}

fn parse_uuid(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| StoreError::Internal(format!("invalid uuid in database: {e}")))
}

type MovieRow = (String, String, i64, f64, Option<String>, Option<String>);

fn decode_movie(row: MovieRow) -> Result<Movie> {
    let (id, title, year, rating, poster, note) = row;
    Ok(Movie {
        id: MovieId(parse_uuid(&id)?),
        title: MovieTitle::new(title)?,
        year: Year::new(year as i32),
        rating: Rating::new(rating),
        poster,
        note,
    })
}

fn map_unique_violation(
    e: sqlx::Error,
    dup: impl FnOnce() -> StoreError,
) -> StoreError {
    if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
        dup()
    } else {
        StoreError::Database(e)
    }
}

#[async_trait]
impl MovieRepository for SqliteStore {
    async fn list(&self, user_id: UserId) -> Result<Vec<Movie>> {
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, year, rating, poster, note
            FROM movies
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(decode_movie).collect()
    }

    async fn add(&self, user_id: UserId, movie: NewMovie) -> Result<Movie> {
        let id = MovieId::new();
        sqlx::query(
            r#"
            INSERT INTO movies (id, user_id, title, year, rating, poster, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(movie.title.as_str())
        .bind(i64::from(movie.year.value()))
        .bind(movie.rating.value())
        .bind(movie.poster.as_deref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                StoreError::DuplicateTitle(movie.title.to_string())
            })
        })?;

        debug!(profile = %user_id, title = %movie.title, "movie added");
        Ok(Movie {
            id,
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
            poster: movie.poster,
            note: None,
        })
    }

    async fn delete(&self, user_id: UserId, title: &str) -> Result<u64> {
        let result =
            sqlx::query("DELETE FROM movies WHERE user_id = ? AND title = ?")
                .bind(user_id.to_string())
                .bind(title)
                .execute(&self.pool)
                .await?;

        debug!(profile = %user_id, title, removed = result.rows_affected(), "movie delete");
        Ok(result.rows_affected())
    }

    async fn update_rating(
        &self,
        user_id: UserId,
        title: &str,
        rating: Rating,
    ) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE movies SET rating = ? WHERE user_id = ? AND title = ?",
        )
        .bind(rating.value())
        .bind(user_id.to_string())
        .bind(title)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_note(
        &self,
        user_id: UserId,
        title: &str,
        note: Option<&str>,
    ) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE movies SET note = ? WHERE user_id = ? AND title = ?",
        )
        .bind(note)
        .bind(user_id.to_string())
        .bind(title)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT id, name FROM users ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, name)| {
                Ok(User {
                    id: UserId(parse_uuid(&id)?),
                    name: UserName::new(name)?,
                })
            })
            .collect()
    }

    async fn create_user(&self, name: &UserName) -> Result<User> {
        let id = UserId::new();
        sqlx::query("INSERT INTO users (id, name, created_at) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(name.as_str())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || {
                    StoreError::DuplicateUser(name.to_string())
                })
            })?;

        info!(profile = %name, "profile created");
        Ok(User {
            id,
            name: name.clone(),
        })
    }

    async fn get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, (String, String)>(
            "SELECT id, name FROM users WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(id, name)| {
            Ok(User {
                id: UserId(parse_uuid(&id)?),
                name: UserName::new(name)?,
            })
        })
        .transpose()
    }
}
