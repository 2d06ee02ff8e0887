//! External metadata providers.

pub mod omdb;

pub use omdb::{OmdbMovie, OmdbProvider, ProviderError};
