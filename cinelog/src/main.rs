//! # cinelog
//!
//! Interactive text-menu manager for personal movie collections.
//!
//! Profiles own collections; movies are entered by hand or pulled from the
//! OMDb API, and every read-only view (stats, search, sorting, filtering)
//! works on a snapshot of the active profile's collection. Collections are
//! persisted to SQLite by default, or kept in memory with `--in-memory`.

mod input;
mod options;
mod shell;
mod website;

use anyhow::Context;
use cinelog_core::providers::OmdbProvider;
use cinelog_core::{MovieDatabase, UserRegistry};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::options::Options;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; a missing file is not an error.
    dotenvy::dotenv().ok();
    init_tracing();

    let opts = Options::parse();

    let db = if opts.in_memory {
        MovieDatabase::in_memory()
    } else {
        MovieDatabase::open_sqlite(&opts.database).await.with_context(
            || {
                format!(
                    "failed to open database at {}",
                    opts.database.display()
                )
            },
        )?
    };

    let provider = match omdb_api_key() {
        Some(key) => Some(
            OmdbProvider::new(key)
                .context("failed to build the OMDb client")?,
        ),
        None => None,
    };

    let registry = UserRegistry::new(db.clone());
    shell::run(db, registry, provider, &opts).await
}

/// A present-but-blank key is treated the same as an absent one; the shell
/// reports the missing configuration instead of sending empty credentials.
fn omdb_api_key() -> Option<String> {
    std::env::var("OMDB_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer().with_writer(std::io::stderr),
        )
        .init();
}
