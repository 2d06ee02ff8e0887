use std::path::PathBuf;

use clap::Parser;

/// Command-line options for the interactive shell.
#[derive(Debug, Parser)]
#[command(
    name = "cinelog",
    version,
    about = "Personal movie collection manager"
)]
pub struct Options {
    /// SQLite database file backing the collections
    #[arg(long, default_value = "movies.db")]
    pub database: PathBuf,

    /// Keep collections in memory only; nothing survives exit
    #[arg(long)]
    pub in_memory: bool,

    /// Skip profile selection and use one shared profile
    #[arg(long)]
    pub single_user: bool,

    /// Similarity ratio (0-1) a fuzzy search suggestion must reach
    #[arg(long, default_value_t = 0.4)]
    pub fuzzy_cutoff: f64,

    /// Maximum number of fuzzy search suggestions to offer
    #[arg(long, default_value_t = 5)]
    pub fuzzy_limit: usize,

    /// Directory the generated website is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}
