//! The interactive text-menu loop.

use anyhow::Result;
use cinelog_core::normalize::{self, NormalizeBounds};
use cinelog_core::providers::OmdbProvider;
use cinelog_core::query::{
    self, FilterParams, QueryError, SearchOutcome, SearchPolicy,
};
use cinelog_core::store::StoreError;
use cinelog_core::{MovieDatabase, UserRegistry};
use cinelog_model::{Movie, MovieTitle, NewMovie, Rating, User, Year};
use dialoguer::console::{Term, style};
use dialoguer::{Confirm, Select};
use tracing::warn;

use crate::input::{self, PromptFallback};
use crate::options::Options;
use crate::website;

const SINGLE_PROFILE_NAME: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Exit,
    ListMovies,
    AddMovie,
    AddFromOmdb,
    DeleteMovie,
    UpdateRating,
    UpdateNote,
    Stats,
    RandomMovie,
    SearchMovie,
    SortByRating,
    SortByYear,
    FilterMovies,
    GenerateWebsite,
    SwitchProfile,
}

impl MenuItem {
    fn label(&self) -> &'static str {
        match self {
            MenuItem::Exit => "Exit",
            MenuItem::ListMovies => "List movies",
            MenuItem::AddMovie => "Add movie",
            MenuItem::AddFromOmdb => "Add movie from OMDb",
            MenuItem::DeleteMovie => "Delete movie",
            MenuItem::UpdateRating => "Update rating",
            MenuItem::UpdateNote => "Update note",
            MenuItem::Stats => "Stats",
            MenuItem::RandomMovie => "Random movie",
            MenuItem::SearchMovie => "Search movie",
            MenuItem::SortByRating => "Movies sorted by rating",
            MenuItem::SortByYear => "Movies sorted by release year",
            MenuItem::FilterMovies => "Filter movies",
            MenuItem::GenerateWebsite => "Generate website",
            MenuItem::SwitchProfile => "Switch profile",
        }
    }
}

pub async fn run(
    db: MovieDatabase,
    registry: UserRegistry,
    provider: Option<OmdbProvider>,
    opts: &Options,
) -> Result<()> {
    let policy = SearchPolicy {
        fuzzy_cutoff: opts.fuzzy_cutoff,
        max_suggestions: opts.fuzzy_limit,
    };
    let bounds = NormalizeBounds::default();

    let mut active = if opts.single_user {
        registry.ensure(SINGLE_PROFILE_NAME).await?
    } else {
        select_profile(&registry).await?
    };

    println!("🎬 Welcome to cinelog, {}!", active.name);

    let mut items = vec![
        MenuItem::Exit,
        MenuItem::ListMovies,
        MenuItem::AddMovie,
        MenuItem::AddFromOmdb,
        MenuItem::DeleteMovie,
        MenuItem::UpdateRating,
        MenuItem::UpdateNote,
        MenuItem::Stats,
        MenuItem::RandomMovie,
        MenuItem::SearchMovie,
        MenuItem::SortByRating,
        MenuItem::SortByYear,
        MenuItem::FilterMovies,
        MenuItem::GenerateWebsite,
    ];
    if !opts.single_user {
        items.push(MenuItem::SwitchProfile);
    }

    loop {
        let labels: Vec<&str> = items.iter().map(MenuItem::label).collect();
        let choice = Select::new()
            .with_prompt(format!("{} - pick an action", active.name))
            .items(&labels)
            .default(0)
            .interact_on(&Term::stderr())?;

        let result = match items[choice] {
            MenuItem::Exit => break,
            MenuItem::ListMovies => list_movies(&db, &active).await,
            MenuItem::AddMovie => add_movie(&db, &active, &bounds).await,
            MenuItem::AddFromOmdb => {
                add_from_omdb(&db, &active, provider.as_ref(), &bounds).await
            }
            MenuItem::DeleteMovie => delete_movie(&db, &active).await,
            MenuItem::UpdateRating => {
                update_rating(&db, &active, &bounds).await
            }
            MenuItem::UpdateNote => update_note(&db, &active).await,
            MenuItem::Stats => show_stats(&db, &active).await,
            MenuItem::RandomMovie => random_movie(&db, &active).await,
            MenuItem::SearchMovie => {
                search_movies(&db, &active, &policy).await
            }
            MenuItem::SortByRating => sorted_by_rating(&db, &active).await,
            MenuItem::SortByYear => sorted_by_year(&db, &active).await,
            MenuItem::FilterMovies => filter_movies(&db, &active).await,
            MenuItem::GenerateWebsite => {
                generate_website(&db, &active, opts).await
            }
            MenuItem::SwitchProfile => match select_profile(&registry).await {
                Ok(user) => {
                    active = user;
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };

        // A failed action aborts the action, never the session.
        if let Err(e) = result {
            warn!(error = %e, "action failed");
            println!("{}", style(format!("Something went wrong: {e}")).red());
        }
        println!();
    }

    println!("\nBye! 👋");
    Ok(())
}

async fn select_profile(registry: &UserRegistry) -> Result<User> {
    loop {
        let users = registry.list().await?;
        let mut labels: Vec<String> =
            users.iter().map(|u| u.name.to_string()).collect();
        labels.push("New profile".to_string());

        let choice = Select::new()
            .with_prompt("Who is watching?")
            .items(&labels)
            .default(0)
            .interact_on(&Term::stderr())?;

        if choice < users.len() {
            return Ok(users[choice].clone());
        }

        let name = input::nonempty_string("Profile name")?;
        match registry.create(&name).await {
            Ok(user) => return Ok(user),
            Err(StoreError::DuplicateUser(name)) => {
                println!(
                    "{}",
                    style(format!("Profile '{name}' already exists."))
                        .yellow()
                );
            }
            Err(StoreError::Model(e)) => {
                println!("{}", style(e.to_string()).yellow());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_movie(movie: &Movie) {
    println!(
        "{} ({}): {}",
        style(movie.title.as_str()).blue(),
        movie.year,
        style(movie.rating).yellow()
    );
}

fn no_movies_yet() {
    println!("{}", style("No movies in the collection yet.").red());
}

async fn list_movies(db: &MovieDatabase, active: &User) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    if movies.is_empty() {
        no_movies_yet();
        return Ok(());
    }
    println!("\n{} movies in total\n", movies.len());
    for movie in &movies {
        print_movie(movie);
    }
    Ok(())
}

async fn add_movie(
    db: &MovieDatabase,
    active: &User,
    bounds: &NormalizeBounds,
) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    let title = input::nonempty_string("Enter new movie title")?;
    if movies.iter().any(|m| m.title.as_str() == title) {
        println!(
            "{}",
            style(format!("Movie '{title}' is already in the collection."))
                .red()
        );
        return Ok(());
    }

    let year = input::bounded_int(
        &format!(
            "Enter the year of release ({}-{})",
            bounds.year.start(),
            bounds.year.end()
        ),
        &bounds.year,
    )?;
    let rating = input::bounded_float(
        &format!(
            "Enter movie rating ({}-{})",
            bounds.rating.start(),
            bounds.rating.end()
        ),
        &bounds.rating,
    )?;

    let record = NewMovie::new(
        MovieTitle::new(&title)?,
        Year::new(year),
        Rating::new(rating),
    );
    match db.movies().add(active.id, record).await {
        Ok(movie) => {
            println!("Movie '{}' added successfully 🎉", movie.title);
        }
        Err(StoreError::DuplicateTitle(title)) => {
            println!(
                "{}",
                style(format!(
                    "Movie '{title}' is already in the collection."
                ))
                .red()
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn add_from_omdb(
    db: &MovieDatabase,
    active: &User,
    provider: Option<&OmdbProvider>,
    bounds: &NormalizeBounds,
) -> Result<()> {
    let Some(provider) = provider else {
        println!(
            "{}",
            style(
                "OMDB_API_KEY is not configured; set it in the environment \
                 or .env to enable lookups."
            )
            .yellow()
        );
        return Ok(());
    };

    let title = input::nonempty_string("Enter movie title to look up")?;
    let raw = match provider.fetch(&title).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            println!("OMDb does not know '{title}'.");
            return Ok(());
        }
        Err(e) => {
            println!(
                "{}",
                style(format!(
                    "Could not fetch from OMDb: {e}. Nothing was added."
                ))
                .red()
            );
            return Ok(());
        }
    };

    let normalized = normalize::normalize(&raw, bounds, &PromptFallback)?;
    let record =
        NewMovie::new(normalized.title, normalized.year, normalized.rating)
            .with_poster(normalized.poster);
    match db.movies().add(active.id, record).await {
        Ok(movie) => {
            println!("Movie '{}' added successfully 🎉", movie.title);
        }
        Err(StoreError::DuplicateTitle(title)) => {
            println!(
                "{}",
                style(format!(
                    "Movie '{title}' is already in the collection."
                ))
                .red()
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn delete_movie(db: &MovieDatabase, active: &User) -> Result<()> {
    if db.movies().list(active.id).await?.is_empty() {
        no_movies_yet();
        return Ok(());
    }

    loop {
        let title = input::nonempty_string(
            "Enter movie title to delete (or 'q' to cancel)",
        )?;
        if title.eq_ignore_ascii_case("q") {
            println!("{}", style("Cancelled.").yellow());
            return Ok(());
        }
        if db.movies().delete(active.id, &title).await? > 0 {
            println!("Movie '{title}' deleted ✅");
            return Ok(());
        }
        println!("{}", style(format!("Movie '{title}' not found.")).red());
    }
}

async fn update_rating(
    db: &MovieDatabase,
    active: &User,
    bounds: &NormalizeBounds,
) -> Result<()> {
    if db.movies().list(active.id).await?.is_empty() {
        no_movies_yet();
        return Ok(());
    }

    loop {
        let title = input::nonempty_string(
            "Enter movie title to update (or 'q' to cancel)",
        )?;
        if title.eq_ignore_ascii_case("q") {
            println!("{}", style("Cancelled.").yellow());
            return Ok(());
        }
        let rating = input::bounded_float(
            &format!(
                "Enter new rating ({}-{})",
                bounds.rating.start(),
                bounds.rating.end()
            ),
            &bounds.rating,
        )?;
        if db
            .movies()
            .update_rating(active.id, &title, Rating::new(rating))
            .await?
            > 0
        {
            println!("Movie '{title}' updated successfully 🎉");
            return Ok(());
        }
        println!("{}", style(format!("Movie '{title}' not found.")).red());
    }
}

async fn update_note(db: &MovieDatabase, active: &User) -> Result<()> {
    if db.movies().list(active.id).await?.is_empty() {
        no_movies_yet();
        return Ok(());
    }

    loop {
        let title = input::nonempty_string(
            "Enter movie title to annotate (or 'q' to cancel)",
        )?;
        if title.eq_ignore_ascii_case("q") {
            println!("{}", style("Cancelled.").yellow());
            return Ok(());
        }
        let note = input::optional_string("Note (leave blank to clear)")?;
        if db
            .movies()
            .update_note(active.id, &title, note.as_deref())
            .await?
            > 0
        {
            println!("Movie '{title}' updated successfully 🎉");
            return Ok(());
        }
        println!("{}", style(format!("Movie '{title}' not found.")).red());
    }
}

async fn show_stats(db: &MovieDatabase, active: &User) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    match query::stats(&movies) {
        Ok(summary) => {
            println!("📊 Average rating: {:.1}", summary.mean);
            println!("📈 Median rating: {:.1}", summary.median);
            println!(
                "🌟 Best movie(s): {} ({})",
                join_titles(&summary.best),
                summary.highest
            );
            println!(
                "💩 Worst movie(s): {} ({})",
                join_titles(&summary.worst),
                summary.lowest
            );
        }
        Err(QueryError::EmptyCollection) => no_movies_yet(),
    }
    Ok(())
}

fn join_titles(titles: &[MovieTitle]) -> String {
    titles
        .iter()
        .map(MovieTitle::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

async fn random_movie(db: &MovieDatabase, active: &User) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    match query::random_pick(&movies) {
        Some(movie) => println!(
            "Your movie for tonight: {} 🍿 (rated {})",
            style(movie.title.as_str()).magenta(),
            movie.rating
        ),
        None => no_movies_yet(),
    }
    Ok(())
}

async fn search_movies(
    db: &MovieDatabase,
    active: &User,
    policy: &SearchPolicy,
) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    if movies.is_empty() {
        no_movies_yet();
        return Ok(());
    }

    let query_str = input::nonempty_string("Enter a part of the movie title")?;
    match query::search(&movies, &query_str, policy) {
        SearchOutcome::Matches(hits) => {
            for movie in hits {
                println!(
                    "{}: {}",
                    style(movie.title.as_str()).blue(),
                    style(movie.rating).yellow()
                );
            }
        }
        SearchOutcome::Suggestions(hits) => {
            println!(
                "No movie matches \"{query_str}\". Did you mean:"
            );
            for movie in hits {
                println!("- {}", style(movie.title.as_str()).blue());
            }
        }
        SearchOutcome::Empty => {
            println!(
                "{}",
                style(format!("No matches found for \"{query_str}\"."))
                    .red()
            );
        }
    }
    Ok(())
}

async fn sorted_by_rating(db: &MovieDatabase, active: &User) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    if movies.is_empty() {
        no_movies_yet();
        return Ok(());
    }
    println!(
        "\n{} movies sorted by rating in descending order:\n",
        movies.len()
    );
    for movie in query::sort_by_rating(&movies) {
        print_movie(movie);
    }
    Ok(())
}

async fn sorted_by_year(db: &MovieDatabase, active: &User) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    if movies.is_empty() {
        no_movies_yet();
        return Ok(());
    }

    let newest_first = Confirm::new()
        .with_prompt("Latest movies first?")
        .default(true)
        .interact_on(&Term::stderr())?;

    println!("\n{} movies in chronological order:\n", movies.len());
    for movie in query::sort_by_year(&movies, newest_first) {
        print_movie(movie);
    }
    Ok(())
}

async fn filter_movies(db: &MovieDatabase, active: &User) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    if movies.is_empty() {
        no_movies_yet();
        return Ok(());
    }

    let params = FilterParams {
        min_rating: input::optional_float(
            "Enter min rating (leave blank for no minimum)",
        )?,
        start_year: input::optional_int(
            "Enter start year (leave blank for no start year)",
        )?,
        end_year: input::optional_int(
            "Enter end year (leave blank for no end year)",
        )?,
    };

    let hits = query::filter(&movies, &params);
    if hits.is_empty() {
        println!(
            "{}",
            style("No movies matching the given criteria were found.").red()
        );
        return Ok(());
    }
    println!("\n{} movies were found:\n", hits.len());
    for movie in hits {
        print_movie(movie);
    }
    Ok(())
}

async fn generate_website(
    db: &MovieDatabase,
    active: &User,
    opts: &Options,
) -> Result<()> {
    let movies = db.movies().list(active.id).await?;
    let path = website::generate(active, &movies, &opts.output_dir)?;
    println!("Website generated at {} 🎉", path.display());
    Ok(())
}
