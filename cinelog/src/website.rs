//! Static HTML export of a profile's collection.
//!
//! The core's only involvement is the snapshot handed in; everything here
//! is presentation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cinelog_model::{Movie, User};
use serde::Serialize;
use tera::Tera;

const TEMPLATE: &str = include_str!("../templates/collection.html");

#[derive(Debug, Serialize)]
struct Entry<'a> {
    title: &'a str,
    year: i32,
    rating: String,
    poster: Option<&'a str>,
    note: Option<&'a str>,
}

pub fn generate(
    user: &User,
    movies: &[Movie],
    out_dir: &Path,
) -> Result<PathBuf> {
    let mut tera = Tera::default();
    tera.add_raw_template("collection.html", TEMPLATE)
        .context("invalid collection template")?;

    let entries: Vec<Entry<'_>> = movies
        .iter()
        .map(|m| Entry {
            title: m.title.as_str(),
            year: m.year.value(),
            rating: m.rating.to_string(),
            poster: m.poster.as_deref(),
            note: m.note.as_deref(),
        })
        .collect();

    let mut ctx = tera::Context::new();
    ctx.insert(
        "page_title",
        &format!("{}'s Movie Collection", user.name),
    );
    ctx.insert("movies", &entries);

    let html = tera
        .render("collection.html", &ctx)
        .context("failed to render the collection page")?;

    let path = out_dir.join(format!("{}.html", slugify(user.name.as_str())));
    fs::write(&path, html)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// The output file name derives from the profile name.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use cinelog_model::{
        MovieId, MovieTitle, Rating, UserId, UserName, Year,
    };

    use super::*;

    fn sample_user(name: &str) -> User {
        User {
            id: UserId::new(),
            name: UserName::new(name).unwrap(),
        }
    }

    fn sample_movie(title: &str, note: Option<&str>) -> Movie {
        Movie {
            id: MovieId::new(),
            title: MovieTitle::new(title).unwrap(),
            year: Year::new(1982),
            rating: Rating::new(8.1),
            poster: Some("https://example.com/p.jpg".to_string()),
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn file_name_derives_from_profile_name() {
        assert_eq!(slugify("Movie Fan 42"), "movie_fan_42");
    }

    #[test]
    fn renders_titles_and_tooltips() {
        let dir = tempfile::tempdir().unwrap();
        let user = sample_user("Alice");
        let movies = vec![
            sample_movie("Blade Runner", Some("the director's cut")),
            sample_movie("Heat", None),
        ];

        let path = generate(&user, &movies, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "alice.html");

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("Alice&#x27;s Movie Collection"));
        assert!(html.contains("Blade Runner"));
        assert!(html.contains("1982"));
        assert!(html.contains("the director&#x27;s cut"));
    }

    #[test]
    fn empty_collection_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let user = sample_user("bob");
        let path = generate(&user, &[], dir.path()).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("Movie Collection"));
    }
}
