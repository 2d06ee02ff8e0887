//! OMDb metadata client.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

const OMDB_ENDPOINT: &str = "http://www.omdbapi.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Raw, untyped movie fields as returned by OMDb.
///
/// `"N/A"` is the source's sentinel for an unavailable rating or poster;
/// interpreting it is the normalizer's job, not the client's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmdbMovie {
    pub title: String,
    pub year: String,
    pub imdb_rating: Option<String>,
    pub poster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

pub struct OmdbProvider {
    client: reqwest::Client,
    api_key: String,
}

impl OmdbProvider {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Look a title up at OMDb.
    ///
    /// `Ok(None)` is the source's clean "no such title" answer; errors are
    /// reserved for an unreachable, timing-out, or misbehaving source.
    /// One attempt, no retries.
    pub async fn fetch(
        &self,
        title: &str,
    ) -> Result<Option<OmdbMovie>, ProviderError> {
        debug!(title, "omdb lookup");
        let response = self
            .client
            .get(OMDB_ENDPOINT)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProviderError::InvalidApiKey);
        }
        if !status.is_success() {
            return Err(ProviderError::Api(format!(
                "unexpected status {status}"
            )));
        }

        let body = response.text().await?;
        parse_envelope(&body)
    }
}

fn parse_envelope(body: &str) -> Result<Option<OmdbMovie>, ProviderError> {
    let envelope: OmdbEnvelope = serde_json::from_str(body)
        .map_err(|e| ProviderError::Parse(e.to_string()))?;

    // OMDb reports "no such title" in-band, with a 200 status.
    if envelope.response.eq_ignore_ascii_case("false") {
        debug!(
            reason = envelope.error.as_deref().unwrap_or("unknown"),
            "omdb miss"
        );
        return Ok(None);
    }

    let title = envelope
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            ProviderError::Parse("response is missing a title".to_string())
        })?;
    let year = envelope.year.ok_or_else(|| {
        ProviderError::Parse("response is missing a year".to_string())
    })?;

    Ok(Some(OmdbMovie {
        title,
        year,
        imdb_rating: envelope.imdb_rating,
        poster: envelope.poster,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_record() {
        let body = r#"{
            "Title": "Blade Runner",
            "Year": "1982",
            "imdbRating": "8.1",
            "Poster": "https://example.com/blade-runner.jpg",
            "Response": "True"
        }"#;
        let movie = parse_envelope(body).unwrap().unwrap();
        assert_eq!(movie.title, "Blade Runner");
        assert_eq!(movie.year, "1982");
        assert_eq!(movie.imdb_rating.as_deref(), Some("8.1"));
        assert_eq!(
            movie.poster.as_deref(),
            Some("https://example.com/blade-runner.jpg")
        );
    }

    #[test]
    fn not_found_is_a_clean_miss() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        assert_eq!(parse_envelope(body).unwrap(), None);
    }

    #[test]
    fn sentinel_fields_pass_through_raw() {
        let body = r#"{
            "Title": "Obscure Short",
            "Year": "2011",
            "imdbRating": "N/A",
            "Poster": "N/A",
            "Response": "True"
        }"#;
        let movie = parse_envelope(body).unwrap().unwrap();
        assert_eq!(movie.imdb_rating.as_deref(), Some("N/A"));
        assert_eq!(movie.poster.as_deref(), Some("N/A"));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(
            parse_envelope("not json"),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn missing_title_is_a_parse_error() {
        let body = r#"{"Response":"True","Year":"1999"}"#;
        assert!(matches!(
            parse_envelope(body),
            Err(ProviderError::Parse(_))
        ));
    }
}
