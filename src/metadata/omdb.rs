//! OMDb API client.
//!
//! Single synchronous GET per lookup, no retries. The transport timeout is
//! the only resilience measure; this is not a critical path.

use super::{Lookup, LookupError, MetadataLookup, MovieMetadata};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

impl OmdbClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(OmdbClient {
            client,
            base_url,
            api_key,
        })
    }
}

impl MetadataLookup for OmdbClient {
    fn lookup(&self, title: &str) -> Result<Lookup, LookupError> {
        let api_key = self.api_key.as_deref().ok_or(LookupError::NotConfigured(
            "set an OMDb API key via --omdb-api-key, the [omdb] config section, or OMDB_API_KEY",
        ))?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("t", title), ("apikey", api_key)])
            .send()?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body: OmdbResponse = response.json()?;
        lookup_from_response(body)
    }
}

fn lookup_from_response(body: OmdbResponse) -> Result<Lookup, LookupError> {
    match body.response.as_deref() {
        Some("False") => Ok(Lookup::NotFound),
        Some("True") => {
            let title = body
                .title
                .filter(|t| !t.is_empty())
                .ok_or_else(|| LookupError::Malformed("positive response without Title".into()))?;
            Ok(Lookup::Found(MovieMetadata {
                title,
                year: body.year.as_deref().and_then(parse_year),
                rating: body.imdb_rating.as_deref().and_then(parse_rating),
                poster: body.poster.filter(|p| !p.is_empty() && p != "N/A"),
            }))
        }
        other => Err(LookupError::Malformed(format!(
            "unexpected Response field {:?}",
            other
        ))),
    }
}

/// OMDb years come as "1999" but also as ranges like "2010–2015" for series;
/// take the leading digit run.
fn parse_year(s: &str) -> Option<i32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

fn parse_rating(s: &str) -> Option<f64> {
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> OmdbResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_parse_year_variants() {
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year("2010–2015"), Some(2010));
        assert_eq!(parse_year("N/A"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_parse_rating_na_is_none() {
        assert_eq!(parse_rating("8.7"), Some(8.7));
        assert_eq!(parse_rating("N/A"), None);
    }

    #[test]
    fn test_found_response() {
        let lookup = lookup_from_response(response(serde_json::json!({
            "Response": "True",
            "Title": "The Matrix",
            "Year": "1999",
            "imdbRating": "8.7",
            "Poster": "http://example.com/matrix.jpg"
        })))
        .unwrap();

        assert_eq!(
            lookup,
            Lookup::Found(MovieMetadata {
                title: "The Matrix".to_string(),
                year: Some(1999),
                rating: Some(8.7),
                poster: Some("http://example.com/matrix.jpg".to_string()),
            })
        );
    }

    #[test]
    fn test_found_response_with_na_fields() {
        let lookup = lookup_from_response(response(serde_json::json!({
            "Response": "True",
            "Title": "Obscure Short",
            "Year": "N/A",
            "imdbRating": "N/A",
            "Poster": "N/A"
        })))
        .unwrap();

        match lookup {
            Lookup::Found(metadata) => {
                assert_eq!(metadata.year, None);
                assert_eq!(metadata.rating, None);
                assert_eq!(metadata.poster, None);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_response_is_not_found() {
        let lookup = lookup_from_response(response(serde_json::json!({
            "Response": "False",
            "Error": "Movie not found!"
        })))
        .unwrap();
        assert_eq!(lookup, Lookup::NotFound);
    }

    #[test]
    fn test_missing_response_field_is_malformed() {
        let result = lookup_from_response(response(serde_json::json!({
            "Title": "The Matrix"
        })));
        assert!(matches!(result, Err(LookupError::Malformed(_))));
    }

    #[test]
    fn test_positive_response_without_title_is_malformed() {
        let result = lookup_from_response(response(serde_json::json!({
            "Response": "True",
            "Year": "1999"
        })));
        assert!(matches!(result, Err(LookupError::Malformed(_))));
    }

    #[test]
    fn test_lookup_without_api_key_is_not_configured() {
        let client = OmdbClient::new(DEFAULT_OMDB_BASE_URL.to_string(), None).unwrap();
        let result = client.lookup("The Matrix");
        assert!(matches!(result, Err(LookupError::NotConfigured(_))));
    }
}
